//! Shared-override grouping within one dependency level.
//!
//! Mixins in the same level have no ordering constraint between them. That is only a
//! problem when two or more of them override the same member, since their overrides
//! then chain in whatever order the sorter picks. This module finds those clashes.

use crate::mixin_error::AmbiguousGroup;
use crate::mixins::definition::MixinDefinition;
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

/// Mixins of one level that all override the same member(s).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverrideGroup<'a> {
    /// Mixins in the group, ordered by full name.
    pub mixins: Vec<&'a MixinDefinition>,
    /// Members overridden by every mixin in the group, sorted.
    pub members: Vec<&'a str>,
}

impl OverrideGroup<'_> {
    /// Number of mixins in the group that do not accept alphabetic ordering.
    pub fn non_accepting(&self) -> usize {
        self.mixins
            .iter()
            .filter(|m| !m.accepts_alphabetic_ordering)
            .count()
    }

    /// A group can be ordered alphabetically only if at most one mixin objects.
    pub fn is_ambiguous(&self) -> bool {
        self.non_accepting() > 1
    }

    /// Owned form used in error reports.
    pub fn to_ambiguous_group(&self) -> AmbiguousGroup {
        AmbiguousGroup {
            mixins: self.mixins.iter().map(|m| m.full_name.clone()).collect(),
            members: self.members.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Group the mixins of `level` by the members they override in common.
///
/// Only members overridden by two or more mixins produce a group. Members whose
/// overriding mixins are exactly the same set are merged into one group.
/// Groups come out ordered by their alphabetically first member.
pub fn shared_override_groups<'a>(level: &[&'a MixinDefinition]) -> Vec<OverrideGroup<'a>> {
    // 1) member -> mixins overriding it
    let mut by_member: BTreeMap<&'a str, Vec<&'a MixinDefinition>> = BTreeMap::new();
    for &mixin in level {
        for member in mixin.overridden_members.iter().map(String::as_str).unique() {
            by_member.entry(member).or_default().push(mixin);
        }
    }

    // 2) merge members shared by the same mixin set
    let mut groups: Vec<OverrideGroup<'a>> = Vec::new();
    let mut by_set: HashMap<Vec<&'a str>, usize> = HashMap::new();
    for (member, mut mixins) in by_member {
        if mixins.len() < 2 {
            continue;
        }
        mixins.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        let key: Vec<&'a str> = mixins.iter().map(|m| m.full_name.as_str()).collect();
        match by_set.get(&key).copied() {
            Some(g) => groups[g].members.push(member),
            None => {
                by_set.insert(key, groups.len());
                groups.push(OverrideGroup {
                    mixins,
                    members: vec![member],
                });
            }
        }
    }
    groups
}
