//! Dependency-respecting, deterministic mixin ordering.
//!
//! [`MixinSorter`] feeds the declared dependencies into the generic level sorter and
//! orders every level by full name. Before doing so it checks the level for mixins that
//! override the same member: such a clash is only settled alphabetically if at most one
//! of the mixins involved lacks `accepts_alphabetic_ordering`. Otherwise the sort fails
//! instead of guessing, after collecting the unresolved groups of every level.
//! A cycle takes precedence over ambiguity, since it leaves later levels unordered.
//!
//! A mixin is placed before every mixin it depends on. Dependencies on names outside
//! the supplied set are ignored.

use crate::mixin_error::{AmbiguousGroup, MixinOrderError};
use crate::mixins::definition::MixinDefinition;
use crate::mixins::grouping::{OverrideGroup, shared_override_groups};
use crate::topology::sort::topology_sort_levels_with;
use crate::topology::{MissingDependencyPolicy, SortOptions};
use std::collections::HashMap;

/// Orders the mixins applied to one target class.
#[derive(Clone, Debug, Default)]
pub struct MixinSorter {
    target_class: Option<String>,
}

impl MixinSorter {
    /// A sorter with no target-class name attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sorter for the mixins of `target_class`. The name only appears in log output.
    pub fn for_target(target_class: impl Into<String>) -> Self {
        Self {
            target_class: Some(target_class.into()),
        }
    }

    /// Target-class name, if any.
    pub fn target_class(&self) -> Option<&str> {
        self.target_class.as_deref()
    }

    /// Sort `mixins` into dependency levels, each ordered by full name.
    ///
    /// # Errors
    /// * [`MixinOrderError::DuplicateMixin`]: two definitions share a full name.
    /// * [`MixinOrderError::CyclicDependency`]: the declared dependencies form a cycle.
    /// * [`MixinOrderError::AmbiguousOrdering`]: mixins in one level override the same
    ///   member and more than one of them does not accept alphabetic ordering. Every such
    ///   group is reported, level by level.
    pub fn sort_levels<'a, I>(
        &self,
        mixins: I,
    ) -> Result<Vec<Vec<&'a MixinDefinition>>, MixinOrderError>
    where
        I: IntoIterator<Item = &'a MixinDefinition>,
    {
        let mixins: Vec<&'a MixinDefinition> = mixins.into_iter().collect();
        let mut by_name: HashMap<&'a str, &'a MixinDefinition> =
            HashMap::with_capacity(mixins.len());
        for &mixin in &mixins {
            if by_name.insert(mixin.full_name.as_str(), mixin).is_some() {
                return Err(MixinOrderError::DuplicateMixin(mixin.full_name.clone()));
            }
        }

        let options = SortOptions::default().with_missing(MissingDependencyPolicy::Ignore);
        let mut ambiguous = Vec::new();
        let levels = topology_sort_levels_with(
            mixins.iter().map(|m| m.full_name.as_str()),
            |name| {
                by_name
                    .get(name)
                    .copied()
                    .map(|m| m.dependencies.iter().map(String::as_str).collect::<Vec<_>>())
                    .unwrap_or_else(Vec::new)
            },
            options,
            |level| {
                Ok::<_, MixinOrderError>(self.order_level(level, &by_name, &mut ambiguous))
            },
        )
        .inspect_err(|e| log::warn!("{}: {}", self.describe_target(), e))?;

        if !ambiguous.is_empty() {
            let err = MixinOrderError::AmbiguousOrdering { groups: ambiguous };
            log::warn!("{}: {}", self.describe_target(), err);
            return Err(err);
        }

        log::debug!(
            "{}: ordered {} mixins in {} levels",
            self.describe_target(),
            mixins.len(),
            levels.len()
        );
        Ok(levels
            .into_iter()
            .map(|level| {
                level
                    .into_iter()
                    .filter_map(|name| by_name.get(name).copied())
                    .collect()
            })
            .collect())
    }

    /// Sort `mixins` and flatten the levels into one order.
    pub fn sort<'a, I>(&self, mixins: I) -> Result<Vec<&'a MixinDefinition>, MixinOrderError>
    where
        I: IntoIterator<Item = &'a MixinDefinition>,
    {
        Ok(self.sort_levels(mixins)?.into_iter().flatten().collect())
    }

    /// Order one level by full name, appending its unresolved override clashes to
    /// `ambiguous`.
    fn order_level<'a>(
        &self,
        level: Vec<&'a str>,
        by_name: &HashMap<&'a str, &'a MixinDefinition>,
        ambiguous: &mut Vec<AmbiguousGroup>,
    ) -> Vec<&'a str> {
        let mut level: Vec<&'a MixinDefinition> = level
            .into_iter()
            .filter_map(|name| by_name.get(name).copied())
            .collect();

        let (unresolved, resolved): (Vec<_>, Vec<_>) = shared_override_groups(&level)
            .into_iter()
            .partition(OverrideGroup::is_ambiguous);
        ambiguous.extend(unresolved.iter().map(OverrideGroup::to_ambiguous_group));
        for group in &resolved {
            log::debug!(
                "{}: ordering {:?} alphabetically (overriding {:?})",
                self.describe_target(),
                group.mixins.iter().map(|m| m.name()).collect::<Vec<_>>(),
                group.members
            );
        }

        level.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        level.into_iter().map(|m| m.full_name.as_str()).collect()
    }

    fn describe_target(&self) -> &str {
        self.target_class.as_deref().unwrap_or("<mixins>")
    }
}

/// Sort `mixins` with a default [`MixinSorter`].
pub fn sort_mixins<'a, I>(mixins: I) -> Result<Vec<&'a MixinDefinition>, MixinOrderError>
where
    I: IntoIterator<Item = &'a MixinDefinition>,
{
    MixinSorter::new().sort(mixins)
}
