//! MixinOrderError: Unified error type for mixin ordering
//!
//! Both ordering failures describe configuration problems in the caller's declared
//! dependencies or overrides. They abort the whole sort; there is no partial result.
//! The rendered messages are part of the public contract and are asserted verbatim
//! by the test-suite.

use crate::topology::TopologyError;
use itertools::Itertools;
use thiserror::Error;

/// A set of same-level mixins that override the same members and cannot be ordered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmbiguousGroup {
    /// Full names of the mixins in the group, sorted.
    pub mixins: Vec<String>,
    /// Names of the members every mixin in the group overrides, sorted.
    pub members: Vec<String>,
}

impl std::fmt::Display for AmbiguousGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}} (overriding: {})",
            quoted(&self.mixins),
            quoted(&self.members)
        )
    }
}

/// Unified error type for mixin ordering operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MixinOrderError {
    /// Two mixin definitions share a full name.
    #[error("Mixin '{0}' is configured more than once")]
    DuplicateMixin(String),
    /// The declared dependencies contain a cycle.
    #[error(
        "The following mixins have cyclic dependencies and cannot be ordered:\n{}.",
        render_cycle(.mixins)
    )]
    CyclicDependency {
        /// Full names of every mixin left unsorted by the cycle, sorted.
        mixins: Vec<String>,
    },
    /// Mixins override the same member without enough dependency information.
    #[error(
        "The following mixin groups require a clear base call ordering, but do not provide enough dependency information:\n{}\nPlease supply additional dependencies to the mixin definitions, mark them as accepting alphabetic ordering, or adjust the mixin configuration accordingly.",
        render_groups(.groups)
    )]
    AmbiguousOrdering {
        /// Every unresolved group, in discovery order.
        groups: Vec<AmbiguousGroup>,
    },
    /// Ordering failed for the mixins of one target class.
    #[error("Cannot order the mixins applied to '{target_class}':\n{source}")]
    InTargetClass {
        /// Full name of the class whose mixins failed to order.
        target_class: String,
        /// The ordering failure itself.
        #[source]
        source: Box<MixinOrderError>,
    },
    /// A mixin configuration could not be read or is inconsistent.
    #[error("Invalid mixin configuration: {0}")]
    Configuration(String),
}

impl MixinOrderError {
    /// The underlying ordering error, looking through [`MixinOrderError::InTargetClass`].
    pub fn root(&self) -> &MixinOrderError {
        match self {
            MixinOrderError::InTargetClass { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<TopologyError<&str>> for MixinOrderError {
    fn from(e: TopologyError<&str>) -> Self {
        match e {
            TopologyError::DuplicateElement(name) => Self::DuplicateMixin(name.to_owned()),
            TopologyError::CycleDetected { remaining } => Self::CyclicDependency {
                mixins: remaining.into_iter().sorted().map(str::to_owned).collect(),
            },
            TopologyError::InvariantViolation(msg) => Self::Configuration(msg),
        }
    }
}

impl From<serde_json::Error> for MixinOrderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Configuration(e.to_string())
    }
}

fn render_cycle(mixins: &[String]) -> String {
    mixins.iter().map(|m| format!("'{m}'")).join(",\n")
}

fn render_groups(groups: &[AmbiguousGroup]) -> String {
    groups.iter().join("\n")
}

fn quoted(names: &[String]) -> String {
    names.iter().map(|n| format!("'{n}'")).join(", ")
}
