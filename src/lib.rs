#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mixin-order
//!
//! mixin-order computes dependency-respecting orderings of items. It provides a generic,
//! level-based topological sort and a mixin ordering layer built on top of it.
//!
//! ## Features
//! - Level-based topological sorting over any hashable element type, with cycle detection
//! - Configurable handling of dependencies that are not part of the input set
//!   ([`MissingDependencyPolicy`](crate::topology::MissingDependencyPolicy))
//! - Optional per-level sub-sort for deterministic tie-breaking
//! - Mixin ordering with shared-override ambiguity detection and an alphabetic fallback
//! - JSON mixin configuration via `serde`
//!
//! ## Determinism
//!
//! The generic sorter emits each level in input order unless a sub-sort is supplied.
//! The mixin sorter orders each level by full type name and refuses to guess when two
//! or more mixins override the same member without opting into alphabetic ordering.
//!
//! ## Edge convention
//!
//! A dependency `A → B` places `A` before `B`: the first level holds the elements nothing
//! depends on. Use [`SortDirection::Descending`](crate::topology::SortDirection) for the
//! reverse.
//!
//! ```rust
//! use mixin_order::prelude::*;
//!
//! let mixins = vec![
//!     MixinDefinition::new("NullMixin"),
//!     MixinDefinition::new("NullMixin2").depends_on("NullMixin3"),
//!     MixinDefinition::new("NullMixin3").depends_on("NullMixin"),
//! ];
//! let names: Vec<_> = sort_mixins(&mixins)
//!     .unwrap()
//!     .into_iter()
//!     .map(|m| m.full_name.as_str())
//!     .collect();
//! assert_eq!(names, ["NullMixin2", "NullMixin3", "NullMixin"]);
//! ```

pub mod debug_invariants;
pub mod mixin_error;
pub mod mixins;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mixin_error::{AmbiguousGroup, MixinOrderError};
    pub use crate::mixins::configuration::{ClassContext, MixinConfiguration};
    pub use crate::mixins::definition::MixinDefinition;
    pub use crate::mixins::grouping::{OverrideGroup, shared_override_groups};
    pub use crate::mixins::sorter::{MixinSorter, sort_mixins};
    pub use crate::topology::bounds::ElementLike;
    pub use crate::topology::graph::DependencyGraph;
    pub use crate::topology::sort::{
        topology_sort, topology_sort_by_key, topology_sort_levels, topology_sort_levels_with,
    };
    pub use crate::topology::{MissingDependencyPolicy, SortDirection, SortOptions, TopologyError};
}
