//! Mixin ordering built on the generic topological sorter.
//!
//! - [`definition::MixinDefinition`]: caller-supplied descriptor of one mixin
//! - [`grouping`]: shared-override groups and ambiguity checks within a level
//! - [`sorter::MixinSorter`]: dependency-respecting, deterministic mixin order
//! - [`configuration`]: per-target-class mixin configuration loaded via `serde`

pub mod configuration;
pub mod definition;
pub mod grouping;
pub mod sorter;

pub use configuration::{ClassContext, MixinConfiguration};
pub use definition::MixinDefinition;
pub use grouping::{OverrideGroup, shared_override_groups};
pub use sorter::{MixinSorter, sort_mixins};
