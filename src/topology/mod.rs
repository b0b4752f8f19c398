//! Generic dependency-respecting topological sorting.
//!
//! This module provides the domain-agnostic core of the crate:
//! - [`graph::DependencyGraph`], an index-addressed node arena built from elements
//!   and a dependency lookup
//! - [`sort`], the level-based sorter with an optional per-level sub-sort
//! - [`SortOptions`], selecting the [`MissingDependencyPolicy`] and [`SortDirection`]
//!
//! The sorter does not break ties itself. Elements that become free at the same time
//! form one level, and any secondary order is up to the sub-sort callback.

pub mod bounds;
pub mod error;
pub mod graph;
pub mod sort;

pub use bounds::ElementLike;
pub use error::TopologyError;
pub use graph::DependencyGraph;

/// How to treat dependencies that are not part of the input set.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MissingDependencyPolicy {
    /// Drop the dependency; it contributes no edge.
    #[default]
    Ignore,
    /// Track the dependency as a hidden node. Its own dependencies still constrain the
    /// order, but it is never emitted and never blocks anything.
    Respect,
    /// Add the dependency as a regular node that is emitted like any input element.
    Include,
}

/// Order in which levels are returned.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SortDirection {
    /// Elements nothing depends on first.
    #[default]
    Ascending,
    /// Elements everything else depends on first.
    Descending,
}

/// Options for the topological sorter.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SortOptions {
    /// Treatment of dependencies outside the input set.
    pub missing: MissingDependencyPolicy,
    /// Order of the returned levels.
    pub direction: SortDirection,
}

impl SortOptions {
    /// Options with an explicit missing-dependency policy and direction.
    pub fn new(missing: MissingDependencyPolicy, direction: SortDirection) -> Self {
        Self { missing, direction }
    }

    /// Replace the missing-dependency policy.
    pub fn with_missing(mut self, missing: MissingDependencyPolicy) -> Self {
        self.missing = missing;
        self
    }

    /// Return levels in descending order.
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }
}

#[cfg(test)]
mod tests;
