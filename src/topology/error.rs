//! Errors for the generic topological sorter

use thiserror::Error;

/// Errors from dependency-graph construction and topological sorting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError<T> {
    /// The same element was supplied twice.
    #[error("Topology error: element {0:?} appears more than once in the input")]
    DuplicateElement(T),
    /// No element is free while unsorted elements remain.
    #[error("Topology error: cyclic dependency detected among {remaining:?}")]
    CycleDetected {
        /// Every element that was still unsorted when the sort got stuck.
        remaining: Vec<T>,
    },
    /// Internal bookkeeping check failed.
    #[error("Topology invariant violated: {0}")]
    InvariantViolation(String),
}
