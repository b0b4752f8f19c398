//! Level-based topological sorting.
//!
//! The sorter repeatedly collects every node whose referrer count is zero, emits them
//! as one level, drops their outgoing edges, and repeats until all included nodes are
//! emitted. If nodes remain but none is free, the input contains a cycle.
//!
//! The first level holds the elements nothing depends on; the last level holds the
//! elements everything else depends on. [`SortDirection::Descending`] reverses this.
//!
//! # Errors
//! * [`TopologyError::DuplicateElement`]: the same element was supplied twice.
//! * [`TopologyError::CycleDetected`]: no element is free while unsorted elements remain.
//!   The error carries every element still unsorted at that point, in input order.

#[allow(unused_imports)]
use crate::debug_invariants::DebugInvariants;
use crate::topology::bounds::ElementLike;
use crate::topology::error::TopologyError;
use crate::topology::graph::DependencyGraph;
use crate::topology::{SortDirection, SortOptions};

/// Sort `elements` into dependency levels, applying `sub_sort` to each level.
///
/// `sub_sort` receives a level in input order and returns it in the order to emit.
/// It may fail, aborting the sort with its error.
///
/// ## Complexity
/// - Time: **O(|V| + |E|)** plus the cost of `sub_sort`
/// - Space: **O(|V| + |E|)**
pub fn topology_sort_levels_with<T, E, I, F, D, S>(
    elements: I,
    get_dependencies: F,
    options: SortOptions,
    mut sub_sort: S,
) -> Result<Vec<Vec<T>>, E>
where
    T: ElementLike,
    E: From<TopologyError<T>>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> D,
    D: IntoIterator<Item = T>,
    S: FnMut(Vec<T>) -> Result<Vec<T>, E>,
{
    let mut graph = DependencyGraph::build(elements, get_dependencies, options.missing)?;
    crate::debug_invariants!(
        DebugInvariants::validate_invariants(&graph),
        "dependency graph after build"
    );

    let mut unsorted = graph.included_indices();
    let total = unsorted.len();
    let mut levels = Vec::new();
    while !unsorted.is_empty() {
        // 1) Split into free and still-referenced nodes, keeping arena order
        let (unreferred, remaining): (Vec<usize>, Vec<usize>) = unsorted
            .into_iter()
            .partition(|&i| graph.referrer_count_at(i) == 0);

        if unreferred.is_empty() {
            let remaining: Vec<T> = remaining
                .iter()
                .map(|&i| graph.content(i).clone())
                .collect();
            log::debug!(
                "Cyclic dependency: {} of {} elements cannot be ordered",
                remaining.len(),
                total
            );
            return Err(TopologyError::CycleDetected { remaining }.into());
        }

        // 2) Emit the level and release its dependencies
        for &i in &unreferred {
            graph.emit(i);
        }

        let level: Vec<T> = unreferred
            .iter()
            .map(|&i| graph.content(i).clone())
            .collect();
        let level = sub_sort(level)?;
        log::trace!("Level {}: {:?}", levels.len(), level);
        levels.push(level);
        unsorted = remaining;
    }

    crate::debug_invariants!(
        DebugInvariants::validate_invariants(&graph),
        "dependency graph after sort"
    );

    if options.direction == SortDirection::Descending {
        levels.reverse();
    }
    log::debug!(
        "Sorted {} elements into {} levels ({:?})",
        total,
        levels.len(),
        options.direction
    );
    Ok(levels)
}

/// Sort `elements` into dependency levels. Each level keeps input order.
pub fn topology_sort_levels<T, I, F, D>(
    elements: I,
    get_dependencies: F,
    options: SortOptions,
) -> Result<Vec<Vec<T>>, TopologyError<T>>
where
    T: ElementLike,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> D,
    D: IntoIterator<Item = T>,
{
    topology_sort_levels_with(elements, get_dependencies, options, Ok)
}

/// Sort `elements` and flatten the levels into one sequence.
pub fn topology_sort<T, I, F, D>(
    elements: I,
    get_dependencies: F,
    options: SortOptions,
) -> Result<Vec<T>, TopologyError<T>>
where
    T: ElementLike,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> D,
    D: IntoIterator<Item = T>,
{
    let levels = topology_sort_levels(elements, get_dependencies, options)?;
    Ok(levels.into_iter().flatten().collect())
}

/// Sort `elements`, order each level by `key`, and flatten.
///
/// The per-level sort is stable, so elements with equal keys keep input order.
pub fn topology_sort_by_key<T, I, F, D, K, G>(
    elements: I,
    get_dependencies: F,
    options: SortOptions,
    mut key: G,
) -> Result<Vec<T>, TopologyError<T>>
where
    T: ElementLike,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> D,
    D: IntoIterator<Item = T>,
    K: Ord,
    G: FnMut(&T) -> K,
{
    let levels = topology_sort_levels_with(elements, get_dependencies, options, |mut level| {
        level.sort_by_key(&mut key);
        Ok::<_, TopologyError<T>>(level)
    })?;
    Ok(levels.into_iter().flatten().collect())
}
