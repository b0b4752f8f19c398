//! Dependency-graph construction for the topological sorter.
//!
//! [`DependencyGraph`] stores one node per distinct element in a `Vec` arena, addressed
//! by index. Edges are index lists, so there are no ownership cycles between nodes.
//!
//! # Node bookkeeping
//! Every node carries a `referrer_count`: the number of included, not-yet-emitted nodes
//! with an edge to it. Emitting a node drops its edges, decrementing the count of each
//! of its dependencies exactly once. A node is free to be emitted once its count is zero.
//!
//! # Missing dependencies
//! See [`MissingDependencyPolicy`]. Hidden (`Respect`) nodes are bypassed: an edge to a
//! hidden node is replaced by edges to everything the hidden node depends on.
//!
//! ## Complexity
//! - Time: **O(|V| + |E|)** with `Ignore` or `Include`. Each hidden node under `Respect`
//!   may be walked once per included node that reaches it.
//! - Space: **O(|V| + |E|)**.

use crate::debug_invariants::DebugInvariants;
use crate::topology::MissingDependencyPolicy;
use crate::topology::bounds::ElementLike;
use crate::topology::error::TopologyError;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug)]
struct Node<T> {
    content: T,
    /// `false` for hidden placeholders of missing dependencies.
    included: bool,
    /// Direct dependencies as discovered. No self-edges, no duplicates.
    raw: Vec<usize>,
    /// Edges taking part in ordering. Always point at included nodes.
    deps: Vec<usize>,
    referrer_count: usize,
    emitted: bool,
}

/// Arena of dependency nodes built from a set of elements and a dependency lookup.
#[derive(Clone, Debug)]
pub struct DependencyGraph<T> {
    nodes: Vec<Node<T>>,
    index: HashMap<T, usize>,
}

impl<T: ElementLike> DependencyGraph<T> {
    /// Build the graph for `elements`.
    ///
    /// `get_dependencies` is called exactly once for every node created, including
    /// nodes synthesized for missing dependencies under `Respect` and `Include`.
    ///
    /// # Errors
    /// * [`TopologyError::DuplicateElement`]: `elements` contains the same element twice.
    pub fn build<I, F, D>(
        elements: I,
        mut get_dependencies: F,
        policy: MissingDependencyPolicy,
    ) -> Result<Self, TopologyError<T>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> D,
        D: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        let mut graph = Self {
            nodes: Vec::with_capacity(elements.size_hint().0),
            index: HashMap::with_capacity(elements.size_hint().0),
        };
        for element in elements {
            if graph.index.contains_key(&element) {
                return Err(TopologyError::DuplicateElement(element));
            }
            graph.push_node(element, true);
        }

        // 1) Discover dependencies breadth-first; new nodes join the end of the arena.
        let mut seen = HashSet::new();
        let mut next = 0;
        while next < graph.nodes.len() {
            let current = next;
            next += 1;
            seen.clear();
            let deps: Vec<T> = get_dependencies(&graph.nodes[current].content)
                .into_iter()
                .collect();
            for dep in deps {
                let found = graph.index.get(&dep).copied();
                let target = match found {
                    Some(idx) => idx,
                    None => match policy {
                        MissingDependencyPolicy::Ignore => continue,
                        MissingDependencyPolicy::Respect => graph.push_node(dep, false),
                        MissingDependencyPolicy::Include => graph.push_node(dep, true),
                    },
                };
                if target != current && seen.insert(target) {
                    graph.nodes[current].raw.push(target);
                }
            }
        }

        // 2) Resolve effective edges and referrer counts.
        for idx in 0..graph.nodes.len() {
            if !graph.nodes[idx].included {
                continue;
            }
            let deps = graph.effective_dependencies(idx);
            for &d in &deps {
                graph.nodes[d].referrer_count += 1;
            }
            graph.nodes[idx].deps = deps;
        }

        log::trace!(
            "Built dependency graph: {} nodes ({} included)",
            graph.nodes.len(),
            graph.included_len()
        );
        Ok(graph)
    }

    fn push_node(&mut self, content: T, included: bool) -> usize {
        let idx = self.nodes.len();
        self.index.insert(content.clone(), idx);
        self.nodes.push(Node {
            content,
            included,
            raw: Vec::new(),
            deps: Vec::new(),
            referrer_count: 0,
            emitted: false,
        });
        idx
    }

    /// Included targets reachable from `idx`, walking through hidden nodes.
    fn effective_dependencies(&self, idx: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut visited = HashSet::from([idx]);
        let mut stack: Vec<usize> = self.nodes[idx].raw.iter().rev().copied().collect();
        while let Some(d) = stack.pop() {
            if !visited.insert(d) {
                continue;
            }
            if self.nodes[d].included {
                out.push(d);
            } else {
                stack.extend(self.nodes[d].raw.iter().rev().copied());
            }
        }
        out
    }

    /// Total number of nodes, hidden ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes that take part in the output.
    pub fn included_len(&self) -> usize {
        self.nodes.iter().filter(|n| n.included).count()
    }

    /// Whether `element` takes part in the output. `None` if the graph has no node for it.
    pub fn is_included(&self, element: &T) -> Option<bool> {
        self.index.get(element).map(|&i| self.nodes[i].included)
    }

    /// Effective dependencies of `element`, in discovery order.
    ///
    /// Hidden nodes are bypassed, so the result only contains included elements.
    pub fn dependencies_of(&self, element: &T) -> Option<Vec<&T>> {
        let idx = *self.index.get(element)?;
        Some(
            self.nodes[idx]
                .deps
                .iter()
                .map(|&d| &self.nodes[d].content)
                .collect(),
        )
    }

    /// Current referrer count of `element`.
    pub fn referrer_count(&self, element: &T) -> Option<usize> {
        self.index
            .get(element)
            .map(|&i| self.nodes[i].referrer_count)
    }

    /// Indices of all included nodes, in arena order.
    pub(crate) fn included_indices(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| self.nodes[i].included)
            .collect()
    }

    #[inline]
    pub(crate) fn referrer_count_at(&self, idx: usize) -> usize {
        self.nodes[idx].referrer_count
    }

    #[inline]
    pub(crate) fn content(&self, idx: usize) -> &T {
        &self.nodes[idx].content
    }

    /// Mark `idx` as emitted and drop its edges.
    pub(crate) fn emit(&mut self, idx: usize) {
        debug_assert_eq!(self.nodes[idx].referrer_count, 0);
        self.nodes[idx].emitted = true;
        for k in 0..self.nodes[idx].deps.len() {
            let d = self.nodes[idx].deps[k];
            self.nodes[d].referrer_count -= 1;
        }
    }
}

impl<T: ElementLike> DebugInvariants for DependencyGraph<T> {
    type Error = TopologyError<T>;

    fn validate_invariants(&self) -> Result<(), Self::Error> {
        let mut expected = vec![0usize; self.nodes.len()];
        for (idx, node) in self.nodes.iter().enumerate() {
            if !node.included && !node.deps.is_empty() {
                return Err(TopologyError::InvariantViolation(format!(
                    "hidden node {:?} has ordering edges",
                    node.content
                )));
            }
            let mut targets = HashSet::with_capacity(node.deps.len());
            for &d in &node.deps {
                if d == idx {
                    return Err(TopologyError::InvariantViolation(format!(
                        "node {:?} depends on itself",
                        node.content
                    )));
                }
                if !self.nodes[d].included {
                    return Err(TopologyError::InvariantViolation(format!(
                        "edge {:?} -> {:?} points at a hidden node",
                        node.content, self.nodes[d].content
                    )));
                }
                if !targets.insert(d) {
                    return Err(TopologyError::InvariantViolation(format!(
                        "duplicate edge {:?} -> {:?}",
                        node.content, self.nodes[d].content
                    )));
                }
                if !node.emitted {
                    expected[d] += 1;
                }
            }
        }
        for (node, &want) in self.nodes.iter().zip(&expected) {
            if node.referrer_count != want {
                return Err(TopologyError::InvariantViolation(format!(
                    "node {:?} has referrer count {} but {} unsorted referrers",
                    node.content, node.referrer_count, want
                )));
            }
        }
        Ok(())
    }
}
