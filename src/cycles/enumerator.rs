//! Bounded-length simple cycle enumeration
//!
//! One anchored search per node, in ascending index order. The search from
//! anchor `s` only enters nodes ranked at or above `s`, so each cycle is found
//! exactly once, from its smallest node, already in canonical rotation.
//!
//! Nodes may be revisited as long as they are not on the current path. A
//! global visited set would lose cycles that share a prefix: with `a <-> b`,
//! `b <-> c` and `a <-> c`, reaching `c` through `b` first would hide both
//! `a > c` and `a > c > b`.

use tracing::{debug, trace};

use super::cycle::Cycle;
use super::error::CycleError;
use super::set::CycleSet;
use crate::graph::{DependencyGraph, NodeIndex};

/// Finds every simple cycle of length `2..=max_length` in a graph
#[derive(Debug, Clone, Copy)]
pub struct CycleEnumerator<'g> {
    graph: &'g DependencyGraph,
    max_length: usize,
}

impl<'g> CycleEnumerator<'g> {
    /// Bind an enumerator to a graph.
    ///
    /// `max_length` counts nodes (equivalently edges) of a cycle and must be at least 1.
    pub const fn new(graph: &'g DependencyGraph, max_length: usize) -> Result<Self, CycleError> {
        if max_length < 1 {
            return Err(CycleError::InvalidLength(max_length));
        }
        Ok(Self { graph, max_length })
    }

    /// The length bound
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Stream cycles in emission order without materializing them
    #[must_use]
    pub fn iter(&self) -> Cycles<'g> {
        Cycles::new(self.graph, self.max_length)
    }

    /// Collect every cycle into length buckets
    #[must_use]
    pub fn enumerate(&self) -> CycleSet {
        // No simple cycle has more nodes than the graph.
        let reach = self.max_length.min(self.graph.node_count());
        let set = CycleSet::collect(self.max_length, reach, self.iter());
        for (length, count) in set.counts().into_iter().enumerate().skip(2) {
            debug!(length, count, "cycles found");
        }
        set
    }
}

impl<'g> IntoIterator for &CycleEnumerator<'g> {
    type Item = Cycle;
    type IntoIter = Cycles<'g>;

    fn into_iter(self) -> Cycles<'g> {
        self.iter()
    }
}

/// Enumerate all simple cycles of `graph` with at most `max_length` nodes
pub fn enumerate(graph: &DependencyGraph, max_length: usize) -> Result<CycleSet, CycleError> {
    Ok(CycleEnumerator::new(graph, max_length)?.enumerate())
}

/// One level of the explicit search stack: a path node and the position of
/// the next successor to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeIndex,
    next_edge: usize,
}

/// Iterator over cycles, see [`CycleEnumerator::iter`]
#[derive(Debug, Clone)]
pub struct Cycles<'g> {
    graph: &'g DependencyGraph,
    max_length: usize,
    next_anchor: usize,
    anchor: NodeIndex,
    stack: Vec<Frame>,
    on_path: Vec<bool>,
}

impl<'g> Cycles<'g> {
    fn new(graph: &'g DependencyGraph, max_length: usize) -> Self {
        Self {
            graph,
            max_length,
            next_anchor: 0,
            anchor: NodeIndex::new(0),
            stack: Vec::with_capacity(max_length.min(graph.node_count())),
            on_path: vec![false; graph.node_count()],
        }
    }

    /// Push the next anchor onto the empty stack. False once all anchors ran.
    fn start_next_anchor(&mut self) -> bool {
        if self.next_anchor >= self.graph.node_count() {
            return false;
        }
        self.anchor = NodeIndex::new(self.next_anchor);
        self.next_anchor += 1;
        trace!(anchor = %self.graph.name(self.anchor), "searching from anchor");
        self.push(self.anchor);
        true
    }

    fn push(&mut self, node: NodeIndex) {
        self.on_path[node.index()] = true;
        self.stack.push(Frame { node, next_edge: 0 });
    }

    fn path(&self) -> Vec<NodeIndex> {
        self.stack.iter().map(|frame| frame.node).collect()
    }
}

impl Iterator for Cycles<'_> {
    type Item = Cycle;

    fn next(&mut self) -> Option<Cycle> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                if !self.start_next_anchor() {
                    return None;
                }
                continue;
            };

            let current = frame.node;
            let Some(&next) = self.graph.successors(current).get(frame.next_edge) else {
                // Successors exhausted: backtrack. The bitmap is clean again
                // once the anchor itself is popped.
                self.on_path[current.index()] = false;
                self.stack.pop();
                continue;
            };
            frame.next_edge += 1;

            if next == current || next < self.anchor {
                continue;
            }
            if next == self.anchor {
                return Some(Cycle::new(self.path()));
            }
            if self.on_path[next.index()] {
                // A cycle through `next` that skips the anchor; it belongs to
                // a later anchor.
                continue;
            }
            if self.stack.len() < self.max_length {
                self.push(next);
            }
        }
    }
}
