//! A single simple cycle
//!
//! Stored as its distinct nodes in traversal order; the closing edge back to
//! the first node is implied.

use std::ops::Deref;

use crate::graph::{DependencyGraph, NodeIndex};

/// A simple directed cycle of two or more distinct nodes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cycle {
    nodes: Vec<NodeIndex>,
}

impl Cycle {
    /// Wrap a node sequence. The sequence is taken as-is, without rotation.
    #[must_use]
    pub const fn new(nodes: Vec<NodeIndex>) -> Self {
        Self { nodes }
    }

    /// Nodes in traversal order
    #[must_use]
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// Consume the cycle, returning its nodes
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeIndex> {
        self.nodes
    }

    /// Whether the first node has the smallest index of the cycle
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        match self.nodes.split_first() {
            Some((first, rest)) => rest.iter().all(|n| first < n),
            None => true,
        }
    }

    /// The rotation starting at the smallest index
    #[must_use]
    pub fn canonical(&self) -> Self {
        let start = self
            .nodes
            .iter()
            .enumerate()
            .min_by_key(|&(_, &node)| node)
            .map_or(0, |(i, _)| i);
        self.rotated(start)
    }

    /// The rotation starting at position `by` (modulo the length)
    #[must_use]
    pub fn rotated(&self, by: usize) -> Self {
        let mut nodes = self.nodes.clone();
        if !nodes.is_empty() {
            let by = by % nodes.len();
            nodes.rotate_left(by);
        }
        Self { nodes }
    }

    /// Whether every consecutive pair, and the closing pair, is an edge of `graph`
    #[must_use]
    pub fn is_closed_walk_in(&self, graph: &DependencyGraph) -> bool {
        let len = self.nodes.len();
        (0..len).all(|i| {
            let from = self.nodes[i];
            let to = self.nodes[(i + 1) % len];
            graph.successors(from).contains(&to)
        })
    }

    /// Node names joined by `separator`
    #[must_use]
    pub fn display_with(&self, graph: &DependencyGraph, separator: &str) -> String {
        graph.names_of(&self.nodes).join(separator)
    }
}

impl Deref for Cycle {
    type Target = [NodeIndex];

    fn deref(&self) -> &[NodeIndex] {
        &self.nodes
    }
}

impl From<Vec<NodeIndex>> for Cycle {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        Self::new(nodes)
    }
}
