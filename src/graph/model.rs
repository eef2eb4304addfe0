//! Dependency graph model
//!
//! Nodes are identified by their rank in the lexicographic order of their
//! names. Successor lists hold ranks, so the enumerator never hashes.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Rank of a node in the graph's total order.
///
/// Comparing two indices compares the underlying node names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Wrap a raw rank
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw rank
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable directed graph with a name table.
///
/// Built through [`GraphBuilder`]. Successor lists keep the order in which
/// edges were first added and never contain the same target twice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyGraph {
    names: Vec<String>,
    successors: Vec<Vec<NodeIndex>>,
}

impl DependencyGraph {
    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of distinct edges, self-loops included
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a node. Panics if the index is out of range.
    #[must_use]
    pub fn name(&self, node: NodeIndex) -> &str {
        &self.names[node.index()]
    }

    /// Look up a node by name
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.names
            .binary_search_by(|candidate| candidate.as_str().cmp(name))
            .ok()
            .map(NodeIndex::new)
    }

    /// Outbound neighbors of `node`, in insertion order
    #[must_use]
    pub fn successors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.successors[node.index()]
    }

    /// All nodes in ascending rank order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeIndex> {
        (0..self.names.len()).map(NodeIndex::new)
    }

    /// Resolve a sequence of nodes to their names
    #[must_use]
    pub fn names_of(&self, nodes: &[NodeIndex]) -> Vec<&str> {
        nodes.iter().map(|&n| self.name(n)).collect()
    }
}

/// Collects named nodes and edges, then freezes them into a [`DependencyGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    // Declaration order is irrelevant to ranking; the map only deduplicates.
    ids: BTreeMap<String, usize>,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Declaring the same name twice is a no-op.
    pub fn add_node(&mut self, name: &str) -> &mut Self {
        self.intern(name);
        self
    }

    /// Whether a node with this name has been declared
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Add the edge `from -> to`, declaring missing endpoints.
    pub fn add_edge(&mut self, from: &str, to: &str) -> &mut Self {
        let from = self.intern(from);
        let to = self.intern(to);
        self.edges.push((from, to));
        self
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.ids.len();
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Rank nodes by name and build the successor lists.
    ///
    /// Parallel edges collapse to their first occurrence.
    #[must_use]
    pub fn build(self) -> DependencyGraph {
        let mut rank_of = vec![0; self.ids.len()];
        let mut names = Vec::with_capacity(self.ids.len());
        // BTreeMap iterates in name order, which is the rank order.
        for (rank, (name, id)) in self.ids.into_iter().enumerate() {
            rank_of[id] = rank;
            names.push(name);
        }

        let mut successors = vec![Vec::new(); names.len()];
        let mut seen = HashSet::with_capacity(self.edges.len());
        for (from, to) in self.edges {
            let (from, to) = (rank_of[from], rank_of[to]);
            if seen.insert((from, to)) {
                successors[from].push(NodeIndex::new(to));
            }
        }

        DependencyGraph { names, successors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(graph: &DependencyGraph, node: &str) -> Vec<String> {
        let index = graph.index_of(node).unwrap();
        graph
            .successors(index)
            .iter()
            .map(|&n| graph.name(n).to_string())
            .collect()
    }

    #[test]
    fn test_empty_builder_builds_empty_graph() {
        let graph = GraphBuilder::new().build();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_ranks_follow_name_order_not_insertion_order() {
        let mut builder = GraphBuilder::new();
        builder.add_node("org.chromium.c");
        builder.add_node("org.chromium.a");
        builder.add_node("org.chromium.b");
        let graph = builder.build();

        assert_eq!(graph.index_of("org.chromium.a"), Some(NodeIndex::new(0)));
        assert_eq!(graph.index_of("org.chromium.b"), Some(NodeIndex::new(1)));
        assert_eq!(graph.index_of("org.chromium.c"), Some(NodeIndex::new(2)));
        assert_eq!(graph.name(NodeIndex::new(2)), "org.chromium.c");
    }

    #[test]
    fn test_index_of_unknown_name() {
        let mut builder = GraphBuilder::new();
        builder.add_node("a");
        assert_eq!(builder.build().index_of("b"), None);
    }

    #[test]
    fn test_add_edge_declares_endpoints() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("x", "y");
        assert!(builder.contains("x"));
        assert!(builder.contains("y"));

        let graph = builder.build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(names(&graph, "x"), vec!["y"]);
        assert!(names(&graph, "y").is_empty());
    }

    #[test]
    fn test_successor_order_is_insertion_order() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "d").add_edge("a", "b").add_edge("a", "c");
        let graph = builder.build();
        assert_eq!(names(&graph, "a"), vec!["d", "b", "c"]);
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let mut builder = GraphBuilder::new();
        builder
            .add_edge("a", "b")
            .add_edge("a", "c")
            .add_edge("a", "b")
            .add_edge("a", "b");
        let graph = builder.build();
        assert_eq!(names(&graph, "a"), vec!["b", "c"]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loops_are_kept() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "a");
        let graph = builder.build();
        assert_eq!(names(&graph, "a"), vec!["a"]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_nodes_iterates_in_rank_order() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("b", "a");
        let graph = builder.build();
        let ranks: Vec<usize> = graph.nodes().map(NodeIndex::index).collect();
        assert_eq!(ranks, vec![0, 1]);
        assert_eq!(graph.names_of(&[NodeIndex::new(1), NodeIndex::new(0)]), vec!["b", "a"]);
    }

    #[test]
    fn test_node_index_display() {
        assert_eq!(NodeIndex::new(7).to_string(), "#7");
    }
}
