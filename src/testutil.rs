//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::path::PathBuf;

use chrono::Utc;

use crate::graph::{DependencyGraph, GraphBuilder, GraphKind};
use crate::log::jsonl::RunRecord;

/// Create a minimal `RunRecord` for testing with sensible defaults.
///
/// Counts are zero for every length up to `cycle_length`.
#[must_use]
pub fn make_test_record(source: &str, cycle_length: usize) -> RunRecord {
    RunRecord {
        timestamp: Utc::now(),
        source: PathBuf::from(source),
        graph: GraphKind::Package,
        cycle_length,
        node_count: 0,
        edge_count: 0,
        counts_by_length: vec![0; cycle_length + 1],
        total_cycles: 0,
        duration_ms: 0,
    }
}

/// Build a graph from `(from, to)` name pairs
#[must_use]
pub fn graph_from_edges(edges: &[(&str, &str)]) -> DependencyGraph {
    let mut builder = GraphBuilder::new();
    for (from, to) in edges {
        builder.add_edge(from, to);
    }
    builder.build()
}
