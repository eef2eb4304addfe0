//! depcycles - Bounded cycle enumeration for dependency graphs
//!
//! Loads class- or package-level dependency graphs and reports every simple
//! directed cycle up to a length bound, each exactly once, starting at its
//! lexicographically smallest node.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod cycles;
pub mod graph;
pub mod log;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use cli::{render_listing, render_summary};
pub use config::Config;
pub use cycles::{enumerate, Cycle, CycleEnumerator, CycleError, CycleSet, Cycles};
pub use graph::{DependencyGraph, GraphBuilder, GraphKind, NodeIndex};
pub use log::{JsonlLogger, RunRecord};
