//! Dependency graphs
//!
//! The in-memory graph model and the loader for dependency graph files.

pub mod loader;
pub mod model;

pub use loader::{load_from_path, GraphKind};
pub use model::{DependencyGraph, GraphBuilder, NodeIndex};
