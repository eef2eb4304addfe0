//! Dependency graph file loader
//!
//! Reads the JSON document written by the dependency graph generator. The
//! document holds a class-level and a package-level graph; callers pick one.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::model::{DependencyGraph, GraphBuilder};

/// Which sub-graph of a dependency file to analyze
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Package-level graph
    #[default]
    Package,
    /// Class-level graph
    Class,
}

impl GraphKind {
    const fn json_key(self) -> &'static str {
        match self {
            Self::Package => "package_graph",
            Self::Class => "class_graph",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package => f.write_str("package"),
            Self::Class => f.write_str("class"),
        }
    }
}

impl FromStr for GraphKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "package" => Ok(Self::Package),
            "class" => Ok(Self::Class),
            other => bail!("Unknown graph kind '{other}': expected 'package' or 'class'"),
        }
    }
}

/// A node entry. Only the name matters for cycle analysis.
#[derive(Debug, Deserialize)]
struct JsonNode {
    name: String,
}

/// An edge entry, `begin -> end`
#[derive(Debug, Deserialize)]
struct JsonEdge {
    begin: String,
    end: String,
}

#[derive(Debug, Deserialize)]
struct JsonGraph {
    #[serde(default)]
    nodes: Vec<JsonNode>,
    #[serde(default)]
    edges: Vec<JsonEdge>,
}

/// Load one sub-graph from a dependency file on disk
///
/// # Arguments
/// * `path` - JSON file holding `class_graph` and `package_graph`, or a bare graph
/// * `kind` - Which of the two graphs to read
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read or is not JSON
/// - The requested section is missing or malformed
/// - A node name repeats or an edge names an undeclared node
pub fn load_from_path<P: AsRef<Path>>(path: P, kind: GraphKind) -> Result<DependencyGraph> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file: {}", path.display()))?;
    let graph = parse(&content, kind)
        .with_context(|| format!("Failed to load {kind} graph from {}", path.display()))?;
    info!(
        path = %path.display(),
        graph = %kind,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded dependency graph"
    );
    Ok(graph)
}

/// Parse one sub-graph from dependency file content.
///
/// A document that is itself a bare `{"nodes", "edges"}` graph is used as-is.
pub fn parse(content: &str, kind: GraphKind) -> Result<DependencyGraph> {
    let document: serde_json::Value =
        serde_json::from_str(content).context("Failed to parse graph file as JSON")?;

    let graph_value = if document.get("nodes").is_some() || document.get("edges").is_some() {
        document
    } else {
        match document {
            serde_json::Value::Object(mut map) => match map.remove(kind.json_key()) {
                Some(value) => value,
                None => bail!("Graph file has no '{}' section", kind.json_key()),
            },
            _ => bail!("Graph file must contain a JSON object"),
        }
    };

    let graph: JsonGraph = serde_json::from_value(graph_value)
        .with_context(|| format!("Malformed '{}' section", kind.json_key()))?;
    build(graph)
}

fn build(graph: JsonGraph) -> Result<DependencyGraph> {
    let mut builder = GraphBuilder::new();
    for node in &graph.nodes {
        if builder.contains(&node.name) {
            bail!("Duplicate node name: '{}'", node.name);
        }
        builder.add_node(&node.name);
    }

    for edge in &graph.edges {
        for endpoint in [&edge.begin, &edge.end] {
            if !builder.contains(endpoint) {
                bail!(
                    "Edge '{}' -> '{}' references undeclared node '{endpoint}'",
                    edge.begin,
                    edge.end
                );
            }
        }
        builder.add_edge(&edge.begin, &edge.end);
    }

    Ok(builder.build())
}
