//! CLI output formatting
//!
//! The summary goes to stdout, one line per cycle length. The full listing is
//! written to a file on request. Status and warnings go to stderr so stdout
//! stays clean for piping.

use std::time::Duration;

use colored::Colorize;

use crate::cycles::CycleSet;
use crate::graph::DependencyGraph;

/// Separator between node names in a rendered cycle
pub const CYCLE_SEPARATOR: &str = " > ";

/// Render the per-length counts.
///
/// Lengths past the graph size cannot hold a cycle and are left out.
///
/// ```text
/// Found cycles in 0.12s.
/// Found 3 cycles of length 2.
/// Found 2 cycles of length 3.
/// Found 5 cycles in total.
/// ```
#[must_use]
pub fn render_summary(set: &CycleSet, elapsed: Duration) -> String {
    let mut out = String::new();
    out.push_str(&format!("Found cycles in {:.2}s.\n", elapsed.as_secs_f64()));
    for length in 2..=set.reach() {
        out.push_str(&format!(
            "Found {} cycles of length {length}.\n",
            set.count(length)
        ));
    }
    out.push_str(&format!("Found {} cycles in total.\n", set.total()));
    out
}

/// Render every cycle, grouped by length and sorted by name within a length
#[must_use]
pub fn render_listing(graph: &DependencyGraph, set: &CycleSet) -> String {
    let mut out = String::new();
    for length in 2..=set.reach() {
        out.push_str(&format!("Cycles of length {length}:\n"));
        let mut lines: Vec<String> = set
            .bucket(length)
            .map(|cycle| graph.names_of(cycle).join(CYCLE_SEPARATOR))
            .collect();
        lines.sort_unstable();
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Print a one-line graph description to stderr
pub fn print_graph_header(label: &str, graph: &DependencyGraph) {
    eprintln!(
        "{} {} ({} nodes, {} edges)",
        "===".bold().cyan(),
        label.bold().cyan(),
        graph.node_count(),
        graph.edge_count()
    );
}

/// Print a warning line to stderr
pub fn print_warning(message: &str) {
    eprintln!("  {} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print a success line to stderr
pub fn print_done(message: &str) {
    eprintln!("  {} {}", "✓".green().bold(), message);
}
