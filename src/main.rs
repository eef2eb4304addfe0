//! depcycles - Bounded cycle enumeration for dependency graphs
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use depcycles::cli::display::{print_done, print_graph_header, print_warning};
use depcycles::config::{validate_cycle_length, Config};
use depcycles::cycles::CycleEnumerator;
use depcycles::graph::{load_from_path, DependencyGraph, GraphKind};
use depcycles::log::{init_tracing, JsonlLogger, RunRecord};
use depcycles::{render_listing, render_summary, CycleSet};

/// Find cycles in a dependency graph
///
/// Reports every simple cycle up to the given length, once per cycle,
/// starting at its alphabetically smallest node.
#[derive(Parser, Debug)]
#[command(name = "depcycles", version, about)]
struct Cli {
    /// Path to the JSON file containing the dependency graph
    #[arg(short, long)]
    file: PathBuf,

    /// Maximum length of cycles to find; keep it at 5 or 6 for a short runtime
    #[arg(long)]
    cycle_length: Option<usize>,

    /// Which graph in the file to analyze
    #[arg(long)]
    graph: Option<GraphKind>,

    /// Write the list of cycles to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a depcycles.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the runs.jsonl history (overrides the config)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    cycle_length: usize,
    graph: GraphKind,
    warn_above: usize,
    log_dir: Option<PathBuf>,
}

fn resolve_settings(cli: &Cli, config: &Config) -> Result<Settings> {
    let cycle_length = cli
        .cycle_length
        .unwrap_or(config.enumeration.cycle_length);
    validate_cycle_length(cycle_length)?;

    Ok(Settings {
        cycle_length,
        graph: cli.graph.unwrap_or(config.enumeration.graph),
        warn_above: config.enumeration.warn_above,
        log_dir: cli.log_dir.clone().or_else(|| config.log.dir.clone()),
    })
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    path.map_or_else(
        || Ok(Config::default()),
        |path| {
            Config::from_path(path)
                .with_context(|| format!("Failed to load config from '{}'", path.display()))
        },
    )
}

/// Build the history entry for a finished run.
fn build_record(
    source: &Path,
    settings: &Settings,
    graph: &DependencyGraph,
    set: &CycleSet,
    elapsed: Duration,
) -> RunRecord {
    RunRecord {
        timestamp: chrono::Utc::now(),
        source: source.to_path_buf(),
        graph: settings.graph,
        cycle_length: settings.cycle_length,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        counts_by_length: set.counts(),
        total_cycles: set.total(),
        duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let settings = resolve_settings(&cli, &config)?;

    if settings.cycle_length > settings.warn_above {
        warn!(
            cycle_length = settings.cycle_length,
            warn_above = settings.warn_above,
            "long cycle lengths can take a very long time on dense graphs"
        );
        print_warning(&format!(
            "Cycle length {} is above {}; enumeration may not finish in practical time.",
            settings.cycle_length, settings.warn_above
        ));
    }

    let graph = load_from_path(&cli.file, settings.graph)?;
    print_graph_header(&format!("{} graph", settings.graph), &graph);

    let enumerator = CycleEnumerator::new(&graph, settings.cycle_length)?;
    let start = Instant::now();
    let set = enumerator.enumerate();
    let elapsed = start.elapsed();
    info!(
        total = set.total(),
        elapsed_ms = elapsed.as_millis(),
        "enumeration finished"
    );

    print!("{}", render_summary(&set, elapsed));

    if let Some(output) = &cli.output {
        std::fs::write(output, render_listing(&graph, &set))
            .with_context(|| format!("Failed to write cycle list to '{}'", output.display()))?;
        print_done(&format!("Wrote cycle list to {}", output.display()));
    }

    if let Some(log_dir) = &settings.log_dir {
        let logger = JsonlLogger::new(log_dir).context("Failed to initialize JSONL logger")?;
        logger
            .append(&build_record(&cli.file, &settings, &graph, &set, elapsed))
            .context("Failed to write to JSONL log")?;
    }

    Ok(())
}
