//! Configuration parser
//!
//! Parses an optional `depcycles.toml` holding defaults for the CLI.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::GraphKind;

/// Enumeration defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EnumerationConfig {
    /// Maximum cycle length when `--cycle-length` is not given (default: 5)
    #[serde(default = "default_cycle_length")]
    pub cycle_length: usize,
    /// Which sub-graph to analyze (default: package)
    #[serde(default)]
    pub graph: GraphKind,
    /// Lengths above this print a runtime warning (default: 6)
    #[serde(default = "default_warn_above")]
    pub warn_above: usize,
}

const fn default_cycle_length() -> usize {
    5
}

const fn default_warn_above() -> usize {
    6
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            cycle_length: default_cycle_length(),
            graph: GraphKind::default(),
            warn_above: default_warn_above(),
        }
    }
}

/// Run history settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Directory for `runs.jsonl`. No history is kept when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Top-level configuration parsed from `depcycles.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Enumeration defaults
    #[serde(default)]
    pub enumeration: EnumerationConfig,
    /// Run history settings
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse depcycles.toml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validate_cycle_length(self.enumeration.cycle_length)
            .context("in [enumeration] cycle_length")?;
        if self.enumeration.warn_above < 2 {
            bail!(
                "[enumeration] warn_above must be at least 2, got {}",
                self.enumeration.warn_above
            );
        }
        Ok(())
    }
}

/// Check a requested maximum cycle length. Cycles have at least two nodes.
pub fn validate_cycle_length(length: usize) -> Result<()> {
    if length < 2 {
        bail!("Cycle length must be at least 2, got {length}");
    }
    Ok(())
}
