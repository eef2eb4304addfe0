//! JSONL (JSON Lines) run history
//!
//! Provides append-only logging of enumeration runs to `<log_dir>/runs.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::graph::GraphKind;

/// Summary of a single enumeration run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRecord {
    /// When the run finished
    pub timestamp: DateTime<Utc>,
    /// Graph file that was analyzed
    pub source: PathBuf,
    /// Which sub-graph was analyzed
    pub graph: GraphKind,
    /// Maximum cycle length requested
    pub cycle_length: usize,
    /// Nodes in the analyzed graph
    pub node_count: usize,
    /// Distinct edges in the analyzed graph
    pub edge_count: usize,
    /// Number of cycles per length, indexed by length
    pub counts_by_length: Vec<usize>,
    /// Number of cycles across all lengths
    pub total_cycles: usize,
    /// Wall time spent enumerating, in milliseconds
    pub duration_ms: u64,
}

/// JSONL logger for run history
///
/// Each line is a JSON object describing one run.
pub struct JsonlLogger {
    log_path: PathBuf,
}

impl JsonlLogger {
    /// Create a new JSONL logger
    ///
    /// # Arguments
    /// * `log_dir` - Directory where runs.jsonl will be stored, created if missing
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("runs.jsonl");

        Ok(Self { log_path })
    }

    /// Append a run record to the log
    ///
    /// # Arguments
    /// * `record` - The finished run to log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be opened or created
    /// - The record cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, record: &RunRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json = serde_json::to_string(record).context("Failed to serialize run record to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all run records from the log
    ///
    /// # Returns
    /// Every record in the log, oldest first. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be read
    /// - Any non-blank line is not a valid record
    pub fn read_all(&self) -> Result<Vec<RunRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut records = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record: RunRecord = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            records.push(record);
        }

        Ok(records)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
