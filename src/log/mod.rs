//! Logging and observability
//!
//! JSONL run history, plus the `tracing` subscriber setup used by the binary.

pub mod jsonl;

pub use jsonl::{JsonlLogger, RunRecord};

use tracing_subscriber::{fmt, EnvFilter};

/// Map a `-v` count to a default filter directive
#[must_use]
pub const fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber. `RUST_LOG` wins over `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
