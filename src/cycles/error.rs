//! Enumeration errors

use thiserror::Error;

/// Rejected enumeration arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    /// The maximum cycle length was below 1
    #[error("maximum cycle length must be at least 1, got {0}")]
    InvalidLength(usize),
}
