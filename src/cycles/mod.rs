//! Cycle enumeration
//!
//! Finds every simple directed cycle up to a length bound, each reported
//! once, starting at its smallest node.

pub mod cycle;
pub mod enumerator;
pub mod error;
pub mod set;

pub use cycle::Cycle;
pub use enumerator::{enumerate, CycleEnumerator, Cycles};
pub use error::CycleError;
pub use set::{Bucket, CycleSet};
