//! CLI output formatting
//!
//! Renders enumeration results for the terminal and for listing files.

pub mod display;

pub use display::render_listing;
pub use display::render_summary;
pub use display::CYCLE_SEPARATOR;
