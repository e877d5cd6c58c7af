//! Terminal output formatting
//!
//! Colored line output for the simple (non-TUI) front-end.

pub mod display;
pub mod formatters;

pub use display::{write_banner, write_rejection, write_row, write_summary};
