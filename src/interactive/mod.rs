//! Full-screen terminal interface

pub mod app;
pub mod board;
pub mod glyphs;
pub mod rendering;

pub use app::{App, run_tui};
pub use board::RenderContext;
