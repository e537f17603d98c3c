//! Interactive TUI interface
//!
//! ratatui front end: board grid with classification colors, tinted
//! keyboard, and the end-of-game share block.

mod app;
mod rendering;

pub use app::{App, run_tui};
