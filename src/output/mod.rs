//! Terminal output formatting
//!
//! Display utilities for the plain-CLI game mode.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard_hints, print_result};
