//! Word lists for the game
//!
//! Provides the embedded answer pool compiled into the binary, plus a loader
//! for custom pools.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
