//! Core game engine
//!
//! The guess-evaluation and game-state machine: board grid, cursor,
//! per-cell feedback classification, win/loss determination, keyboard hint
//! summary, and the shareable result block. Pure and deterministic, with no
//! I/O; UI layers feed it key events and read snapshots back.

mod cell;
mod game;
mod target;

pub use cell::{CellState, GameStatus};
pub use game::{GuessEngine, Key, LetterSummary};
pub use target::{Target, TargetError};
