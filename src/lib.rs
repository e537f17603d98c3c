//! Wordle Game
//!
//! A terminal Wordle: guess the hidden word in a fixed number of attempts,
//! with per-letter feedback, keyboard hints, and a shareable result block.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::engine::{GameStatus, GuessEngine, Key, Target};
//!
//! let target = Target::new("hello").unwrap();
//! let mut engine = GuessEngine::new(target, 6);
//!
//! // Type a guess and submit it
//! for ch in "world".chars() {
//!     engine.handle_key(Key::Letter(ch));
//! }
//! engine.handle_key(Key::Submit);
//!
//! assert_eq!(engine.status(), GameStatus::Playing);
//! println!("{}", engine.share_text());
//! ```

// Core game engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
