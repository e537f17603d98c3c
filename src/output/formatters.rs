//! Formatting utilities for terminal output

use crate::engine::{CellState, GuessEngine, LetterSummary};
use colored::{ColoredString, Colorize};

/// QWERTY layout used for the keyboard hint lines
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Style a single letter according to its classification
#[must_use]
pub fn tint_letter(letter: char, state: CellState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        CellState::Correct => text.as_str().black().on_green(),
        CellState::Present => text.as_str().black().on_yellow(),
        CellState::Absent => text.as_str().white().on_bright_black(),
        CellState::Untested => text.as_str().normal(),
    }
}

/// Format one board row with colored feedback
///
/// Committed cells are tinted by classification; cells the cursor has not
/// passed render as plain letters or underscores.
#[must_use]
pub fn board_row(engine: &GuessEngine, row: usize) -> String {
    (0..engine.columns())
        .map(|col| {
            let letter = engine.letter_at(row, col).unwrap_or('_');
            tint_letter(letter, engine.classify(row, col)).to_string()
        })
        .collect()
}

/// Format one keyboard row tinted by the letter summary
#[must_use]
pub fn keyboard_hint_row(letters: &str, summary: &LetterSummary) -> String {
    letters
        .chars()
        .map(|letter| tint_letter(letter, summary.state_of(letter)).to_string())
        .collect()
}
