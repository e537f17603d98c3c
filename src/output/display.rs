//! Display functions for the plain-CLI game

use super::formatters::{KEYBOARD_ROWS, board_row, keyboard_hint_row};
use crate::engine::{GameStatus, GuessEngine};
use colored::Colorize;

/// Print the full board grid
pub fn print_board(engine: &GuessEngine) {
    println!();
    for row in 0..engine.rows() {
        println!("  {}", board_row(engine, row));
    }
    println!();
}

/// Print the keyboard hint lines
pub fn print_keyboard_hints(engine: &GuessEngine) {
    let summary = engine.letter_summary();

    for (i, letters) in KEYBOARD_ROWS.iter().enumerate() {
        let indent = " ".repeat(i * 2);
        println!("  {indent}{}", keyboard_hint_row(letters, &summary));
    }
    println!();
}

/// Print the end-of-game banner and the shareable result block
pub fn print_result(engine: &GuessEngine) {
    match engine.status() {
        GameStatus::Won => {
            println!(
                "{}",
                format!("✅ Solved in {} guesses!", engine.current_row())
                    .green()
                    .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{}",
                format!(
                    "❌ Out of tries! The word was {}",
                    engine.target().text().to_uppercase()
                )
                .red()
                .bold()
            );
        }
        GameStatus::Playing => return,
    }

    println!("\nShare your result:\n");
    for line in engine.share_text().lines() {
        println!("  {line}");
    }
    println!();
}
