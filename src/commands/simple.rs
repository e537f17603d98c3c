//! Simple interactive CLI mode
//!
//! Line-oriented game loop without the TUI: type a full guess per line.

use crate::engine::{GuessEngine, Key, Target};
use crate::output::{print_board, print_keyboard_hints, print_result};
use anyhow::Result;
use std::io::{self, Write};

/// Run the plain-CLI game
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
pub fn run_simple(target: Target, max_attempts: usize) -> Result<()> {
    let columns = target.len();
    let mut engine = GuessEngine::new(target, max_attempts);

    println!("\n╔══════════════════════════════════════════╗");
    println!("║                 WORDLE                   ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Guess the {columns}-letter word in {max_attempts} tries.");
    println!("Type a guess and press Enter; 'quit' to exit.\n");

    while !engine.status().is_over() {
        let prompt = format!("Guess {}/{}", engine.current_row() + 1, engine.rows());
        let input = read_guess(&prompt)?;

        if input == "quit" {
            println!("Bye!");
            return Ok(());
        }

        if input.chars().count() != columns {
            println!("Need exactly {columns} letters.\n");
            continue;
        }

        for ch in input.chars() {
            engine.handle_key(Key::Letter(ch));
        }

        if engine.handle_key(Key::Submit) {
            print_board(&engine);
            print_keyboard_hints(&engine);
        } else {
            // Stray non-letter characters left the row partial: clear and re-prompt
            while engine.handle_key(Key::Delete) {}
            println!("Letters only, please.\n");
        }
    }

    print_result(&engine);
    Ok(())
}

fn read_guess(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase())
}
