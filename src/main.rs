//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and plain-CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::seq::IndexedRandom;
use wordle_game::{
    commands::run_simple,
    engine::Target,
    interactive::{App, run_tui},
    wordlists::{ANSWERS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: guess the hidden word with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play a specific hidden word instead of a random one
    #[arg(short = 'W', long, global = true)]
    word: Option<String>,

    /// Number of attempts
    #[arg(short, long, global = true, default_value = "6")]
    tries: usize,

    /// Path to a custom answer pool (one word per line)
    #[arg(short = 'l', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (type one guess per line)
    Simple,
}

/// Load the answer pool based on the -l flag
fn load_pool(wordlist: Option<&str>) -> Result<Vec<Target>> {
    let pool = match wordlist {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to read wordlist '{path}'"))?,
        None => loader::targets_from_slice(ANSWERS),
    };

    if pool.is_empty() {
        bail!("answer pool contains no valid words");
    }
    Ok(pool)
}

fn pick_target(word: Option<&str>, pool: &[Target]) -> Result<Target> {
    match word {
        Some(text) => Target::new(text).context("invalid --word"),
        None => {
            let mut rng = rand::rng();
            pool.choose(&mut rng)
                .cloned()
                .context("answer pool is empty")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.tries == 0 {
        bail!("--tries must be at least 1");
    }

    let pool = load_pool(cli.wordlist.as_deref())?;
    let target = pick_target(cli.word.as_deref(), &pool)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            // With an explicit word there is nothing to draw new games from
            let pool = if cli.word.is_some() { Vec::new() } else { pool };
            let app = App::new(pool, target, cli.tries);
            run_tui(app)
        }
        Commands::Simple => run_simple(target, cli.tries),
    }
}
