//! TUI application state and logic

use crate::engine::{GuessEngine, Key, Target};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
///
/// Owns the current game instance and the answer pool used to start new
/// games. All game logic lives in the engine; the app only maps terminal key
/// events to engine keys and decides when a new game starts.
pub struct App {
    pool: Vec<Target>,
    max_attempts: usize,
    pub engine: GuessEngine,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(pool: Vec<Target>, first: Target, max_attempts: usize) -> Self {
        let engine = GuessEngine::new(first, max_attempts);

        Self {
            pool,
            max_attempts,
            engine,
            should_quit: false,
        }
    }

    /// Start a fresh game with a new hidden word
    ///
    /// Picks randomly from the pool; with an empty pool (explicit `--word`
    /// runs) the same word is replayed.
    pub fn new_game(&mut self) {
        let mut rng = rand::rng();
        let next = self
            .pool
            .choose(&mut rng)
            .cloned()
            .unwrap_or_else(|| self.engine.target().clone());

        self.engine = GuessEngine::new(next, self.max_attempts);
    }

    /// Map one terminal key event onto the engine or app controls
    ///
    /// While the game is in progress, letters, Backspace, and Enter go
    /// straight to the engine. Once the game is over the engine ignores
    /// input, so 'n' and 'q' become safe to repurpose as new-game and quit.
    pub fn handle_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Esc
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.engine.status().is_over() {
            match code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.engine.handle_key(Key::Letter(c));
            }
            KeyCode::Backspace => {
                self.engine.handle_key(Key::Delete);
            }
            KeyCode::Enter => {
                self.engine.handle_key(Key::Submit);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key_event(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameStatus;

    fn app() -> App {
        App::new(Vec::new(), Target::new("hello").unwrap(), 6)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(code, KeyModifiers::NONE);
    }

    #[test]
    fn letters_flow_into_the_engine() {
        let mut app = app();
        press(&mut app, KeyCode::Char('w'));
        press(&mut app, KeyCode::Char('o'));

        assert_eq!(app.engine.letter_at(0, 0), Some('w'));
        assert_eq!(app.engine.current_column(), 2);
    }

    #[test]
    fn backspace_and_enter_map_to_engine_keys() {
        let mut app = app();
        for ch in "world".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.engine.current_column(), 4);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.current_row(), 1);
    }

    #[test]
    fn n_is_a_letter_while_playing_and_new_game_after() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.letter_at(0, 0), Some('n'));

        // Finish the game
        press(&mut app, KeyCode::Backspace);
        for ch in "hello".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.status(), GameStatus::Won);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.status(), GameStatus::Playing);
        assert_eq!(app.engine.current_row(), 0);
        assert_eq!(app.engine.letter_at(0, 0), None);
    }

    #[test]
    fn q_quits_only_after_game_over() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.engine.letter_at(0, 0), Some('q'));

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn empty_pool_replays_the_same_word() {
        let mut app = app();
        app.new_game();
        assert_eq!(app.engine.target().text(), "hello");
    }
}
