//! The guess-evaluation and game-state engine
//!
//! A `GuessEngine` is a deterministic reducer over key events: letters fill
//! the active row, DELETE clears backwards within it, and SUBMIT commits a
//! full row, after which the win/loss conditions are evaluated. Every invalid
//! input is a silent no-op; the engine never raises errors and never mutates
//! state once the game is over.

use rustc_hash::FxHashSet;

use super::cell::{CellState, GameStatus};
use super::target::Target;

/// A single input event from the keyboard collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An alphabetic key; normalized to ASCII lowercase on entry
    Letter(char),
    /// Clear the last letter of the active row
    Delete,
    /// Commit the active row
    Submit,
}

/// Best classification seen so far per distinct letter
///
/// The three buckets are disjoint: a letter lands in the strongest bucket it
/// has achieved across all committed rows (`Correct` beats `Present` beats
/// `Absent`). Used to tint the on-screen keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSummary {
    pub correct: FxHashSet<char>,
    pub present: FxHashSet<char>,
    pub absent: FxHashSet<char>,
}

impl LetterSummary {
    /// Best classification for a letter, or `Untested` if it has not appeared
    /// in any committed row
    #[must_use]
    pub fn state_of(&self, letter: char) -> CellState {
        if self.correct.contains(&letter) {
            CellState::Correct
        } else if self.present.contains(&letter) {
            CellState::Present
        } else if self.absent.contains(&letter) {
            CellState::Absent
        } else {
            CellState::Untested
        }
    }
}

/// One game instance: target, board grid, cursor, and status
///
/// The board is `rows × columns` and is created empty; `columns` is the
/// target's length. State changes only through [`GuessEngine::handle_key`],
/// and each call either fully applies one logical input or is a complete
/// no-op.
///
/// # Examples
/// ```
/// use wordle_game::engine::{GameStatus, GuessEngine, Key, Target};
///
/// let target = Target::new("hello").unwrap();
/// let mut engine = GuessEngine::new(target, 6);
///
/// for ch in "hello".chars() {
///     engine.handle_key(Key::Letter(ch));
/// }
/// engine.handle_key(Key::Submit);
///
/// assert_eq!(engine.status(), GameStatus::Won);
/// ```
#[derive(Debug, Clone)]
pub struct GuessEngine {
    target: Target,
    board: Vec<Vec<Option<char>>>,
    current_row: usize,
    current_column: usize,
    status: GameStatus,
}

impl GuessEngine {
    /// Start a new game with the given hidden word and attempt count
    ///
    /// # Panics
    /// Panics if `max_attempts` is zero.
    #[must_use]
    pub fn new(target: Target, max_attempts: usize) -> Self {
        assert!(max_attempts > 0, "game needs at least one attempt");

        let board = vec![vec![None; target.len()]; max_attempts];

        Self {
            target,
            board,
            current_row: 0,
            current_column: 0,
            status: GameStatus::Playing,
        }
    }

    /// Number of rows (maximum attempts)
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.len()
    }

    /// Number of columns (target length)
    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.target.len()
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Row index of the next cell eligible for input
    ///
    /// Equals `rows()` after the last row has been committed.
    #[inline]
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Column index of the next cell eligible for input
    #[inline]
    #[must_use]
    pub fn current_column(&self) -> usize {
        self.current_column
    }

    /// The hidden word, for end-of-game reveal
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Letter in a board cell, or `None` if the cell is empty
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.board[row][col]
    }

    /// Whether the cursor sits on this cell
    #[inline]
    #[must_use]
    pub fn is_active_cell(&self, row: usize, col: usize) -> bool {
        self.current_row == row && self.current_column == col
    }

    /// Apply one key event
    ///
    /// Returns `true` if the input was accepted, `false` if it was rejected
    /// as a no-op. Rejections are silent by design: a full row swallows
    /// further letters, DELETE at column 0 does nothing (it never reaches
    /// into a previous row), SUBMIT of a partial row does nothing, and any
    /// input after the game has ended does nothing. A `false` return
    /// guarantees the board, cursor, and status are unchanged.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        match key {
            Key::Letter(ch) => self.push_letter(ch),
            Key::Delete => self.delete_letter(),
            Key::Submit => self.submit_row(),
        }
    }

    fn push_letter(&mut self, ch: char) -> bool {
        let ch = ch.to_ascii_lowercase();
        if !ch.is_ascii_lowercase() {
            return false;
        }
        if self.current_column >= self.columns() {
            return false;
        }

        self.board[self.current_row][self.current_column] = Some(ch);
        self.current_column += 1;
        true
    }

    fn delete_letter(&mut self) -> bool {
        if self.current_column == 0 {
            return false;
        }

        self.current_column -= 1;
        self.board[self.current_row][self.current_column] = None;
        true
    }

    fn submit_row(&mut self) -> bool {
        if self.current_column < self.columns() {
            return false;
        }

        self.current_row += 1;
        self.current_column = 0;

        // Win check first: an exact match on the last row is a win, not a loss.
        if self.row_matches_target(self.current_row - 1) {
            self.status = GameStatus::Won;
        } else if self.current_row == self.rows() {
            self.status = GameStatus::Lost;
        }

        true
    }

    fn row_matches_target(&self, row: usize) -> bool {
        (0..self.columns()).all(|col| self.board[row][col] == Some(self.target.char_at(col)))
    }

    /// Classification of a board cell
    ///
    /// Cells in rows the cursor has not passed are `Untested`. For committed
    /// cells, position match beats membership: `Correct` if the letter sits
    /// where the target has it, `Present` if the letter occurs anywhere in
    /// the target, `Absent` otherwise. The membership test is not
    /// count-aware: a guess with a letter duplicated beyond the target's
    /// count still marks every occurrence `Present`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn classify(&self, row: usize, col: usize) -> CellState {
        if row >= self.current_row {
            return CellState::Untested;
        }

        // Committed rows are always full.
        let Some(letter) = self.board[row][col] else {
            return CellState::Untested;
        };

        if letter == self.target.char_at(col) {
            CellState::Correct
        } else if self.target.contains(letter) {
            CellState::Present
        } else {
            CellState::Absent
        }
    }

    /// Keyboard hint buckets derived from all committed rows
    #[must_use]
    pub fn letter_summary(&self) -> LetterSummary {
        let mut best: Vec<(char, CellState)> = Vec::new();

        for row in 0..self.current_row.min(self.rows()) {
            for col in 0..self.columns() {
                let Some(letter) = self.board[row][col] else {
                    continue;
                };
                let state = self.classify(row, col);

                match best.iter_mut().find(|(l, _)| *l == letter) {
                    Some((_, seen)) => *seen = (*seen).max(state),
                    None => best.push((letter, state)),
                }
            }
        }

        let mut summary = LetterSummary::default();
        for (letter, state) in best {
            match state {
                CellState::Correct => {
                    summary.correct.insert(letter);
                }
                CellState::Present => {
                    summary.present.insert(letter);
                }
                CellState::Absent => {
                    summary.absent.insert(letter);
                }
                CellState::Untested => {}
            }
        }
        summary
    }

    /// Shareable result block
    ///
    /// One line per committed row, one glyph per cell, no separators within a
    /// line. Covers exactly the rows that were played.
    #[must_use]
    pub fn share_text(&self) -> String {
        let committed = self.current_row.min(self.rows());

        (0..committed)
            .map(|row| {
                (0..self.columns())
                    .map(|col| self.classify(row, col).glyph())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(target: &str) -> GuessEngine {
        GuessEngine::new(Target::new(target).unwrap(), 6)
    }

    fn type_word(engine: &mut GuessEngine, word: &str) {
        for ch in word.chars() {
            engine.handle_key(Key::Letter(ch));
        }
    }

    fn guess(engine: &mut GuessEngine, word: &str) {
        type_word(engine, word);
        engine.handle_key(Key::Submit);
    }

    #[test]
    fn new_game_starts_empty() {
        let engine = engine("hello");

        assert_eq!(engine.rows(), 6);
        assert_eq!(engine.columns(), 5);
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.current_row(), 0);
        assert_eq!(engine.current_column(), 0);

        for row in 0..6 {
            for col in 0..5 {
                assert_eq!(engine.letter_at(row, col), None);
                assert_eq!(engine.classify(row, col), CellState::Untested);
            }
        }
    }

    #[test]
    fn letters_fill_the_active_row() {
        let mut engine = engine("hello");

        assert!(engine.handle_key(Key::Letter('w')));
        assert!(engine.handle_key(Key::Letter('O'))); // Normalized to lowercase

        assert_eq!(engine.letter_at(0, 0), Some('w'));
        assert_eq!(engine.letter_at(0, 1), Some('o'));
        assert_eq!(engine.current_column(), 2);
    }

    #[test]
    fn full_row_swallows_further_letters() {
        let mut engine = engine("hello");
        type_word(&mut engine, "world");

        assert!(!engine.handle_key(Key::Letter('x')));
        assert_eq!(engine.current_column(), 5);
        assert_eq!(engine.letter_at(0, 4), Some('d'));
    }

    #[test]
    fn non_alphabetic_keys_rejected() {
        let mut engine = engine("hello");

        assert!(!engine.handle_key(Key::Letter('3')));
        assert!(!engine.handle_key(Key::Letter(' ')));
        assert!(!engine.handle_key(Key::Letter('é')));
        assert_eq!(engine.current_column(), 0);
    }

    #[test]
    fn delete_clears_backwards() {
        let mut engine = engine("hello");
        type_word(&mut engine, "wor");

        assert!(engine.handle_key(Key::Delete));
        assert_eq!(engine.current_column(), 2);
        assert_eq!(engine.letter_at(0, 2), None);
    }

    #[test]
    fn delete_at_column_zero_is_noop() {
        let mut engine = engine("hello");

        assert!(!engine.handle_key(Key::Delete));
        assert_eq!(engine.current_column(), 0);
        assert_eq!(engine.current_row(), 0);

        // Also cannot delete into a committed row
        guess(&mut engine, "world");
        assert!(!engine.handle_key(Key::Delete));
        assert_eq!(engine.current_row(), 1);
        assert_eq!(engine.letter_at(0, 4), Some('d'));
    }

    #[test]
    fn fill_then_delete_round_trips() {
        let mut engine = engine("hello");
        type_word(&mut engine, "world");

        for _ in 0..5 {
            assert!(engine.handle_key(Key::Delete));
        }

        assert_eq!(engine.current_row(), 0);
        assert_eq!(engine.current_column(), 0);
        for col in 0..5 {
            assert_eq!(engine.letter_at(0, col), None);
        }
    }

    #[test]
    fn partial_row_cannot_be_submitted() {
        let mut engine = engine("hello");
        type_word(&mut engine, "wor");

        assert!(!engine.handle_key(Key::Submit));
        assert_eq!(engine.current_row(), 0);
        assert_eq!(engine.current_column(), 3);
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn submit_commits_row_and_resets_column() {
        let mut engine = engine("hello");
        guess(&mut engine, "world");

        assert_eq!(engine.current_row(), 1);
        assert_eq!(engine.current_column(), 0);
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn correct_guess_wins() {
        let mut engine = engine("hello");
        guess(&mut engine, "hello");

        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.current_row(), 1);
        for col in 0..5 {
            assert_eq!(engine.classify(0, col), CellState::Correct);
        }
    }

    #[test]
    fn world_vs_hello_classification() {
        let mut engine = engine("hello");
        guess(&mut engine, "world");

        // W absent, O present, R absent, L lands on the target's second L, D absent
        assert_eq!(engine.classify(0, 0), CellState::Absent);
        assert_eq!(engine.classify(0, 1), CellState::Present);
        assert_eq!(engine.classify(0, 2), CellState::Absent);
        assert_eq!(engine.classify(0, 3), CellState::Correct);
        assert_eq!(engine.classify(0, 4), CellState::Absent);
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn correct_position_beats_membership() {
        let mut engine = engine("hello");
        guess(&mut engine, "helps");

        assert_eq!(engine.classify(0, 0), CellState::Correct);
        assert_eq!(engine.classify(0, 1), CellState::Correct);
        assert_eq!(engine.classify(0, 2), CellState::Correct);
        assert_eq!(engine.classify(0, 3), CellState::Absent);
        assert_eq!(engine.classify(0, 4), CellState::Absent);
    }

    #[test]
    fn duplicate_letters_all_marked_present() {
        // Target has one 'e'; a guess with two 'e's marks both. The membership
        // rule is deliberately not count-aware.
        let mut engine = engine("hexad");
        guess(&mut engine, "melee");

        assert_eq!(engine.classify(0, 1), CellState::Correct); // e in place
        assert_eq!(engine.classify(0, 3), CellState::Present);
        assert_eq!(engine.classify(0, 4), CellState::Present);
    }

    #[test]
    fn uncommitted_rows_classify_untested() {
        let mut engine = engine("hello");
        guess(&mut engine, "world");
        type_word(&mut engine, "bra");

        // Active row and beyond stay untested even where letters sit
        assert_eq!(engine.classify(1, 0), CellState::Untested);
        assert_eq!(engine.classify(1, 2), CellState::Untested);
        assert_eq!(engine.classify(5, 4), CellState::Untested);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut engine = engine("hello");

        for _ in 0..6 {
            guess(&mut engine, "world");
        }

        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.current_row(), 6);
    }

    #[test]
    fn last_row_win_beats_loss() {
        let mut engine = engine("hello");

        for _ in 0..5 {
            guess(&mut engine, "world");
        }
        assert_eq!(engine.status(), GameStatus::Playing);

        guess(&mut engine, "hello");
        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn terminal_status_freezes_everything() {
        let mut engine = engine("hello");
        guess(&mut engine, "hello");
        assert_eq!(engine.status(), GameStatus::Won);

        let before = engine.clone();
        for key in [Key::Letter('a'), Key::Delete, Key::Submit] {
            assert!(!engine.handle_key(key));
        }

        assert_eq!(engine.status(), before.status());
        assert_eq!(engine.current_row(), before.current_row());
        assert_eq!(engine.current_column(), before.current_column());
        for row in 0..6 {
            for col in 0..5 {
                assert_eq!(engine.letter_at(row, col), before.letter_at(row, col));
            }
        }
    }

    #[test]
    fn rejected_input_leaves_state_unchanged() {
        let mut engine = engine("hello");
        type_word(&mut engine, "wo");

        let before = engine.clone();
        assert!(!engine.handle_key(Key::Submit)); // Partial row

        assert_eq!(engine.current_row(), before.current_row());
        assert_eq!(engine.current_column(), before.current_column());
        for col in 0..5 {
            assert_eq!(engine.letter_at(0, col), before.letter_at(0, col));
        }
    }

    #[test]
    fn active_cell_tracks_cursor() {
        let mut engine = engine("hello");

        assert!(engine.is_active_cell(0, 0));
        assert!(!engine.is_active_cell(0, 1));

        engine.handle_key(Key::Letter('w'));
        assert!(engine.is_active_cell(0, 1));
        assert!(!engine.is_active_cell(0, 0));

        guess(&mut engine, "orld");
        assert!(engine.is_active_cell(1, 0));
    }

    #[test]
    fn letter_summary_buckets_are_disjoint_and_best_wins() {
        let mut engine = engine("hello");
        guess(&mut engine, "world"); // o, l present; w, r, d absent
        guess(&mut engine, "llama"); // l correct at 2; second l present; a, m absent

        let summary = engine.letter_summary();

        assert!(summary.correct.contains(&'l'));
        assert!(!summary.present.contains(&'l')); // Promoted out of present
        assert!(summary.present.contains(&'o'));
        assert!(summary.absent.contains(&'w'));
        assert!(summary.absent.contains(&'r'));
        assert!(summary.absent.contains(&'d'));
        assert!(summary.absent.contains(&'a'));
        assert!(summary.absent.contains(&'m'));

        assert!(summary.correct.is_disjoint(&summary.present));
        assert!(summary.correct.is_disjoint(&summary.absent));
        assert!(summary.present.is_disjoint(&summary.absent));
    }

    #[test]
    fn letter_summary_ignores_uncommitted_letters() {
        let mut engine = engine("hello");
        type_word(&mut engine, "world"); // Typed but never submitted

        let summary = engine.letter_summary();
        assert!(summary.correct.is_empty());
        assert!(summary.present.is_empty());
        assert!(summary.absent.is_empty());
        assert_eq!(summary.state_of('w'), CellState::Untested);
    }

    #[test]
    fn letter_summary_state_of() {
        let mut engine = engine("hello");
        guess(&mut engine, "hoard");

        let summary = engine.letter_summary();
        assert_eq!(summary.state_of('h'), CellState::Correct);
        assert_eq!(summary.state_of('o'), CellState::Present);
        assert_eq!(summary.state_of('d'), CellState::Absent);
        assert_eq!(summary.state_of('z'), CellState::Untested);
    }

    #[test]
    fn share_text_covers_committed_rows_only() {
        let mut engine = engine("hello");
        assert_eq!(engine.share_text(), "");

        guess(&mut engine, "world");
        assert_eq!(engine.share_text(), "⬛🟨⬛🟩⬛");

        guess(&mut engine, "hello");
        assert_eq!(engine.share_text(), "⬛🟨⬛🟩⬛\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_full_lost_game() {
        let mut engine = engine("hello");
        for _ in 0..6 {
            guess(&mut engine, "quack");
        }

        let share = engine.share_text();
        assert_eq!(share.lines().count(), 6);
        assert!(share.lines().all(|line| line.chars().count() == 5));
    }

    #[test]
    fn short_target_sizes_board() {
        let mut engine = GuessEngine::new(Target::new("cat").unwrap(), 3);

        assert_eq!(engine.columns(), 3);
        assert_eq!(engine.rows(), 3);

        guess(&mut engine, "act"); // a present, c present, t correct
        assert_eq!(engine.classify(0, 0), CellState::Present);
        assert_eq!(engine.classify(0, 1), CellState::Present);
        assert_eq!(engine.classify(0, 2), CellState::Correct);
    }
}
