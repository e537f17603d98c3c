//! Per-cell feedback classification
//!
//! Classification is derived, never stored: a cell in a committed row is
//! `Correct`, `Present`, or `Absent`; cells in rows that have not been
//! submitted yet are `Untested`.

/// Feedback category for a single board cell
///
/// Variants are ordered by hint strength so the best classification for a
/// letter across the whole board is simply the `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellState {
    /// Row not yet committed
    Untested,
    /// Letter does not occur in the target
    Absent,
    /// Letter occurs in the target, but not at this position
    Present,
    /// Letter matches the target at this position
    Correct,
}

impl CellState {
    /// True for cells in a committed row
    #[inline]
    #[must_use]
    pub const fn is_committed(self) -> bool {
        !matches!(self, Self::Untested)
    }

    /// Glyph used in the shareable result block
    ///
    /// # Examples
    /// ```
    /// use wordle_game::engine::CellState;
    ///
    /// assert_eq!(CellState::Correct.glyph(), '🟩');
    /// assert_eq!(CellState::Present.glyph(), '🟨');
    /// assert_eq!(CellState::Absent.glyph(), '⬛');
    /// ```
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Untested => '⬜',
        }
    }
}

/// Game outcome state
///
/// Transitions only forward: `Playing → Won` or `Playing → Lost`, both
/// terminal. Once the game has left `Playing`, the engine ignores all input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_state_precedence() {
        assert!(CellState::Correct > CellState::Present);
        assert!(CellState::Present > CellState::Absent);
        assert!(CellState::Absent > CellState::Untested);
    }

    #[test]
    fn cell_state_committed() {
        assert!(CellState::Correct.is_committed());
        assert!(CellState::Present.is_committed());
        assert!(CellState::Absent.is_committed());
        assert!(!CellState::Untested.is_committed());
    }

    #[test]
    fn cell_state_glyphs() {
        assert_eq!(CellState::Correct.glyph(), '🟩');
        assert_eq!(CellState::Present.glyph(), '🟨');
        assert_eq!(CellState::Absent.glyph(), '⬛');
        assert_eq!(CellState::Untested.glyph(), '⬜');
    }

    #[test]
    fn game_status_terminal() {
        assert!(!GameStatus::Playing.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
