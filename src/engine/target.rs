//! The hidden word the player must guess
//!
//! A Target is validated once at game start and is immutable for the game's
//! lifetime. Its length defines the number of columns in the board.

use std::fmt;

/// The hidden answer word
///
/// Stored lowercase. Any non-zero length is accepted; the board is sized to
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Target word must not be empty"),
            Self::NonAscii => write!(f, "Target word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Target word contains invalid characters"),
        }
    }
}

impl std::error::Error for TargetError {}

impl Target {
    /// Create a new Target from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `TargetError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::engine::Target;
    ///
    /// let target = Target::new("Hello").unwrap();
    /// assert_eq!(target.text(), "hello");
    /// assert_eq!(target.len(), 5);
    ///
    /// assert!(Target::new("").is_err());
    /// assert!(Target::new("he7lo").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, TargetError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(TargetError::Empty);
        }

        if !text.is_ascii() {
            return Err(TargetError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(TargetError::InvalidCharacters);
        }

        let chars = text.chars().collect();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, i.e. the board column count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check whether the target contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
