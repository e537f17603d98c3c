//! Word list loading utilities
//!
//! Provides functions to load answer pools from files or use the embedded
//! constant.

use crate::engine::Target;
use std::fs;
use std::io;
use std::path::Path;

/// Load candidate answer words from a file
///
/// Returns a vector of valid Target instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Target>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Target::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Target vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::targets_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = targets_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn targets_from_slice(slice: &[&str]) -> Vec<Target> {
    slice.iter().filter_map(|&s| Target::new(s).ok()).collect()
}
