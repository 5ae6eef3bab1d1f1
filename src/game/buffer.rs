//! In-progress guess for the current row
//!
//! The buffer owns the letters of the row being typed. Finalized rows live
//! on the board; rows past the current one do not exist yet. Status gating
//! (no edits unless a game is in progress) is the state machine's job; the
//! buffer only enforces its own column bounds and alphabet.

use crate::core::{WORD_LENGTH, Word};
use std::fmt;

/// Row advancement past the attempt budget
///
/// Indicates coordinator/session desynchronization. Surfaced, never
/// silently recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOverflow {
    pub row: usize,
    pub max_attempts: usize,
}

impl fmt::Display for RowOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row advance past attempt budget: at row {} of {}",
            self.row, self.max_attempts
        )
    }
}

impl std::error::Error for RowOverflow {}

/// The mutable guess under construction for the current row
///
/// Invariant: the column index always equals the number of buffered letters
/// and never exceeds `WORD_LENGTH`.
#[derive(Debug, Clone, Default)]
pub struct GuessBuffer {
    row: usize,
    letters: String,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the row being typed
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Current column; always equals the number of buffered letters
    #[must_use]
    pub fn column(&self) -> usize {
        self.letters.len()
    }

    /// The letters typed so far, uppercased
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Append one letter if there is room
    ///
    /// Non-letters and input past `WORD_LENGTH` are ignored. Returns whether
    /// the buffer changed.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.letters.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(ch.to_ascii_uppercase());
        true
    }

    /// Drop the trailing letter, if any. Returns whether the buffer changed.
    pub fn delete_last_letter(&mut self) -> bool {
        self.letters.pop().is_some()
    }

    /// A row can be submitted once every column is filled
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    /// The completed word, once the row is full
    ///
    /// # Panics
    /// Will not panic - the buffer only ever holds `A-Z` letters.
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        self.is_full()
            .then(|| Word::new(&self.letters).expect("buffer only holds A-Z"))
    }

    /// Advance to the next row after an accepted, non-terminal guess
    ///
    /// # Errors
    /// `RowOverflow` if the next row would not fit in `max_attempts`; the
    /// buffer is left untouched so the defect can be inspected.
    pub fn advance_row(&mut self, max_attempts: usize) -> Result<(), RowOverflow> {
        if self.row + 1 >= max_attempts {
            return Err(RowOverflow {
                row: self.row,
                max_attempts,
            });
        }
        self.row += 1;
        self.letters.clear();
        Ok(())
    }

    /// Back to row 0 with no letters
    pub fn reset(&mut self) {
        self.row = 0;
        self.letters.clear();
    }
}
