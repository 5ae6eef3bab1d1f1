//! Per-letter guess feedback
//!
//! `LetterFeedback` is the three-way classification the server returns for
//! each position of an evaluated guess. `KeyboardFeedback` folds those
//! classifications into the best-known status per letter for the on-screen
//! keyboard; an upgrade to a stronger status is never undone by a later,
//! weaker classification of the same letter.

use serde::Deserialize;

/// Classification of one guessed letter against the secret word
///
/// Wire values are the server's `SCREAMING_SNAKE_CASE` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterFeedback {
    /// Letter in the word, in this position (green tile)
    CorrectPosition,
    /// Letter in the word, in a different position (yellow tile)
    IncorrectPosition,
    /// Letter not in the word (gray tile)
    NotInWord,
}

impl LetterFeedback {
    /// Strength used by the keyboard upgrade rule
    const fn rank(self) -> u8 {
        match self {
            Self::CorrectPosition => 2,
            Self::IncorrectPosition => 1,
            Self::NotInWord => 0,
        }
    }

    /// Whether `self` is a strict upgrade over an existing classification
    #[must_use]
    pub fn upgrades(self, current: Option<Self>) -> bool {
        match current {
            None => true,
            Some(existing) => self.rank() > existing.rank(),
        }
    }
}

/// Cumulative best-known classification per keyboard letter
///
/// One slot per letter of `A-Z`; `None` means the letter has not been part
/// of an evaluated guess yet.
#[derive(Debug, Clone, Default)]
pub struct KeyboardFeedback {
    slots: [Option<LetterFeedback>; 26],
}

impl KeyboardFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one classified letter, upgrading but never downgrading
    ///
    /// Letters outside `A-Z` are ignored.
    pub fn merge(&mut self, letter: char, feedback: LetterFeedback) {
        let Some(slot) = Self::index(letter) else {
            return;
        };
        if feedback.upgrades(self.slots[slot]) {
            self.slots[slot] = Some(feedback);
        }
    }

    /// Best-known classification for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        Self::index(letter).and_then(|slot| self.slots[slot])
    }

    /// Forget everything (new game)
    pub fn clear(&mut self) {
        self.slots = [None; 26];
    }

    fn index(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| (upper as u8 - b'A') as usize)
    }
}
