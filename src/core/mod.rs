//! Core domain types
//!
//! Fundamental types with no game-flow logic: validated guess words and
//! per-letter feedback. Everything here is pure and testable in isolation.

mod feedback;
mod word;

pub use feedback::{KeyboardFeedback, LetterFeedback};
pub use word::{WORD_LENGTH, Word, WordError};
