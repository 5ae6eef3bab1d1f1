//! Remote evaluation authority
//!
//! The server owns the secret word, the dictionary, and all evaluation
//! logic. This module is the contract the client state machine depends on:
//! create a game, submit a guess, discard a game. `http` implements it over
//! the server's REST API.

mod http;

pub use http::{DEFAULT_SERVER, HttpAuthority};

use crate::core::{LetterFeedback, Word};
use crate::game::Difficulty;
use serde::Deserialize;

/// Successful create-game response
///
/// The wire carries more (difficulty echo, remaining attempts); only the
/// identity and the attempt budget are consumed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreated {
    pub game_id: String,
    pub max_attempts: usize,
}

/// One classified letter of an evaluated guess, in response order
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterFeedback,
}

/// Successful submit-guess response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    pub results: Vec<LetterResult>,
    pub game_over: bool,
    #[serde(default)]
    pub won: bool,
    /// Revealed only on a terminal response
    #[serde(default)]
    pub target_word: Option<String>,
}

/// Failures surfaced by the authority
#[derive(Debug, thiserror::Error)]
pub enum AuthorityError {
    /// The server rejected the request (invalid word, unknown game).
    /// Recoverable; the message is shown to the user verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Non-success response with no usable error body
    #[error("server error: HTTP {0}")]
    Status(u16),

    /// Network or protocol failure
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response did not match the contract
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl AuthorityError {
    /// Rejections preserve the row for resubmission; everything else is a
    /// communication failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Contract the game-state machine depends on
pub trait Authority {
    /// Ask the server to create a game at `difficulty`
    ///
    /// # Errors
    /// `AuthorityError` on rejection or communication failure; no game is
    /// created in that case.
    fn create_game(&self, difficulty: Difficulty) -> Result<GameCreated, AuthorityError>;

    /// Submit a complete guess for evaluation
    ///
    /// # Errors
    /// `AuthorityError::Rejected` when the word is refused (not in the
    /// dictionary, game already over); other variants on communication
    /// failure.
    fn submit_guess(&self, game_id: &str, word: &Word) -> Result<GuessOutcome, AuthorityError>;

    /// Discard a finished or abandoned game
    ///
    /// # Errors
    /// `AuthorityError` on communication failure. Best-effort; callers may
    /// ignore the error.
    fn delete_game(&self, game_id: &str) -> Result<(), AuthorityError>;
}

impl<T: Authority + ?Sized> Authority for &T {
    fn create_game(&self, difficulty: Difficulty) -> Result<GameCreated, AuthorityError> {
        (**self).create_game(difficulty)
    }

    fn submit_guess(&self, game_id: &str, word: &Word) -> Result<GuessOutcome, AuthorityError> {
        (**self).submit_guess(game_id, word)
    }

    fn delete_game(&self, game_id: &str) -> Result<(), AuthorityError> {
        (**self).delete_game(game_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_created_parses_wire_shape() {
        let created: GameCreated = serde_json::from_str(
            r#"{
                "gameId": "3f2c",
                "difficulty": "EASY",
                "maxAttempts": 6,
                "remainingAttempts": 6
            }"#,
        )
        .unwrap();

        assert_eq!(created.game_id, "3f2c");
        assert_eq!(created.max_attempts, 6);
    }

    #[test]
    fn guess_outcome_parses_non_terminal_response() {
        let outcome: GuessOutcome = serde_json::from_str(
            r#"{
                "guess": "CRANE",
                "results": [
                    {"letter": "C", "position": 0, "status": "CORRECT_POSITION"},
                    {"letter": "R", "position": 1, "status": "INCORRECT_POSITION"},
                    {"letter": "A", "position": 2, "status": "NOT_IN_WORD"},
                    {"letter": "N", "position": 3, "status": "NOT_IN_WORD"},
                    {"letter": "E", "position": 4, "status": "CORRECT_POSITION"}
                ],
                "gameOver": false,
                "won": false,
                "currentAttempt": 1,
                "remainingAttempts": 5
            }"#,
        )
        .unwrap();

        assert_eq!(outcome.results.len(), 5);
        assert_eq!(outcome.results[0].letter, 'C');
        assert_eq!(outcome.results[0].status, LetterFeedback::CorrectPosition);
        assert_eq!(outcome.results[2].status, LetterFeedback::NotInWord);
        assert!(!outcome.game_over);
        assert_eq!(outcome.target_word, None);
    }

    #[test]
    fn guess_outcome_parses_terminal_response_with_target() {
        let outcome: GuessOutcome = serde_json::from_str(
            r#"{
                "results": [
                    {"letter": "G", "status": "NOT_IN_WORD"},
                    {"letter": "U", "status": "NOT_IN_WORD"},
                    {"letter": "E", "status": "INCORRECT_POSITION"},
                    {"letter": "S", "status": "NOT_IN_WORD"},
                    {"letter": "S", "status": "NOT_IN_WORD"}
                ],
                "gameOver": true,
                "won": false,
                "targetWord": "GRAPE"
            }"#,
        )
        .unwrap();

        assert!(outcome.game_over);
        assert!(!outcome.won);
        assert_eq!(outcome.target_word.as_deref(), Some("GRAPE"));
    }

    #[test]
    fn rejection_is_distinguished_from_transport() {
        let rejected = AuthorityError::Rejected("Not a valid word: XXXXX".to_string());
        assert!(rejected.is_rejection());
        assert_eq!(rejected.to_string(), "Not a valid word: XXXXX");

        let status = AuthorityError::Status(502);
        assert!(!status.is_rejection());

        let malformed = AuthorityError::Malformed("truncated body".to_string());
        assert!(!malformed.is_rejection());
    }
}
