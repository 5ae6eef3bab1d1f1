//! Game session identity and lifecycle
//!
//! Exactly one session is live at a time. It is created by a successful
//! create-game request, ended only by the submission coordinator on a
//! terminal response, and reset unconditionally by the user.

use clap::ValueEnum;
use std::fmt;

/// Difficulty levels the server registers
///
/// The attempt budget per difficulty is server-side policy; the client only
/// ever adopts the `maxAttempts` value the create response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Menu order, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Wire name used by the create-game endpoint
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of the single live session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or Lost; no further guesses accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The single live game session
///
/// Identity and attempt budget come from the server; everything resets
/// together.
#[derive(Debug, Clone, Default)]
pub struct Session {
    id: Option<String>,
    difficulty: Option<Difficulty>,
    max_attempts: usize,
    status: GameStatus,
    target_word: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `InProgress` with the identity and budget the server returned
    pub fn begin(&mut self, id: String, difficulty: Difficulty, max_attempts: usize) {
        self.id = Some(id);
        self.difficulty = Some(difficulty);
        self.max_attempts = max_attempts;
        self.status = GameStatus::InProgress;
        self.target_word = None;
    }

    /// Terminal transition; called only by the submission coordinator
    ///
    /// The target word is whatever the terminal response revealed.
    pub fn end(&mut self, won: bool, target_word: Option<String>) {
        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
        self.target_word = target_word;
    }

    /// Back to `NotStarted`, dropping identity. Permitted from any status.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub const fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret word, once a terminal response revealed it
    #[must_use]
    pub fn target_word(&self) -> Option<&str> {
        self.target_word.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_wire_names() {
        assert_eq!(Difficulty::Easy.as_str(), "EASY");
        assert_eq!(Difficulty::Medium.as_str(), "MEDIUM");
        assert_eq!(Difficulty::Hard.as_str(), "HARD");
        assert_eq!(format!("{}", Difficulty::Hard), "HARD");
    }

    #[test]
    fn session_starts_empty() {
        let session = Session::new();
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.id(), None);
        assert_eq!(session.difficulty(), None);
        assert_eq!(session.max_attempts(), 0);
    }

    #[test]
    fn begin_enters_in_progress() {
        let mut session = Session::new();
        session.begin("game-1".to_string(), Difficulty::Easy, 6);

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.id(), Some("game-1"));
        assert_eq!(session.difficulty(), Some(Difficulty::Easy));
        assert_eq!(session.max_attempts(), 6);
        assert_eq!(session.target_word(), None);
    }

    #[test]
    fn end_sets_terminal_status_and_reveals_target() {
        let mut session = Session::new();
        session.begin("game-1".to_string(), Difficulty::Hard, 4);

        session.end(false, Some("GRAPE".to_string()));
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(session.status().is_terminal());
        assert_eq!(session.target_word(), Some("GRAPE"));

        session.end(true, Some("CRANE".to_string()));
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn reset_permitted_from_any_status() {
        let mut session = Session::new();
        session.reset();
        assert_eq!(session.status(), GameStatus::NotStarted);

        session.begin("game-2".to_string(), Difficulty::Medium, 5);
        session.end(true, Some("SLATE".to_string()));
        session.reset();

        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.id(), None);
        assert_eq!(session.target_word(), None);
    }
}
