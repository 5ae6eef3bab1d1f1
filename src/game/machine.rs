//! The composed client game-state machine
//!
//! `Game` owns the session, the guess buffer, the board, and the keyboard
//! feedback, and is the only mutation path for all of them. Guess submission
//! runs through a small coordinator state machine with at most one request
//! in flight; all remote calls are blocking, so no input event can race an
//! evaluation.

use crate::authority::{Authority, GuessOutcome};
use crate::core::{KeyboardFeedback, LetterFeedback, WORD_LENGTH};
use crate::game::board::Board;
use crate::game::buffer::GuessBuffer;
use crate::game::session::{Difficulty, GameStatus, Session};
use tracing::{debug, error, warn};

/// Submission coordinator states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// A guess is at the authority; input is gated
    Submitting,
    /// Game over; only reset leaves this state
    Terminal,
}

/// Rendering style for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
    /// Invariant violation; a defect signal, not a user mistake
    Defect,
}

/// Status line shown by the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

/// The client game-state machine
#[derive(Debug, Default)]
pub struct Game {
    session: Session,
    buffer: GuessBuffer,
    board: Board,
    keyboard: KeyboardFeedback,
    submit_state: SubmitState,
    message: Option<Message>,
    shake_pending: bool,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardFeedback {
        &self.keyboard
    }

    #[must_use]
    pub const fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.session.status()
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Take the pending shake cue, if a rejection just fired it
    pub fn take_shake(&mut self) -> bool {
        std::mem::take(&mut self.shake_pending)
    }

    /// Ask the authority for a new game and enter `InProgress`
    ///
    /// On failure nothing changes except the status message; no partial
    /// session is created. Ignored while a game is already running.
    pub fn start<A: Authority>(&mut self, authority: &A, difficulty: Difficulty) {
        if self.session.status() == GameStatus::InProgress {
            return;
        }

        self.set_message("Creating game...", MessageStyle::Info);
        match authority.create_game(difficulty) {
            Ok(created) => {
                debug!(
                    game_id = %created.game_id,
                    max_attempts = created.max_attempts,
                    %difficulty,
                    "game created"
                );
                self.session
                    .begin(created.game_id, difficulty, created.max_attempts);
                self.buffer.reset();
                self.board = Board::new(created.max_attempts);
                self.keyboard.clear();
                self.submit_state = SubmitState::Idle;
                self.set_message(
                    format!(
                        "New {difficulty} game: {} attempts. Good luck!",
                        created.max_attempts
                    ),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                warn!(%err, "create game failed");
                self.set_message(format!("Could not create game: {err}"), MessageStyle::Error);
            }
        }
    }

    /// Append a letter to the live row
    ///
    /// Ignored unless a game is in progress, submission is idle, the row has
    /// room, and `ch` is a letter.
    pub fn press_letter(&mut self, ch: char) {
        if !self.input_open() {
            return;
        }
        self.buffer.append_letter(ch);
    }

    /// Drop the trailing letter of the live row
    pub fn press_backspace(&mut self) {
        if !self.input_open() {
            return;
        }
        self.buffer.delete_last_letter();
    }

    /// True when the live row holds a complete word and submission is allowed
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.input_open() && self.buffer.is_full()
    }

    /// Submit the live row for evaluation. No-op unless submittable.
    ///
    /// Rejection preserves the row and fires the shake cue; acceptance
    /// freezes the row's feedback and either advances or ends the session.
    pub fn submit_guess<A: Authority>(&mut self, authority: &A) {
        if !self.is_submittable() {
            return;
        }
        let Some(word) = self.buffer.word() else {
            return;
        };
        let Some(game_id) = self.session.id().map(str::to_string) else {
            error!("in-progress session has no game id");
            self.report_defect("No active session to submit to");
            return;
        };

        self.submit_state = SubmitState::Submitting;
        debug!(row = self.buffer.row(), guess = word.text(), "submitting guess");

        match authority.submit_guess(&game_id, &word) {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(err) if err.is_rejection() => {
                debug!(%err, "guess rejected");
                self.shake_pending = true;
                self.set_message(err.to_string(), MessageStyle::Error);
                self.submit_state = SubmitState::Idle;
            }
            Err(err) => {
                warn!(%err, "guess submission failed");
                self.set_message(format!("Submission failed: {err}"), MessageStyle::Error);
                self.submit_state = SubmitState::Idle;
            }
        }
    }

    /// Clear everything back to `NotStarted`. Permitted from any status.
    ///
    /// The server-side game is deleted best-effort; a failure there only
    /// gets logged.
    pub fn reset<A: Authority>(&mut self, authority: &A) {
        if let Some(game_id) = self.session.id() {
            if let Err(err) = authority.delete_game(game_id) {
                debug!(%err, game_id, "server-side delete failed");
            }
        }
        self.session.reset();
        self.buffer.reset();
        self.board = Board::default();
        self.keyboard.clear();
        self.submit_state = SubmitState::Idle;
        self.message = None;
        self.shake_pending = false;
    }

    /// Whether the live row accepts edits
    fn input_open(&self) -> bool {
        self.session.status() == GameStatus::InProgress && self.submit_state == SubmitState::Idle
    }

    fn apply_outcome(&mut self, outcome: GuessOutcome) {
        if outcome.results.len() != WORD_LENGTH {
            error!(
                got = outcome.results.len(),
                "authority returned wrong classification count"
            );
            self.report_defect(format!(
                "Authority returned {} classifications for a {WORD_LENGTH}-letter word",
                outcome.results.len()
            ));
            self.submit_state = SubmitState::Idle;
            return;
        }

        let row = self.buffer.row();
        let entries: Vec<(char, LetterFeedback)> = outcome
            .results
            .iter()
            .map(|result| (result.letter.to_ascii_uppercase(), result.status))
            .collect();

        self.board.apply_feedback(row, &entries);
        for &(letter, feedback) in &entries {
            self.keyboard.merge(letter, feedback);
        }

        if outcome.game_over {
            self.session.end(outcome.won, outcome.target_word);
            self.submit_state = SubmitState::Terminal;
            if outcome.won {
                debug!(guesses = row + 1, "game won");
                self.set_message(
                    format!("You won in {} of {} guesses!", row + 1, self.session.max_attempts()),
                    MessageStyle::Success,
                );
            } else {
                debug!("game lost");
                let text = match self.session.target_word() {
                    Some(target) => format!("Out of attempts. The word was {target}."),
                    None => "Out of attempts.".to_string(),
                };
                self.set_message(text, MessageStyle::Error);
            }
        } else {
            match self.buffer.advance_row(self.session.max_attempts()) {
                Ok(()) => {
                    self.submit_state = SubmitState::Idle;
                    self.message = None;
                }
                Err(overflow) => {
                    // Non-terminal response on the final row: the authority
                    // and the session disagree. Surface, do not recover.
                    error!(%overflow, "coordinator/session desynchronization");
                    self.report_defect(overflow.to_string());
                    self.submit_state = SubmitState::Idle;
                }
            }
        }
    }

    fn set_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.message = Some(Message {
            text: text.into(),
            style,
        });
    }

    fn report_defect(&mut self, text: impl Into<String>) {
        self.set_message(text, MessageStyle::Defect);
    }
}
