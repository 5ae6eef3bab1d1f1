//! Client game-state machine
//!
//! Four cooperating parts: the session manager (`session`), the input buffer
//! (`buffer`), the board grid (`board`), and the submission coordinator that
//! composes them and routes every mutation (`machine`).

mod board;
mod buffer;
mod machine;
mod session;

pub use board::{Board, Tile};
pub use buffer::{GuessBuffer, RowOverflow};
pub use machine::{Game, Message, MessageStyle, SubmitState};
pub use session::{Difficulty, GameStatus, Session};
