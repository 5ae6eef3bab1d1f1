//! Wordle Client
//!
//! A terminal client for a Wordle-style word-guessing game. The server owns
//! the secret word, the dictionary, and all evaluation logic; this crate owns
//! the client-side game-state machine (session, guess buffer, board,
//! submission sequencing) and a ratatui front-end that projects it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_client::authority::HttpAuthority;
//! use wordle_client::interactive::{App, run_tui};
//!
//! let authority = HttpAuthority::new("http://localhost:8080").unwrap();
//! let app = App::new(authority);
//! run_tui(app).unwrap();
//! ```

// Core domain types
pub mod core;

// Client game-state machine
pub mod game;

// Remote evaluation authority
pub mod authority;

// Interactive TUI interface
pub mod interactive;
