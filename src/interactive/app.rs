//! TUI application wiring
//!
//! Maps terminal key events onto the game-state machine and owns the
//! terminal lifecycle. All game semantics live in `game::machine`; this
//! layer only routes events, tracks the transient shake deadline, and
//! drives the redraw loop.

use crate::authority::Authority;
use crate::game::{Difficulty, Game, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the rejected-row shake cue stays visible
const SHAKE_DURATION: Duration = Duration::from_millis(600);

/// Redraw tick; lets the shake cue expire without further input
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App<A: Authority> {
    authority: A,
    pub game: Game,
    pub menu_cursor: usize,
    pub should_quit: bool,
    shake_until: Option<Instant>,
}

impl<A: Authority> App<A> {
    #[must_use]
    pub fn new(authority: A) -> Self {
        Self {
            authority,
            game: Game::new(),
            menu_cursor: 0,
            should_quit: false,
            shake_until: None,
        }
    }

    /// Start a game immediately (difficulty chosen on the command line)
    pub fn start_with(&mut self, difficulty: Difficulty) {
        self.menu_cursor = Difficulty::ALL
            .iter()
            .position(|&d| d == difficulty)
            .unwrap_or(0);
        self.game.start(&self.authority, difficulty);
        self.absorb_cues();
    }

    /// Whether the live row should render with the shake styling
    #[must_use]
    pub fn shake_active(&self) -> bool {
        self.shake_until.is_some_and(|until| Instant::now() < until)
    }

    /// Route one key event
    ///
    /// Quit is global; everything else depends on where the session is in
    /// its lifecycle.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.game.status() {
            GameStatus::NotStarted => self.handle_menu_key(key.code),
            GameStatus::InProgress => self.handle_play_key(key.code),
            GameStatus::Won | GameStatus::Lost => self.handle_game_over_key(key.code),
        }
        self.absorb_cues();
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = self
                    .menu_cursor
                    .checked_sub(1)
                    .unwrap_or(Difficulty::ALL.len() - 1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_cursor = (self.menu_cursor + 1) % Difficulty::ALL.len();
            }
            KeyCode::Char(digit @ '1'..='3') => {
                let index = digit as usize - '1' as usize;
                self.menu_cursor = index;
                self.game.start(&self.authority, Difficulty::ALL[index]);
            }
            KeyCode::Enter => {
                self.game
                    .start(&self.authority, Difficulty::ALL[self.menu_cursor]);
            }
            _ => {}
        }
    }

    fn handle_play_key(&mut self, code: KeyCode) {
        match code {
            // Letters are input while playing; quitting is Ctrl+C or Esc
            KeyCode::Char(ch) if ch.is_ascii_alphabetic() => self.game.press_letter(ch),
            KeyCode::Backspace => self.game.press_backspace(),
            KeyCode::Enter => self.game.submit_guess(&self.authority),
            KeyCode::Esc => self.game.reset(&self.authority),
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Esc => {
                self.game.reset(&self.authority);
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn absorb_cues(&mut self) {
        if self.game.take_shake() {
            self.shake_until = Some(Instant::now() + SHAKE_DURATION);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<A: Authority>(mut app: App<A>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, A: Authority>(
    terminal: &mut Terminal<B>,
    app: &mut App<A>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| super::rendering::ui(frame, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::{AuthorityError, GameCreated, GuessOutcome};
    use crate::core::Word;
    use std::cell::RefCell;

    struct StubAuthority {
        created: RefCell<usize>,
    }

    impl StubAuthority {
        fn new() -> Self {
            Self {
                created: RefCell::new(0),
            }
        }
    }

    impl Authority for StubAuthority {
        fn create_game(&self, _difficulty: Difficulty) -> Result<GameCreated, AuthorityError> {
            *self.created.borrow_mut() += 1;
            Ok(GameCreated {
                game_id: "stub".to_string(),
                max_attempts: 6,
            })
        }

        fn submit_guess(
            &self,
            _game_id: &str,
            _word: &Word,
        ) -> Result<GuessOutcome, AuthorityError> {
            Err(AuthorityError::Status(500))
        }

        fn delete_game(&self, _game_id: &str) -> Result<(), AuthorityError> {
            Ok(())
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn menu_cursor_wraps_both_ways() {
        let mut app = App::new(StubAuthority::new());

        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.menu_cursor, Difficulty::ALL.len() - 1);

        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.menu_cursor, 0);
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.menu_cursor, 1);
    }

    #[test]
    fn enter_on_menu_starts_selected_difficulty() {
        let mut app = App::new(StubAuthority::new());
        app.handle_key(press(KeyCode::Down)); // MEDIUM
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.game.status(), GameStatus::InProgress);
        assert_eq!(app.game.session().difficulty(), Some(Difficulty::Medium));
    }

    #[test]
    fn digit_shortcut_starts_game() {
        let mut app = App::new(StubAuthority::new());
        app.handle_key(press(KeyCode::Char('3')));

        assert_eq!(app.game.session().difficulty(), Some(Difficulty::Hard));
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let mut app = App::new(StubAuthority::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_a_letter_while_playing() {
        let mut app = App::new(StubAuthority::new());
        app.start_with(Difficulty::Easy);

        app.handle_key(press(KeyCode::Char('q')));

        assert!(!app.should_quit);
        assert_eq!(app.game.buffer().letters(), "Q");
    }

    #[test]
    fn esc_while_playing_resets_to_menu() {
        let mut app = App::new(StubAuthority::new());
        app.start_with(Difficulty::Easy);
        app.handle_key(press(KeyCode::Char('a')));

        app.handle_key(press(KeyCode::Esc));

        assert_eq!(app.game.status(), GameStatus::NotStarted);
        assert!(!app.should_quit);
    }
}
