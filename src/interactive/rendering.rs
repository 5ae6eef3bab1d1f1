//! TUI rendering with ratatui
//!
//! The board/keyboard presenter: a pure projection from game state to
//! widgets. Nothing here holds authoritative state; every frame is rebuilt
//! from the session, the buffer, the board, and the keyboard feedback.

use super::app::App;
use crate::authority::Authority;
use crate::core::{KeyboardFeedback, LetterFeedback, WORD_LENGTH};
use crate::game::{Game, GameStatus, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<A: Authority>(frame: &mut Frame, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board or menu
            Constraint::Length(5), // Keyboard
            Constraint::Length(4), // Status + hints
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    if app.game.status() == GameStatus::NotStarted {
        render_menu(frame, app, chunks[1]);
    } else {
        render_board(frame, app, chunks[1]);
    }

    render_keyboard(frame, &app.game, chunks[2]);
    render_status(frame, app, chunks[3]);
}

fn render_header<A: Authority>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let title = match app.game.session().difficulty() {
        Some(difficulty) if app.game.status() != GameStatus::NotStarted => {
            format!("WORDLE ({difficulty})")
        }
        _ => "WORDLE".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(header, area);
}

fn render_menu<A: Authority>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let mut lines = vec![Line::from(""), Line::from("Select difficulty:"), Line::from("")];

    for (index, difficulty) in crate::game::Difficulty::ALL.iter().enumerate() {
        let selected = index == app.menu_cursor;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}. {difficulty}", index + 1),
            style,
        )));
    }

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" New Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(menu, area);
}

fn render_board<A: Authority>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let lines = board_lines(&app.game, app.shake_active());
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(board, area);
}

fn render_keyboard(frame: &mut Frame, game: &Game, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(game.keyboard()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    frame.render_widget(keyboard, area);
}

fn render_status<A: Authority>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let message = match app.game.message() {
        Some(message) => Line::from(Span::styled(
            message.text.clone(),
            message_style(message.style),
        )),
        None => Line::from(""),
    };

    let status = Paragraph::new(vec![message, hint_line(app)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// One line per board row, projected from frozen feedback plus the live
/// buffer. Later rows render as empty tiles.
fn board_lines(game: &Game, shake: bool) -> Vec<Line<'static>> {
    let board = game.board();
    let buffer = game.buffer();
    let live_row = buffer.row();
    let in_progress = game.status() == GameStatus::InProgress;

    let mut lines = Vec::with_capacity(board.row_count());
    for row in 0..board.row_count() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for column in 0..WORD_LENGTH {
            let tile = board.tile(row, column).unwrap_or_default();
            let span = match tile.feedback {
                Some(feedback) => Span::styled(
                    format!(" {} ", tile.letter.unwrap_or(' ')),
                    Style::default()
                        .fg(Color::Black)
                        .bg(feedback_color(feedback))
                        .add_modifier(Modifier::BOLD),
                ),
                None if in_progress && row == live_row => {
                    let letter = buffer.letters().as_bytes().get(column).copied();
                    match letter {
                        Some(byte) => Span::styled(
                            format!(" {} ", byte as char),
                            if shake {
                                Style::default()
                                    .fg(Color::Red)
                                    .add_modifier(Modifier::BOLD)
                            } else {
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD)
                            },
                        ),
                        None => empty_tile(),
                    }
                }
                None => empty_tile(),
            };
            spans.push(span);
            if column + 1 < WORD_LENGTH {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop(); // No trailing blank line
    lines
}

/// Three QWERTY rows colored by cumulative classification
fn keyboard_lines(keyboard: &KeyboardFeedback) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .chars()
                .map(|letter| {
                    let style = match keyboard.get(letter) {
                        Some(feedback) => Style::default()
                            .fg(Color::Black)
                            .bg(feedback_color(feedback)),
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn hint_line<A: Authority>(app: &App<A>) -> Line<'static> {
    let text = match app.game.status() {
        GameStatus::NotStarted => "up/down select | ENTER start | q quit",
        GameStatus::InProgress => {
            if app.game.is_submittable() {
                "ENTER submit | BACKSPACE delete | ESC abandon"
            } else {
                "type letters | BACKSPACE delete | ESC abandon"
            }
        }
        GameStatus::Won | GameStatus::Lost => "n new game | q quit",
    };
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn empty_tile() -> Span<'static> {
    Span::styled(" . ", Style::default().fg(Color::DarkGray))
}

const fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::CorrectPosition => Color::Green,
        LetterFeedback::IncorrectPosition => Color::Yellow,
        LetterFeedback::NotInWord => Color::DarkGray,
    }
}

const fn message_style(style: MessageStyle) -> Style {
    match style {
        MessageStyle::Info => Style::new().fg(Color::White),
        MessageStyle::Success => Style::new().fg(Color::Green),
        MessageStyle::Error => Style::new().fg(Color::Red),
        MessageStyle::Defect => Style::new().fg(Color::Magenta),
    }
}
