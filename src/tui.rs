//! TUI (Terminal User Interface) for the word game
//!
//! Full-screen interface built on Ratatui and crossterm.
//!
//! # Architecture
//! - `TuiState`: everything shown on screen plus key handling, no terminal
//! - `TuiInterface`: owns the terminal and implements `GameInterface`
//!
//! The leaderboard panel is rebuilt from `entry_at` / `score_at` whenever the
//! game loop reports a change.

use crate::game_state::{GameInterface, UserAction};
use crate::generator::BaseString;
use crate::leaderboard::{LEADERBOARD_CAPACITY, Leaderboard};
use crate::session::SubmitOutcome;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const TILE_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const TILE_USED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);

/// Screen contents and input handling, independent of any terminal.
#[derive(Debug, Default)]
pub struct TuiState {
    base: String,
    rows: Vec<(String, usize)>,
    current_input: String,
    message: String,
    message_is_error: bool,
    error_message: String,
    status: String,
}

impl TuiState {
    pub fn set_base(&mut self, base: &BaseString) {
        self.base = base.as_str().to_string();
    }

    pub fn set_leaderboard(&mut self, leaderboard: &Leaderboard) {
        self.rows = (0..LEADERBOARD_CAPACITY)
            .map_while(|position| {
                leaderboard
                    .entry_at(position)
                    .map(|word| (word.to_string(), leaderboard.score_at(position)))
            })
            .collect();
    }

    pub fn set_outcome(&mut self, word: &str, outcome: &SubmitOutcome) {
        self.message = format!("{word}: {outcome}");
        self.message_is_error = !outcome.is_inserted();
        self.status = match outcome {
            SubmitOutcome::Inserted { .. } => "Word accepted".to_string(),
            _ => "Word rejected".to_string(),
        };
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn rows(&self) -> &[(String, usize)] {
        &self.rows
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
            debug_log!("handle_key() - Ignoring key with modifier: {:?}", key.modifiers);
            return None;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.current_input.len() < MAX_INPUT_LENGTH {
                    self.current_input.push(c.to_ascii_lowercase());
                } else {
                    self.error_message = format!("Words are limited to {MAX_INPUT_LENGTH} letters!");
                }
                None
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter if self.current_input.is_empty() => {
                self.error_message = "Type a word first!".to_string();
                None
            }
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.current_input);
                info_log!("handle_key() - Submitting '{}'", word);
                Some(UserAction::Submit(word))
            }
            KeyCode::Tab => {
                self.current_input.clear();
                Some(UserAction::Reset)
            }
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                               // Title
                Constraint::Length(3),                               // Letters
                Constraint::Length(3),                               // Input
                Constraint::Length(LEADERBOARD_CAPACITY as u16 + 3), // Leaderboard
                Constraint::Min(3),                                  // Messages
                Constraint::Length(3),                               // Status
                Constraint::Length(3),                               // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        self.render_letters(f, chunks[1]);
        self.render_input(f, chunks[2]);
        self.render_leaderboard(f, chunks[3]);
        self.render_messages(f, chunks[4]);
        self.render_status(f, chunks[5]);
        Self::render_instructions(f, chunks[6]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORD HUNT")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_letters(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for letter in self.base.chars() {
            let style = if self.current_input.contains(letter) {
                TILE_USED_STYLE
            } else {
                TILE_STYLE
            };
            spans.push(Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style));
            spans.push(Span::raw(" "));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Letters").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        // Letters missing from the base are flagged while typing
        let spans: Vec<Span> = self
            .current_input
            .chars()
            .map(|c| {
                let style = if self.base.contains(c) {
                    Style::default().fg(Color::White)
                } else {
                    ERROR_STYLE
                };
                Span::styled(c.to_string(), style)
            })
            .chain(std::iter::once(Span::styled("_", Style::default().fg(Color::Gray))))
            .collect();
        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Your word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_leaderboard(&self, f: &mut Frame, area: Rect) {
        let rows = (0..LEADERBOARD_CAPACITY).map(|position| match self.rows.get(position) {
            Some((word, score)) => Row::new(vec![
                Cell::from(format!("{}", position + 1)),
                Cell::from(word.clone()),
                Cell::from(score.to_string()),
            ]),
            None => Row::new(vec![
                Cell::from(format!("{}", position + 1)),
                Cell::from("-"),
                Cell::from(""),
            ])
            .style(Style::default().fg(Color::DarkGray)),
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(6),
            ],
        )
        .header(Row::new(vec!["#", "Word", "Score"]).style(HEADER_STYLE))
        .block(Block::default().title("Leaderboard").borders(Borders::ALL));
        f.render_widget(table, area);
    }

    fn render_messages(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        if !self.message.is_empty() {
            let style = if self.message_is_error {
                ERROR_STYLE
            } else {
                SUCCESS_STYLE
            };
            lines.push(Line::from(vec![Span::styled(self.message.as_str(), style)]));
        }
        if !self.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                self.error_message.as_str(),
                ERROR_STYLE,
            )]));
        }
        if lines.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                "Find words using only the letters above.",
                MESSAGE_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let status_text = if self.status.is_empty() {
            "Ready"
        } else {
            self.status.as_str()
        };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new("Type a word | ENTER: Submit | TAB: New letters | ESC: Quit")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Terminal-backed interface for [`crate::game_state::game_loop`].
pub struct TuiInterface<B: Backend = CrosstermBackend<io::Stdout>> {
    terminal: Terminal<B>,
    state: TuiState,
    owns_terminal: bool,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            state: TuiState::default(),
            owns_terminal: true,
        })
    }
}

impl<B: Backend> TuiInterface<B> {
    /// Wraps an already prepared terminal, such as a test backend.
    pub fn with_terminal(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            state: TuiState::default(),
            owns_terminal: false,
        }
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn draw(&mut self) -> io::Result<()> {
        let state = &self.state;
        self.terminal.draw(|f| state.render(f))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn poll_key() -> io::Result<Option<KeyEvent>> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            other => {
                debug_log!("poll_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl<B: Backend> GameInterface for TuiInterface<B> {
    fn display_base(&mut self, base: &BaseString) {
        self.state.set_base(base);
        self.state.status = "Ready - type your first word".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match Self::poll_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.state.handle_key(key) {
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_outcome(&mut self, word: &str, outcome: &SubmitOutcome) {
        self.state.set_outcome(word, outcome);
        self.draw_or_log();
    }

    fn display_leaderboard(&mut self, leaderboard: &Leaderboard) {
        self.state.set_leaderboard(leaderboard);
        self.draw_or_log();
    }

    fn display_reset_message(&mut self, base: &BaseString) {
        self.state.set_base(base);
        self.state.status = "New letters drawn".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.state.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl<B: Backend> Drop for TuiInterface<B> {
    fn drop(&mut self) {
        if self.owns_terminal {
            let _ = disable_raw_mode();
            let mut stdout = io::stdout();
            let _ = execute!(stdout, LeaveAlternateScreen, cursor::Show);
        }
    }
}
