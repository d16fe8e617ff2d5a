//! Terminal presentation adapter.
//!
//! Thin wrapper over crossterm: raw mode plus the alternate screen, one
//! blocking `poll_event`, and a full-frame `render`. The terminal is
//! restored on drop, including on error paths. Frame layout is computed
//! locally per render; no screen positions are kept between frames.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use twenty48_core::engine::{Board, Move};

/// Width of one rendered cell; wide enough for a right-aligned 2048.
const CELL_WIDTH: usize = 6;

/// One terminal event, already mapped to game vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Dir(Move),
    Quit,
    Resize,
}

/// Owns the terminal for the lifetime of a game.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode().context("enabling raw mode")?;
        execute!(out, EnterAlternateScreen, Hide).context("entering alternate screen")?;
        Ok(Screen { out })
    }

    /// Block until an event the game cares about arrives.
    ///
    /// Unmapped keys are swallowed here, so callers only ever see moves,
    /// resizes and quit. A failure from the terminal is fatal and
    /// propagates.
    pub fn poll_event(&mut self) -> Result<InputEvent> {
        loop {
            match event::read().context("reading terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(ev) = map_key(key) {
                        return Ok(ev);
                    }
                }
                Event::Resize(_, _) => return Ok(InputEvent::Resize),
                _ => {}
            }
        }
    }

    /// Draw a full frame: title, grid, then status lines below it.
    pub fn render(&mut self, board: &Board, status_lines: &[&str]) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for (y, line) in frame_lines(board, status_lines).iter().enumerate() {
            queue!(self.out, MoveTo(0, y as u16))?;
            write!(self.out, "{line}")?;
        }
        self.out.flush().context("flushing frame")?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Map a key press to a game event. Arrows, `hjkl` and `wasd` move;
/// Esc, `q` and Ctrl-C quit.
fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(InputEvent::Dir(Move::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(InputEvent::Dir(Move::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(InputEvent::Dir(Move::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(InputEvent::Dir(Move::Right))
        }
        _ => None,
    }
}

/// Lay out one frame as plain lines. Empty cells render as a dot,
/// tiles right-aligned in fixed-width fields.
fn frame_lines(board: &Board, status_lines: &[&str]) -> Vec<String> {
    let mut lines = vec!["2048".to_string(), String::new()];
    for row in board.rows() {
        let mut text = String::new();
        for &cell in row {
            if cell == 0 {
                text.push_str(&format!("{:>width$}", ".", width = CELL_WIDTH));
            } else {
                text.push_str(&format!("{:>width$}", cell, width = CELL_WIDTH));
            }
        }
        lines.push(text);
        lines.push(String::new());
    }
    for line in status_lines {
        lines.push((*line).to_string());
    }
    lines
}
