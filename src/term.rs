use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};
use tracing::warn;

use crate::error::Result;
use crate::input::EventSource;

/// Owns the terminal while the game runs: alternate screen, raw mode and a
/// hidden cursor. Dropping it puts the terminal back.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn setup() -> Result<Self> {
        let mut term = TermManager { stdout: stdout(), active: true };

        execute!(term.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(term.stdout, cursor::Hide, cursor::DisableBlinking)?;

        Ok(term)
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking)?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    pub fn print_at(&mut self, pos: (u16, u16), ch: char, color: Color) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::SetForegroundColor(color), style::Print(ch))?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore the terminal");
        }
    }
}

/// Keyboard and resize events from the terminal's input queue.
pub struct TermEvents;

impl EventSource for TermEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if poll(timeout)? {
            return Ok(Some(read()?));
        }

        Ok(None)
    }
}
