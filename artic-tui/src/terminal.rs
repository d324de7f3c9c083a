//! Terminal setup and teardown with panic safety.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use crate::table::{Line, LineStyle};

/// A wrapper around the terminal that ensures proper cleanup on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Initialize the terminal for TUI rendering.
    pub fn new() -> io::Result<Self> {
        // Set up panic hook to restore terminal on panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// Get the terminal size as (width, height).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Paint `lines` from the top of the screen.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        for (y, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            apply_style(&mut self.stdout, line.style)?;
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        self.stdout.flush()
    }

    /// Clear the whole screen, e.g. after a resize.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, terminal::Clear(terminal::ClearType::All))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn apply_style(out: &mut Stdout, style: LineStyle) -> io::Result<()> {
    match style {
        LineStyle::Title => queue!(out, SetAttribute(Attribute::Bold), SetForegroundColor(Color::Cyan)),
        LineStyle::Header => queue!(out, SetAttribute(Attribute::Bold)),
        LineStyle::Normal => Ok(()),
        LineStyle::Selected => queue!(out, SetForegroundColor(Color::Green)),
        LineStyle::Cursor => queue!(
            out,
            SetBackgroundColor(Color::DarkGrey),
            SetForegroundColor(Color::White)
        ),
        LineStyle::Muted => queue!(out, SetForegroundColor(Color::DarkGrey)),
        LineStyle::Error => queue!(out, SetAttribute(Attribute::Bold), SetForegroundColor(Color::Red)),
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}
