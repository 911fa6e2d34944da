//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal exactly once: explicitly through
/// [`TerminalGuard::restore`], or on drop after an early return.
pub struct TerminalGuard {
    restore: fn() -> Result<()>,
    armed: bool,
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self::with_restore(restore)
    }

    fn with_restore(restore: fn() -> Result<()>) -> Self {
        Self {
            restore,
            armed: true,
        }
    }

    /// Restore now and report failures instead of swallowing them on drop.
    pub fn restore(mut self) -> Result<()> {
        self.armed = false;
        (self.restore)()
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = (self.restore)();
        }
    }
}
