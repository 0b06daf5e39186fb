use std::io::{stdout, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::Result;

pub type CrosstermTerminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Terminal wrapper owning raw mode and the alternate screen
pub struct Terminal {
    terminal: CrosstermTerminal,
}

impl Terminal {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout());
        let terminal = ratatui::Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Restore terminal to original state
    fn restore() -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Draw frame using provided closure
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = Self::restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Leave the alternate screen before the panic message is printed
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = Terminal::restore();
        previous(info);
    }));
}
