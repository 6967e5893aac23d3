//! Terminal session guard: raw mode, alternate screen, cursor state.

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// RAII guard over the terminal's interactive state.
///
/// Entering switches to raw mode, optionally flips to the alternate screen,
/// and hides the cursor. Dropping restores everything in reverse order, so
/// the shell comes back intact even on an early return.
pub struct TermGuard {
    /// Whether the alternate screen was entered (and must be left).
    alternate: bool,
}

impl TermGuard {
    /// Enter raw mode and hide the cursor; use the alternate screen when
    /// `alternate_screen` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate
    /// screen, cursor).
    pub fn enter(alternate_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        Ok(Self {
            alternate: alternate_screen,
        })
    }

    /// Current terminal size as (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size query fails.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.alternate {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
