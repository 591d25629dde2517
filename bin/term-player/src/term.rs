//! Alternate screen and raw mode setup, undone on drop.

use crossterm::{cursor, terminal, ExecutableCommand};
use std::io::{self, Write};

/// Owns the terminal output while the game is on screen. Dropping it leaves raw mode and
/// the alternate screen and shows the cursor again, on success, error or panic alike.
pub struct TermGuard<W: Write> {
    out: W,
}

impl<W: Write> TermGuard<W> {
    /// Hides the cursor, switches to the alternate screen and enables raw mode. If any
    /// step fails, the steps already taken are undone before the error is returned.
    pub fn enter(out: W) -> io::Result<Self> {
        let mut guard = Self { out };
        guard.out.execute(cursor::Hide)?;
        guard.out.execute(terminal::EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(guard)
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TermGuard<W> {
    fn drop(&mut self) {
        // logged only, so the error that ended the game is the one returned
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("could not leave raw mode: {e}");
        }
        if let Err(e) = self
            .out
            .execute(terminal::LeaveAlternateScreen)
            .and_then(|out| out.execute(cursor::Show))
        {
            warn!("could not restore the screen: {e}");
        }
    }
}
