//! Draws the board into a terminal, two columns per cell.

use crossterm::{cursor, style, terminal, QueueableCommand};
use std::io::{self, Write};
use tetro::{Rect, Surface};

const FILLED: &str = "██";
const EMPTY: &str = " .";
const BLANK: &str = "  ";

/// Clamps a cell count to a terminal coordinate.
fn clamp(n: impl TryInto<u16>) -> u16 {
    n.try_into().unwrap_or(u16::MAX)
}

pub struct TermSurface<W: Write> {
    out: W,
    cell: u32,
    /// Terminal position of the top left cell.
    origin: (u16, u16),
}

impl<W: Write> TermSurface<W> {
    /// `cell` is the pixel pitch the board was laid out with.
    pub fn new(out: W, cell: u32, origin: (u16, u16)) -> Self {
        Self {
            out,
            cell: cell.max(1),
            origin,
        }
    }

    /// Terminal column and row of the cell whose pixel rectangle is `r`.
    pub fn cursor_for(&self, r: Rect) -> (u16, u16) {
        let col = clamp(r.x / self.cell);
        let row = clamp(r.y / self.cell);
        (
            self.origin.0.saturating_add(col.saturating_mul(2)),
            self.origin.1.saturating_add(row),
        )
    }

    fn put(&mut self, r: Rect, text: &str) -> io::Result<()> {
        let (x, y) = self.cursor_for(r);
        self.out
            .queue(cursor::MoveTo(x, y))?
            .queue(style::Print(text))?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Border around a `width` x `height` board.
    pub fn draw_frame(&mut self, width: usize, height: usize) -> io::Result<()> {
        let (x0, y0) = (
            self.origin.0.saturating_sub(1),
            self.origin.1.saturating_sub(1),
        );
        let right = self.origin.0.saturating_add(clamp(width).saturating_mul(2));
        let bottom = self.origin.1.saturating_add(clamp(height));
        let edge = format!("+{}+", "-".repeat(width * 2));
        self.out
            .queue(cursor::MoveTo(x0, y0))?
            .queue(style::Print(&edge))?;
        for y in self.origin.1..bottom {
            self.out
                .queue(cursor::MoveTo(x0, y))?
                .queue(style::Print("|"))?
                .queue(cursor::MoveTo(right, y))?
                .queue(style::Print("|"))?;
        }
        self.out
            .queue(cursor::MoveTo(x0, bottom))?
            .queue(style::Print(&edge))?;
        Ok(())
    }

    /// Replaces the text on line `line` below a board of `height` rows.
    pub fn print_below(&mut self, height: usize, line: u16, text: &str) -> io::Result<()> {
        let y = self
            .origin
            .1
            .saturating_add(clamp(height))
            .saturating_add(1)
            .saturating_add(line);
        self.out
            .queue(cursor::MoveTo(self.origin.0.saturating_sub(1), y))?
            .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?
            .queue(style::Print(text))?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TermSurface<W> {
    type Error = io::Error;

    fn clear_region(&mut self, r: Rect) -> io::Result<()> {
        self.put(r, BLANK)
    }

    fn fill_region(&mut self, r: Rect) -> io::Result<()> {
        self.put(r, FILLED)
    }

    fn stroke_region(&mut self, r: Rect) -> io::Result<()> {
        self.put(r, EMPTY)
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
