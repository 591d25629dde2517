//! Dirty-cell rendering onto an abstract drawing surface.

use crate::board::Board;

/// Pixel rectangle on the drawing surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Abstraction for the surface the board is drawn on.
pub trait Surface {
    type Error;

    fn clear_region(&mut self, r: Rect) -> Result<(), Self::Error>;

    /// Draws an occupied cell.
    fn fill_region(&mut self, r: Rect) -> Result<(), Self::Error>;

    /// Draws an empty cell.
    fn stroke_region(&mut self, r: Rect) -> Result<(), Self::Error>;

    /// Called once at the end of every render pass.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Redraws every cell whose cache is invalid, then marks it valid. Clean cells are never
/// touched. Returns the number of cells drawn. If the surface fails, cells drawn so far
/// stay valid and the rest stay dirty.
pub fn render<D: Surface + ?Sized>(
    board: &mut Board,
    surface: &mut D,
) -> Result<usize, D::Error> {
    let size = board.metrics().size();
    let mut drawn = 0;
    for i in 0..board.len() {
        let cell = board.cells()[i];
        if cell.is_cached() {
            continue;
        }
        let (x, y) = cell.origin();
        let r = Rect {
            x,
            y,
            w: size,
            h: size,
        };
        surface.clear_region(r)?;
        if cell.is_filled() {
            surface.fill_region(r)?;
        } else {
            surface.stroke_region(r)?;
        }
        board.mark_cached(i);
        drawn += 1;
    }
    surface.present()?;
    Ok(drawn)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::controller::Controller;
    use crate::piece::Dir;
    use crate::shape::ShapeKind;
    use alloc::vec::Vec;

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    enum Op {
        Clear(Rect),
        Fill(Rect),
        Stroke(Rect),
        Present,
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Surface for Recorder {
        type Error = core::convert::Infallible;

        fn clear_region(&mut self, r: Rect) -> Result<(), Self::Error> {
            self.0.push(Op::Clear(r));
            Ok(())
        }

        fn fill_region(&mut self, r: Rect) -> Result<(), Self::Error> {
            self.0.push(Op::Fill(r));
            Ok(())
        }

        fn stroke_region(&mut self, r: Rect) -> Result<(), Self::Error> {
            self.0.push(Op::Stroke(r));
            Ok(())
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            self.0.push(Op::Present);
            Ok(())
        }
    }

    impl Recorder {
        fn filled(&self) -> Vec<(u32, u32)> {
            self.0
                .iter()
                .filter_map(|op| match op {
                    Op::Fill(r) => Some((r.x, r.y)),
                    _ => None,
                })
                .collect()
        }
    }

    #[test]
    fn test_first_pass_draws_everything() {
        let mut board = Board::new(10, 20);
        board.set_fill(0, true);
        let mut rec = Recorder::default();
        assert_eq!(render(&mut board, &mut rec), Ok(200));
        // clear + draw per cell, then present
        assert_eq!(rec.0.len(), 401);
        let r = Rect {
            x: 4,
            y: 4,
            w: 32,
            h: 32,
        };
        assert_eq!(rec.0[..2], [Op::Clear(r), Op::Fill(r)]);
        assert!(matches!(rec.0[3], Op::Stroke(_)));
        assert_eq!(rec.0.last(), Some(&Op::Present));
        assert!(board.cells().iter().all(|c| c.is_cached()));
    }

    #[test]
    fn test_clean_cells_not_redrawn() {
        let mut board = Board::new(10, 20);
        let mut rec = Recorder::default();
        render(&mut board, &mut rec).unwrap();
        rec.0.clear();
        assert_eq!(render(&mut board, &mut rec), Ok(0));
        assert_eq!(rec.0, [Op::Present]);
    }

    #[test]
    fn test_only_moved_cells_redrawn() {
        let board = Board::new(10, 20);
        let mut ctl = Controller::new(board, || ShapeKind::O);
        let mut rec = Recorder::default();
        ctl.render(&mut rec).unwrap();
        rec.0.clear();

        // O at cols 4,5 moves to cols 5,6: col 4 empties, col 6 fills
        assert!(ctl.move_aside(Dir::Right));
        assert_eq!(ctl.render(&mut rec), Ok(6));
        assert_eq!(rec.filled(), [(204, 4), (244, 4), (204, 44), (244, 44)]);
    }
}
