//! The falling piece and its board transactions.
//!
//! Every transaction follows the same shape: unset the piece's four cells, compute the
//! four target cells, then either fill the targets (accepted) or re-fill the original
//! cells (rejected). A rejected move leaves the board exactly as it was.

use crate::board::Board;
use crate::geom::{self, Coord};
use crate::shape::{Matrix, ShapeKind};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(i8)]
pub enum Dir {
    Left = -1,
    Right = 1,
}

impl From<Dir> for isize {
    fn from(d: Dir) -> Self {
        d as i8 as isize
    }
}

/// A live piece: its shape and the board indices of its four cells.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActivePiece {
    pub shape: ShapeKind,
    pub cells: [usize; 4],
}

impl ActivePiece {
    /// Places `shape` at its spawn location and fills its cells. If any spawn cell is off
    /// the board or already filled, returns `None` and leaves the board untouched.
    pub fn spawn(board: &mut Board, shape: ShapeKind) -> Option<Self> {
        let mut cells = [0; 4];
        for (dst, c) in cells.iter_mut().zip(shape.spawn_coords(board.width())) {
            *dst = board.index_of(c)?;
            if board.is_filled(*dst) {
                return None;
            }
        }
        let piece = Self { shape, cells };
        piece.fill(board, true);
        Some(piece)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    pub fn coords(&self, width: usize) -> [Coord; 4] {
        self.cells.map(|i| Coord::of_index(i, width))
    }

    fn fill(&self, board: &mut Board, fill: bool) {
        for &i in &self.cells {
            board.set_fill(i, fill);
        }
    }

    /// Moves the piece one row down. Rejected if any cell is on the bottom row or lands
    /// on a filled cell.
    pub fn try_down(self, board: &mut Board) -> Option<Self> {
        let (width, height) = (board.width(), board.height());
        self.transact(board, |i| (i / width + 1 < height).then_some(i + width))
    }

    /// Moves the piece one column sideways. Rejected if any cell would leave its row or
    /// lands on a filled cell.
    pub fn try_aside(self, board: &mut Board, dir: Dir) -> Option<Self> {
        let width = board.width();
        self.transact(board, |i| {
            let next = i.checked_add_signed(dir.into())?;
            geom::same_row(i, next, width).then_some(next)
        })
    }

    /// Rotates every cell around the pivot cell using `m`. Rejected if any cell leaves the
    /// board or lands on a filled cell. Shapes without a pivot are returned unchanged
    /// without touching the board.
    pub fn try_rotate(self, board: &mut Board, m: &Matrix) -> Option<Self> {
        let Some(p) = self.shape.pivot() else {
            return Some(self);
        };
        let (width, height) = (board.width(), board.height());
        let pivot = Coord::of_index(self.cells[p], width);
        self.transact(board, |i| {
            let rel = Coord::of_index(i, width) - pivot;
            let turned = Coord::from_vec(geom::transform(m, rel.to_vec()));
            (pivot + turned).to_index(width, height)
        })
    }

    fn transact(
        self,
        board: &mut Board,
        mut step: impl FnMut(usize) -> Option<usize>,
    ) -> Option<Self> {
        self.fill(board, false);

        let mut next = self.cells;
        let mut updated = 0;
        // last to first
        for (dst, &i) in next.iter_mut().zip(&self.cells).rev() {
            match step(i) {
                Some(t) if !board.is_filled(t) => {
                    *dst = t;
                    updated += 1;
                }
                _ => break,
            }
        }

        if updated == self.cells.len() {
            let moved = Self { cells: next, ..self };
            moved.fill(board, true);
            Some(moved)
        } else {
            self.fill(board, true);
            None
        }
    }
}
