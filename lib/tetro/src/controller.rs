//! Owns the board and the falling piece, and sequences lock, line clear and respawn.

use crate::board::Board;
use crate::clear;
use crate::piece::{ActivePiece, Dir};
use crate::render::Surface;
use crate::shape::{ShapeKind, Turn};

/// Abstraction for choosing the next shape to spawn.
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeKind;
}

impl<F: FnMut() -> ShapeKind> ShapeSource for F {
    fn next_shape(&mut self) -> ShapeKind {
        self()
    }
}

/// Result of moving the piece down by one row.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// The piece moved.
    Moved,
    /// The piece could not move and is now part of the board. `cleared` rows were removed
    /// and a new piece spawned.
    Locked { piece: ActivePiece, cleared: usize },
    /// As `Locked`, but the new piece had no room to spawn. No piece is in play anymore.
    ToppedOut { piece: ActivePiece, cleared: usize },
    /// There was no piece to move.
    Idle,
}

impl Step {
    pub fn moved(&self) -> bool {
        matches!(self, Step::Moved)
    }
}

pub struct Controller<S> {
    board: Board,
    source: S,
    piece: Option<ActivePiece>,
}

impl<S: ShapeSource> Controller<S> {
    /// Takes ownership of `board` (which may already contain settled cells) and spawns the
    /// first piece. If that spawn is blocked the controller starts out topped out.
    pub fn new(board: Board, source: S) -> Self {
        let mut ctl = Self {
            board,
            source,
            piece: None,
        };
        ctl.spawn();
        ctl
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Option<&ActivePiece> {
        self.piece.as_ref()
    }

    /// True once a spawn has failed.
    pub fn is_topped_out(&self) -> bool {
        self.piece.is_none()
    }

    /// Forces a full redraw on the next render pass.
    pub fn invalidate(&mut self) {
        self.board.invalidate();
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn spawn(&mut self) -> bool {
        let shape = self.source.next_shape();
        self.piece = ActivePiece::spawn(&mut self.board, shape);
        self.piece.is_some()
    }

    /// Moves the piece down one row, locking it if it cannot move.
    pub fn step_down(&mut self) -> Step {
        let Some(piece) = self.piece else {
            return Step::Idle;
        };
        if let Some(moved) = piece.try_down(&mut self.board) {
            self.piece = Some(moved);
            return Step::Moved;
        }
        let cleared = clear::clear_full_rows(&mut self.board);
        if self.spawn() {
            Step::Locked { piece, cleared }
        } else {
            Step::ToppedOut { piece, cleared }
        }
    }

    /// Returns true if the piece moved, false if it locked (or there was no piece).
    pub fn move_down(&mut self) -> bool {
        self.step_down().moved()
    }

    /// Moves the piece one column sideways. Never locks.
    pub fn move_aside(&mut self, dir: Dir) -> bool {
        self.transact(|piece, board| piece.try_aside(board, dir))
    }

    /// Rotates the piece around its pivot. Always false for shapes without a pivot.
    pub fn rotate(&mut self, turn: Turn) -> bool {
        match self.piece {
            Some(p) if p.shape.pivot().is_some() => {
                self.transact(|piece, board| piece.try_rotate(board, turn.matrix()))
            }
            _ => false,
        }
    }

    /// Moves the piece down until it locks. Returns the final step.
    pub fn hard_drop(&mut self) -> Step {
        loop {
            match self.step_down() {
                Step::Moved => continue,
                step => return step,
            }
        }
    }

    fn transact(
        &mut self,
        f: impl FnOnce(ActivePiece, &mut Board) -> Option<ActivePiece>,
    ) -> bool {
        let Some(piece) = self.piece else {
            return false;
        };
        match f(piece, &mut self.board) {
            Some(next) => {
                self.piece = Some(next);
                true
            }
            None => false,
        }
    }

    /// Draws every cell changed since the last pass. Returns how many cells were drawn.
    pub fn render<D: Surface + ?Sized>(&mut self, surface: &mut D) -> Result<usize, D::Error> {
        crate::render::render(&mut self.board, surface)
    }
}
