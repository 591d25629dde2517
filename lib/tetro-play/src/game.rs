//! A single play session: periodic ticks, key handling and game over.

use tetro::{Action, ActivePiece, Board, Controller, Keymap, ShapeSource, Step, Surface};

use crate::config::Config;
use crate::error::Error;
use crate::randomizer::Randomizer;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    Playing,
    /// A new piece had no room to spawn. Ticks and keys are ignored from here on.
    GameOver,
}

pub struct Game<S = Randomizer> {
    controller: Controller<S>,
    keymap: Keymap,
    status: Status,
    pieces_locked: u32,
    rows_cleared: u32,
}

impl Game<Randomizer> {
    /// Starts a session with a fresh board and randomizer as described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        let source = match config.seed {
            Some(seed) => Randomizer::from_seed(seed),
            None => Randomizer::from_entropy(),
        };
        Ok(Self::new(config.board(), source, config.keymap()?))
    }
}

impl<S: ShapeSource> Game<S> {
    pub fn new(board: Board, source: S, keymap: Keymap) -> Self {
        let controller = Controller::new(board, source);
        let status = if controller.is_topped_out() {
            warn!("no room for the first piece");
            Status::GameOver
        } else {
            Status::Playing
        };
        info!(
            width = controller.board().width(),
            height = controller.board().height(),
            "game started"
        );
        Self {
            controller,
            keymap,
            status,
            pieces_locked: 0,
            rows_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board {
        self.controller.board()
    }

    pub fn piece(&self) -> Option<&ActivePiece> {
        self.controller.piece()
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Fill state of every cell in index order.
    pub fn snapshot(&self) -> Vec<bool> {
        self.controller.board().snapshot()
    }

    /// Marks every cell dirty so the next render pass redraws the whole board.
    pub fn invalidate(&mut self) {
        self.controller.invalidate();
    }

    /// One timer interval: render, then move the piece down one row. Does nothing once the
    /// game is over, except that the tick which ends the game renders the final board.
    pub fn tick<D: Surface + ?Sized>(&mut self, surface: &mut D) -> Result<Step, D::Error> {
        if self.is_over() {
            return Ok(Step::Idle);
        }
        self.render(surface)?;
        let step = self.controller.step_down();
        self.record(step);
        if self.is_over() {
            self.render(surface)?;
        }
        Ok(step)
    }

    /// Handles a key press by name. Unrecognized keys, and every key after game over, are
    /// ignored and return `None`. Otherwise the action is performed and the board is
    /// rendered immediately.
    pub fn handle_key<D: Surface + ?Sized>(
        &mut self,
        key: &str,
        surface: &mut D,
    ) -> Result<Option<Action>, D::Error> {
        let Some(action) = self.keymap.resolve(key) else {
            trace!(key, "ignored key");
            return Ok(None);
        };
        if self.is_over() {
            trace!(key, "game over, ignored key");
            return Ok(None);
        }
        self.perform(action);
        self.render(surface)?;
        Ok(Some(action))
    }

    /// Applies one action without rendering. Returns true if the piece moved or turned.
    /// A down move or drop that locks the piece returns false.
    pub fn perform(&mut self, action: Action) -> bool {
        if self.is_over() {
            return false;
        }
        if let Some(dir) = action.dir() {
            return self.controller.move_aside(dir);
        }
        if let Some(turn) = action.turn() {
            return self.controller.rotate(turn);
        }
        let step = match action {
            Action::HardDrop => self.controller.hard_drop(),
            _ => self.controller.step_down(),
        };
        self.record(step);
        step.moved()
    }

    /// Draws every cell changed since the last pass.
    pub fn render<D: Surface + ?Sized>(&mut self, surface: &mut D) -> Result<usize, D::Error> {
        self.controller.render(surface)
    }

    fn record(&mut self, step: Step) {
        let (piece, cleared) = match step {
            Step::Locked { piece, cleared } | Step::ToppedOut { piece, cleared } => {
                (piece, cleared)
            }
            Step::Moved | Step::Idle => return,
        };
        self.pieces_locked += 1;
        debug!(shape = %piece.shape, cells = ?piece.cells, "piece locked");
        if cleared > 0 {
            self.rows_cleared += cleared as u32;
            info!(cleared, total = self.rows_cleared, "rows cleared");
        }
        if let Step::ToppedOut { .. } = step {
            self.status = Status::GameOver;
            warn!(
                pieces = self.pieces_locked,
                rows = self.rows_cleared,
                "game over"
            );
        }
    }
}
