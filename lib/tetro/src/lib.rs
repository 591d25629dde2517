#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod geom;
pub use geom::Coord;

pub mod shape;
pub use shape::{ShapeKind, Turn};

pub mod board;
pub use board::{Board, Cell, Metrics};

pub mod piece;
pub use piece::{ActivePiece, Dir};

pub mod clear;

pub mod controller;
pub use controller::{Controller, ShapeSource, Step};

pub mod render;
pub use render::{render, Rect, Surface};

pub mod keys;
pub use keys::{Action, Keymap};
