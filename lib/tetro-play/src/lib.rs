//! Game session on top of the `tetro` engine: shape randomization, tick and key
//! handling, game over, configuration.

#[macro_use]
extern crate tracing;

pub mod config;
pub use config::Config;

pub mod error;
pub use error::Error;

pub mod game;
pub use game::{Game, Status};

pub mod randomizer;
pub use randomizer::Randomizer;
