//! Seedable uniform shape selection.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tetro::{ShapeKind, ShapeSource};

/// Picks each shape uniformly at random from the seven canonical shapes.
#[derive(Clone, Debug)]
pub struct Randomizer {
    rng: SmallRng,
}

impl Randomizer {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl ShapeSource for Randomizer {
    fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.gen_range(0..ShapeKind::ALL.len())]
    }
}
