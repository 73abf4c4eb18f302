use alloc::string::String;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Player;
use crate::coordinate::Coordinate;

/// Computer opponent that fires at uniformly random cells. It keeps no
/// memory of earlier shots; repeats are refused by the board and redrawn.
pub struct AiPlayer {
    name: String,
    rng: SmallRng,
}

impl AiPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self::named("Computer", rng)
    }

    pub fn named(name: &str, rng: SmallRng) -> Self {
        Self {
            name: String::from(name),
            rng,
        }
    }

    /// Computer player with a fixed seed, for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_target(&mut self, board_size: usize) -> anyhow::Result<Coordinate> {
        let n = board_size as i32;
        let target = Coordinate::new(self.rng.random_range(0..n), self.rng.random_range(0..n));
        log::debug!("{} picks {}", self.name, target);
        Ok(target)
    }
}
