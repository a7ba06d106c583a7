#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Probabilistic sun accrual driven by generator plants.

use lawn_defence_core::{Command, PlantKind, PlantView, PlayState, SUN_HARVEST_CHANCE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the sun production system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
    harvest_chance: f64,
}

impl Config {
    /// Creates a configuration with the standard harvest chance.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self {
            rng_seed,
            harvest_chance: SUN_HARVEST_CHANCE,
        }
    }

    /// Overrides the per-tick probability that a generator produces sun.
    ///
    /// Values outside `0.0..=1.0` are clamped.
    #[must_use]
    pub fn with_harvest_chance(mut self, chance: f64) -> Self {
        self.harvest_chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        self
    }
}

/// Pure system that rolls an independent harvest for every generator each tick.
#[derive(Debug)]
pub struct SunProduction {
    rng: ChaCha8Rng,
    harvest_chance: f64,
}

impl SunProduction {
    /// Creates a new sun production system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            harvest_chance: config.harvest_chance,
        }
    }

    /// Emits a `ProduceSun` command for every generator whose roll succeeds.
    ///
    /// Generators are rolled in identifier order so a seed fully determines
    /// which plant harvests on which tick.
    pub fn handle(&mut self, play_state: PlayState, plants: &PlantView, out: &mut Vec<Command>) {
        if play_state.is_game_over() {
            return;
        }

        for plant in plants.iter() {
            if plant.kind != PlantKind::Generator {
                continue;
            }
            if self.rng.gen_bool(self.harvest_chance) {
                out.push(Command::ProduceSun { plant: plant.id });
            }
        }
    }
}
