#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for emitting zombie spawn commands.
//!
//! The system only decides which lane the next zombie walks along. Whether
//! the zombie actually enters the field (population cap, game over) is
//! decided by the world, which reports ignored attempts as events.

use lawn_defence_core::{Command, LawnGrid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided lane-selection seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that picks a uniformly random lane for every spawn firing.
#[derive(Debug)]
pub struct Spawning {
    rng: ChaCha8Rng,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Emits a single spawn command for one firing of the spawn timer.
    ///
    /// Lawns without lanes never receive zombies.
    pub fn handle(&mut self, lawn: &LawnGrid, out: &mut Vec<Command>) {
        let rows = lawn.rows();
        if rows == 0 {
            return;
        }

        let row = self.rng.gen_range(0..rows);
        out.push(Command::SpawnZombie { row });
    }
}
