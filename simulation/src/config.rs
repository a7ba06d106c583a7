//! Tunable parameters of a simulation run.

use std::time::Duration;

use lawn_defence_core::{SPAWN_PERIOD, TICK_PERIOD};
use serde::Deserialize;

const DEFAULT_SEED: u64 = 0x6c61_776e_6465_6663;

/// Periods and seed used to build a [`crate::Simulation`].
///
/// Deserializes from a table such as:
///
/// ```toml
/// tick_period_ms = 50
/// spawn_period_ms = 2000
/// seed = 7
/// ```
///
/// Missing keys fall back to the standard rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    tick_period_ms: u64,
    spawn_period_ms: u64,
    seed: u64,
}

impl Config {
    /// Creates a configuration from explicit periods and seed.
    #[must_use]
    pub const fn new(tick_period: Duration, spawn_period: Duration, seed: u64) -> Self {
        Self {
            tick_period_ms: tick_period.as_millis() as u64,
            spawn_period_ms: spawn_period.as_millis() as u64,
            seed,
        }
    }

    /// Replaces the seed, keeping the periods.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Period between two runs of the update pipeline.
    #[must_use]
    pub const fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Period between two spawn attempts.
    #[must_use]
    pub const fn spawn_period(&self) -> Duration {
        Duration::from_millis(self.spawn_period_ms)
    }

    /// Seed feeding lane selection and sun accrual.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(TICK_PERIOD, SPAWN_PERIOD, DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_standard_rules() {
        let config = Config::default();

        assert_eq!(config.tick_period(), Duration::from_millis(50));
        assert_eq!(config.spawn_period(), Duration::from_millis(2_000));
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config: Config = toml::from_str("seed = 99\nspawn_period_ms = 500").expect("valid toml");

        assert_eq!(config.seed(), 99);
        assert_eq!(config.spawn_period(), Duration::from_millis(500));
        assert_eq!(config.tick_period(), TICK_PERIOD);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Config, _> = toml::from_str("tick_rate = 3");

        assert!(result.is_err(), "misspelled keys must not be ignored");
    }
}
