#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! In-process facade that wires the world, the systems and the timers together.
//!
//! [`Simulation`] is the only writer of its world. Every operation turns into
//! one or more [`Command`]s applied on the caller's thread, and the events the
//! world broadcasts in response are journaled until [`Simulation::take_events`]
//! drains them. The journal keeps at most [`JOURNAL_CAPACITY`] undrained
//! events; older ones are discarded first.

mod clock;
mod config;

use std::time::Duration;

use lawn_defence_core::{
    CellCoord, Command, Event, LawnGrid, PeaView, PlacementError, PlantId, PlantKind, PlantView,
    PlayState, Score, SpawnError, Sun, ZombieId, ZombieView,
};
use lawn_defence_system_shooting::Shooting;
use lawn_defence_system_spawning::{Config as SpawningConfig, Spawning};
use lawn_defence_system_sun_production::{Config as SunProductionConfig, SunProduction};
use lawn_defence_world::{self as world, query, World};
use tracing::{debug, info};

pub use self::clock::{Clock, Firing};
pub use self::config::Config;

/// Number of undrained events retained before the oldest ones are discarded.
pub const JOURNAL_CAPACITY: usize = 4_096;

/// Counts of the timer firings processed by one [`Simulation::advance`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Advanced {
    /// Number of pipeline ticks executed.
    pub ticks: u32,
    /// Number of spawn attempts executed.
    pub spawn_attempts: u32,
}

/// Complete single-game simulation.
#[derive(Debug)]
pub struct Simulation {
    config: Config,
    world: World,
    clock: Clock,
    shooting: Shooting,
    spawning: Spawning,
    sun_production: SunProduction,
    selected: Option<PlantKind>,
    journal: Vec<Event>,
    commands: Vec<Command>,
    firings: Vec<Firing>,
}

impl Simulation {
    /// Creates a running game with the starting sun balance and an empty lawn.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let seed = config.seed();
        info!(
            seed,
            tick_ms = config.tick_period().as_millis() as u64,
            spawn_ms = config.spawn_period().as_millis() as u64,
            "simulation created"
        );

        Self {
            config,
            world: World::new(),
            clock: Clock::new(config.tick_period(), config.spawn_period()),
            shooting: Shooting::new(),
            spawning: Spawning::new(SpawningConfig::new(seed)),
            sun_production: SunProduction::new(SunProductionConfig::new(seed.rotate_left(32))),
            selected: None,
            journal: Vec::new(),
            commands: Vec::new(),
            firings: Vec::new(),
        }
    }

    /// Configuration the simulation was created with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the five-stage update pipeline once.
    ///
    /// The world moves zombies, moves peas and resolves collisions. Shooters
    /// and generators then act on the state left behind by those stages.
    /// Nothing happens once the game is over. Events are journaled; callers
    /// that never drain them keep only the latest [`JOURNAL_CAPACITY`].
    pub fn tick(&mut self) {
        self.trim_journal();
        if self.is_game_over() {
            return;
        }

        world::apply(
            &mut self.world,
            Command::Tick {
                dt: self.config.tick_period(),
            },
            &mut self.journal,
        );

        let play_state = query::play_state(&self.world);
        if play_state.is_game_over() {
            return;
        }

        self.commands.clear();
        self.shooting.handle(
            play_state,
            &query::plant_view(&self.world),
            &query::zombie_view(&self.world),
            query::lawn(&self.world),
            &mut self.commands,
        );
        self.flush_commands();

        self.sun_production.handle(
            play_state,
            &query::plant_view(&self.world),
            &mut self.commands,
        );
        self.flush_commands();
    }

    /// Runs the spawn controller once.
    ///
    /// # Errors
    ///
    /// Returns the reason reported by the world when no zombie entered the field.
    pub fn try_spawn_zombie(&mut self) -> Result<ZombieId, SpawnError> {
        self.trim_journal();
        self.commands.clear();
        self.spawning.handle(query::lawn(&self.world), &mut self.commands);

        let Some(command) = self.commands.pop() else {
            return Err(SpawnError::InvalidLane);
        };

        let first_new = self.journal.len();
        world::apply(&mut self.world, command, &mut self.journal);
        let outcome = self.journal[first_new..]
            .iter()
            .find_map(|event| match event {
                Event::ZombieSpawned { zombie, .. } => Some(Ok(*zombie)),
                Event::ZombieSpawnRejected { reason, .. } => Some(Err(*reason)),
                _ => None,
            })
            .unwrap_or(Err(SpawnError::GameOver));

        if let Err(reason) = outcome {
            debug!(%reason, "spawn attempt ignored");
        }
        outcome
    }

    /// Attempts to place a plant of the provided kind on the provided cell.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition. The world is left untouched in
    /// that case.
    pub fn place_plant(
        &mut self,
        cell: CellCoord,
        kind: Option<PlantKind>,
    ) -> Result<PlantId, PlacementError> {
        self.trim_journal();
        let first_new = self.journal.len();
        world::apply(
            &mut self.world,
            Command::PlacePlant { kind, cell },
            &mut self.journal,
        );

        self.journal[first_new..]
            .iter()
            .find_map(|event| match event {
                Event::PlantPlaced { plant, .. } => Some(Ok(*plant)),
                Event::PlantPlacementRejected { reason, .. } => Some(Err(*reason)),
                _ => None,
            })
            .unwrap_or(Err(PlacementError::GameOver))
    }

    /// Selects the plant kind that [`Simulation::place_selected`] will place.
    pub fn select_plant(&mut self, kind: Option<PlantKind>) {
        self.selected = kind;
    }

    /// Plant kind currently selected, if any.
    #[must_use]
    pub fn selected_plant(&self) -> Option<PlantKind> {
        self.selected
    }

    /// Attempts to place the selected plant kind on the provided cell.
    ///
    /// # Errors
    ///
    /// Same as [`Simulation::place_plant`].
    pub fn place_selected(&mut self, cell: CellCoord) -> Result<PlantId, PlacementError> {
        self.place_plant(cell, self.selected)
    }

    /// Restores the initial game state, clears the selection and restarts
    /// both timers.
    pub fn reset(&mut self) {
        self.trim_journal();
        world::apply(&mut self.world, Command::Reset, &mut self.journal);
        self.selected = None;
        self.clock.reset();
    }

    /// Advances simulated time, running every tick and spawn attempt that
    /// falls due within `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) -> Advanced {
        self.firings.clear();
        self.clock.advance(elapsed, &mut self.firings);

        let mut advanced = Advanced::default();
        let firings = std::mem::take(&mut self.firings);
        for firing in &firings {
            match firing {
                Firing::Tick => {
                    self.tick();
                    advanced.ticks += 1;
                }
                Firing::Spawn => {
                    let _ = self.try_spawn_zombie();
                    advanced.spawn_attempts += 1;
                }
            }
        }
        self.firings = firings;
        advanced
    }

    /// Drains the events broadcast by the world since the previous call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.journal)
    }

    /// Plants on the lawn, ordered by identifier.
    #[must_use]
    pub fn plants(&self) -> PlantView {
        query::plant_view(&self.world)
    }

    /// Zombies on the field, ordered by identifier.
    #[must_use]
    pub fn zombies(&self) -> ZombieView {
        query::zombie_view(&self.world)
    }

    /// Peas in flight, ordered by identifier.
    #[must_use]
    pub fn peas(&self) -> PeaView {
        query::pea_view(&self.world)
    }

    /// Current sun balance.
    #[must_use]
    pub fn sun(&self) -> Sun {
        query::sun(&self.world)
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> Score {
        query::score(&self.world)
    }

    /// Whether the game is running or over.
    #[must_use]
    pub fn play_state(&self) -> PlayState {
        query::play_state(&self.world)
    }

    /// Reports whether a zombie has reached the house.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.play_state().is_game_over()
    }

    /// Number of ticks executed since creation or the last reset.
    #[must_use]
    pub fn tick_index(&self) -> u64 {
        query::tick_index(&self.world)
    }

    /// Lawn layout.
    #[must_use]
    pub fn lawn(&self) -> &LawnGrid {
        query::lawn(&self.world)
    }

    /// Banner adapters may greet players with.
    #[must_use]
    pub fn welcome_banner(&self) -> &'static str {
        query::welcome_banner(&self.world)
    }

    fn trim_journal(&mut self) {
        let excess = self.journal.len().saturating_sub(JOURNAL_CAPACITY);
        if excess > 0 {
            let _ = self.journal.drain(..excess);
        }
    }

    fn flush_commands(&mut self) {
        for command in self.commands.drain(..) {
            world::apply(&mut self.world, command, &mut self.journal);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
