#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Lawn Defence.
//!
//! The world owns the three live collections (plants, zombies and peas)
//! together with the sun balance, the score and the play state. Every
//! mutation goes through [`apply`], which makes the world the single writer
//! for all of them.

mod pipeline;
mod plants;

use lawn_defence_core::{
    CellCoord, Command, Event, LawnGrid, PeaId, PlacementError, PlantId, PlantKind, PlayState,
    Score, SpawnError, Sun, ZombieId, FIELD_FAR_BOUND, STARTING_SUN, SUN_PER_HARVEST,
    WELCOME_BANNER, ZOMBIE_MAX_HEALTH, ZOMBIE_POPULATION_CAP,
};
use tracing::{debug, info};

use self::pipeline::{Pea, Zombie};
use self::plants::PlantRegistry;

/// Represents the authoritative Lawn Defence world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    lawn: LawnGrid,
    plants: PlantRegistry,
    zombies: Vec<Zombie>,
    peas: Vec<Pea>,
    sun: Sun,
    score: Score,
    play_state: PlayState,
    next_zombie_id: ZombieId,
    next_pea_id: PeaId,
    tick_index: u64,
}

impl World {
    /// Creates a new Lawn Defence world ready for simulation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            banner: WELCOME_BANNER,
            lawn: LawnGrid::STANDARD,
            plants: PlantRegistry::new(),
            zombies: Vec::new(),
            peas: Vec::new(),
            sun: STARTING_SUN,
            score: Score::default(),
            play_state: PlayState::Running,
            next_zombie_id: ZombieId::new(0),
            next_pea_id: PeaId::new(0),
            tick_index: 0,
        }
    }

    fn reset(&mut self) {
        self.plants.clear();
        self.zombies.clear();
        self.peas.clear();
        self.sun = STARTING_SUN;
        self.score = Score::default();
        self.play_state = PlayState::Running;
        self.next_zombie_id = ZombieId::new(0);
        self.next_pea_id = PeaId::new(0);
        self.tick_index = 0;
    }

    fn place_plant(
        &mut self,
        kind: Option<PlantKind>,
        cell: CellCoord,
    ) -> Result<(PlantId, PlantKind), PlacementError> {
        if self.play_state.is_game_over() {
            return Err(PlacementError::GameOver);
        }
        let kind = kind.ok_or(PlacementError::NoKindSelected)?;
        if !self.lawn.contains(cell) {
            return Err(PlacementError::OutOfBounds);
        }
        if self.plants.occupant(cell).is_some() {
            return Err(PlacementError::CellOccupied);
        }
        let balance = self
            .sun
            .checked_sub(kind.cost())
            .ok_or(PlacementError::InsufficientSun)?;

        self.sun = balance;
        Ok((self.plants.insert(kind, cell), kind))
    }

    fn spawn_zombie(&mut self, row: u32) -> Result<ZombieId, SpawnError> {
        if self.play_state.is_game_over() {
            return Err(SpawnError::GameOver);
        }
        if self.zombies.len() >= ZOMBIE_POPULATION_CAP {
            return Err(SpawnError::PopulationCap);
        }
        if row >= self.lawn.rows() {
            return Err(SpawnError::InvalidLane);
        }

        let id = self.next_zombie_id;
        self.next_zombie_id = ZombieId::new(id.get().wrapping_add(1));
        self.zombies.push(Zombie {
            id,
            row,
            x: FIELD_FAR_BOUND,
            y: self.lawn.lane_center(row),
            health: ZOMBIE_MAX_HEALTH,
        });
        Ok(id)
    }

    fn fire_pea(&mut self, plant: PlantId, target: ZombieId) -> Option<(PeaId, u32)> {
        if self.play_state.is_game_over() {
            return None;
        }
        let shooter = self
            .plants
            .get(plant)
            .filter(|state| state.kind == PlantKind::Shooter)?;
        let target_row = self
            .zombies
            .iter()
            .find(|zombie| zombie.id == target)
            .map(|zombie| zombie.row)?;

        let origin = self.lawn.cell_origin(shooter.cell);
        let row = shooter.cell.row();
        let id = self.next_pea_id;
        self.next_pea_id = PeaId::new(id.get().wrapping_add(1));
        self.peas.push(Pea {
            id,
            row,
            target_row,
            x: origin.x() + self.lawn.cell_width(),
            y: self.lawn.lane_center(row),
        });
        Some((id, target_row))
    }

    fn produce_sun(&mut self, plant: PlantId) -> Option<Sun> {
        if self.play_state.is_game_over() {
            return None;
        }
        let _ = self
            .plants
            .get(plant)
            .filter(|state| state.kind == PlantKind::Generator)?;

        self.sun = self.sun.saturating_add(SUN_PER_HARVEST);
        Some(self.sun)
    }

    fn run_tick(&mut self, out_events: &mut Vec<Event>) {
        self.tick_index = self.tick_index.saturating_add(1);

        if let Some(zombie) = pipeline::advance_zombies(&mut self.zombies, out_events) {
            self.play_state = PlayState::GameOver;
            info!(
                zombie = zombie.get(),
                score = self.score.get(),
                tick = self.tick_index,
                "zombie reached the house"
            );
            out_events.push(Event::GameOver {
                zombie,
                score: self.score,
            });
            return;
        }

        pipeline::advance_peas(&mut self.peas, out_events);

        let kills = pipeline::resolve_collisions(&mut self.peas, &mut self.zombies, out_events);
        if kills > 0 {
            self.score = self.score.award_kills(kills);
            debug!(kills, score = self.score.get(), "zombies killed");
            out_events.push(Event::ScoreAwarded {
                kills,
                score: self.score,
            });
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => {
            if world.play_state.is_game_over() {
                return;
            }
            out_events.push(Event::TimeAdvanced { dt });
            world.run_tick(out_events);
        }
        Command::PlacePlant { kind, cell } => match world.place_plant(kind, cell) {
            Ok((plant, kind)) => {
                debug!(
                    plant = plant.get(),
                    ?kind,
                    column = cell.column(),
                    row = cell.row(),
                    balance = world.sun.get(),
                    "plant placed"
                );
                out_events.push(Event::PlantPlaced {
                    plant,
                    kind,
                    cell,
                    balance: world.sun,
                });
            }
            Err(reason) => {
                debug!(?kind, ?cell, %reason, "plant placement rejected");
                out_events.push(Event::PlantPlacementRejected { kind, cell, reason });
            }
        },
        Command::SpawnZombie { row } => match world.spawn_zombie(row) {
            Ok(zombie) => {
                debug!(zombie = zombie.get(), row, "zombie spawned");
                out_events.push(Event::ZombieSpawned { zombie, row });
            }
            Err(reason) => {
                out_events.push(Event::ZombieSpawnRejected { row, reason });
            }
        },
        Command::FirePea { plant, target } => {
            if let Some((pea, target_row)) = world.fire_pea(plant, target) {
                out_events.push(Event::PeaFired {
                    pea,
                    plant,
                    target_row,
                });
            }
        }
        Command::ProduceSun { plant } => {
            if let Some(balance) = world.produce_sun(plant) {
                out_events.push(Event::SunProduced { plant, balance });
            }
        }
        Command::Reset => {
            world.reset();
            info!("world reset");
            out_events.push(Event::GameReset);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use lawn_defence_core::{
        CellCoord, FieldPoint, LawnGrid, PeaSnapshot, PeaView, PlantId, PlantSnapshot, PlantView,
        PlayState, Score, Sun, ZombieSnapshot, ZombieView,
    };

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the lawn layout.
    #[must_use]
    pub fn lawn(world: &World) -> &LawnGrid {
        &world.lawn
    }

    /// Reports whether the game is running or over.
    #[must_use]
    pub fn play_state(world: &World) -> PlayState {
        world.play_state
    }

    /// Current sun balance.
    #[must_use]
    pub fn sun(world: &World) -> Sun {
        world.sun
    }

    /// Current score.
    #[must_use]
    pub fn score(world: &World) -> Score {
        world.score
    }

    /// Number of ticks executed since the world was created or reset.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Returns the plant occupying the provided cell, if any.
    #[must_use]
    pub fn plant_at(world: &World, cell: CellCoord) -> Option<PlantId> {
        world.plants.occupant(cell)
    }

    /// Number of zombies currently on the field.
    #[must_use]
    pub fn zombie_count(world: &World) -> usize {
        world.zombies.len()
    }

    /// Captures a read-only view of the plants on the lawn.
    #[must_use]
    pub fn plant_view(world: &World) -> PlantView {
        let mut snapshots = Vec::with_capacity(world.plants.len());
        snapshots.extend(world.plants.iter().map(|plant| PlantSnapshot {
            id: plant.id,
            kind: plant.kind,
            cell: plant.cell,
            origin: world.lawn.cell_origin(plant.cell),
        }));
        PlantView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of the zombies on the field.
    #[must_use]
    pub fn zombie_view(world: &World) -> ZombieView {
        let snapshots = world
            .zombies
            .iter()
            .map(|zombie| ZombieSnapshot {
                id: zombie.id,
                row: zombie.row,
                position: FieldPoint::new(zombie.x, zombie.y),
                health: zombie.health,
            })
            .collect();
        ZombieView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of the peas in flight.
    #[must_use]
    pub fn pea_view(world: &World) -> PeaView {
        let snapshots = world
            .peas
            .iter()
            .map(|pea| PeaSnapshot {
                id: pea.id,
                row: pea.row,
                target_row: pea.target_row,
                position: FieldPoint::new(pea.x, pea.y),
            })
            .collect();
        PeaView::from_snapshots(snapshots)
    }
}
