#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Lawn Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and the simulation driver
//! submit [`Command`] values describing desired mutations, the world executes
//! those commands via its `apply` entry point, and then broadcasts [`Event`]
//! values describing what changed. Systems read immutable views such as
//! [`PlantView`] and [`ZombieView`] and respond exclusively with new command
//! batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Lawn Defence.";

/// Number of plantable columns on the lawn.
pub const LAWN_COLUMNS: u32 = 9;
/// Number of lanes on the lawn.
pub const LAWN_ROWS: u32 = 5;
/// Width of a single lawn cell measured in world units.
pub const CELL_WIDTH: i32 = 80;
/// Height of a single lawn cell measured in world units.
pub const CELL_HEIGHT: i32 = 100;

/// Sun balance granted when a game starts or is reset.
pub const STARTING_SUN: Sun = Sun::new(100);
/// Sun granted by a generator each time its production roll succeeds.
pub const SUN_PER_HARVEST: Sun = Sun::new(25);
/// Per-tick probability that a generator produces sun.
pub const SUN_HARVEST_CHANCE: f64 = 0.02;

/// Simulated time between two runs of the update pipeline.
pub const TICK_PERIOD: Duration = Duration::from_millis(50);
/// Simulated time between two zombie spawn attempts.
pub const SPAWN_PERIOD: Duration = Duration::from_millis(2_000);

/// Distance a zombie walks towards the house every tick.
pub const ZOMBIE_STEP: i32 = 1;
/// Distance a pea flies away from the house every tick.
pub const PEA_STEP: i32 = 5;
/// Health every zombie starts with.
pub const ZOMBIE_MAX_HEALTH: i32 = 100;
/// Health removed from a zombie by a single pea hit.
pub const PEA_DAMAGE: i32 = 20;
/// Maximum number of zombies alive at the same time.
pub const ZOMBIE_POPULATION_CAP: usize = 10;
/// Score awarded for every zombie killed.
pub const KILL_SCORE: u32 = 10;

/// Horizontal coordinate where zombies enter and peas leave the field.
pub const FIELD_FAR_BOUND: i32 = 800;
/// A zombie left of this coordinate has reached the house.
pub const HOUSE_BOUND: i32 = 0;
/// Zombies at or beyond this coordinate are discarded.
pub const ZOMBIE_PRUNE_BOUND: i32 = -50;
/// Maximum horizontal distance (exclusive) at which a pea hits a zombie.
pub const HIT_REACH_X: i32 = 30;
/// Maximum vertical distance (exclusive) at which a pea hits a zombie.
pub const HIT_REACH_Y: i32 = 30;
/// Maximum vertical distance (exclusive) between a shooter's lane and a zombie it fires at.
pub const LANE_TOLERANCE: i32 = 50;

/// Describes whether the simulation still accepts mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayState {
    /// The game is in progress; ticks, spawns and placements mutate the world.
    Running,
    /// A zombie reached the house. Everything except reset is a no-op.
    GameOver,
}

impl PlayState {
    /// Reports whether the game has reached its terminal state.
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Runs the movement and collision stages of the update pipeline once.
    Tick {
        /// Duration of simulated time represented by the tick.
        dt: Duration,
    },
    /// Requests placement of a plant on the provided lawn cell.
    PlacePlant {
        /// Kind of plant to construct, `None` when the player has nothing selected.
        kind: Option<PlantKind>,
        /// Cell the plant should occupy.
        cell: CellCoord,
    },
    /// Requests that a zombie enters the field in the provided lane.
    SpawnZombie {
        /// Zero-based lane index the zombie walks along.
        row: u32,
    },
    /// Requests that a shooter launches a pea at a zombie ahead of it.
    FirePea {
        /// Shooter plant launching the pea.
        plant: PlantId,
        /// Zombie the pea is aimed at.
        target: ZombieId,
    },
    /// Requests that a generator adds its harvest to the sun balance.
    ProduceSun {
        /// Generator plant producing the sun.
        plant: PlantId,
    },
    /// Returns the world to its initial state.
    Reset,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// Indicates that the simulation clock advanced while the game was running.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a plant was placed on the lawn.
    PlantPlaced {
        /// Identifier assigned to the plant by the world.
        plant: PlantId,
        /// Kind of plant that was placed.
        kind: PlantKind,
        /// Cell occupied by the plant.
        cell: CellCoord,
        /// Sun balance remaining after paying for the plant.
        balance: Sun,
    },
    /// Reports that a placement request was rejected.
    PlantPlacementRejected {
        /// Kind of plant requested, if any.
        kind: Option<PlantKind>,
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Confirms that a zombie entered the field.
    ZombieSpawned {
        /// Identifier assigned to the zombie.
        zombie: ZombieId,
        /// Lane the zombie walks along.
        row: u32,
    },
    /// Reports that a spawn request was ignored.
    ZombieSpawnRejected {
        /// Lane provided in the spawn request.
        row: u32,
        /// Specific reason the spawn failed.
        reason: SpawnError,
    },
    /// Confirms that a shooter launched a pea.
    PeaFired {
        /// Identifier assigned to the pea.
        pea: PeaId,
        /// Shooter that launched the pea.
        plant: PlantId,
        /// Lane of the zombie the pea was aimed at.
        target_row: u32,
    },
    /// Reports that a pea left the field without hitting anything.
    PeaExpired {
        /// Identifier of the pea that expired.
        pea: PeaId,
    },
    /// Reports that a pea struck a zombie.
    ZombieHit {
        /// Zombie that took damage.
        zombie: ZombieId,
        /// Pea consumed by the hit.
        pea: PeaId,
        /// Health left after the hit; zero or below means the zombie dies this tick.
        health: i32,
    },
    /// Reports that a zombie ran out of health and was removed.
    ZombieKilled {
        /// Identifier of the zombie that was killed.
        zombie: ZombieId,
    },
    /// Reports that a zombie walked far past the house and was discarded.
    ZombieDespawned {
        /// Identifier of the zombie that was discarded.
        zombie: ZombieId,
    },
    /// Reports that kills during a tick increased the score.
    ScoreAwarded {
        /// Number of zombies killed during the tick.
        kills: u32,
        /// Score after the award.
        score: Score,
    },
    /// Reports that a generator produced sun.
    SunProduced {
        /// Generator that produced the sun.
        plant: PlantId,
        /// Sun balance after the harvest.
        balance: Sun,
    },
    /// Announces that a zombie reached the house and the game ended.
    GameOver {
        /// Zombie that crossed the house boundary first.
        zombie: ZombieId,
        /// Final score of the game.
        score: Score,
    },
    /// Confirms that the world returned to its initial state.
    GameReset,
}

/// Types of plants that can be placed on the lawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlantKind {
    /// Sunflower-like plant that periodically produces sun.
    Generator,
    /// Peashooter-like plant that fires at zombies in its lane.
    Shooter,
}

impl PlantKind {
    /// Every plant kind, in the order shown to the player.
    pub const ALL: [PlantKind; 2] = [PlantKind::Generator, PlantKind::Shooter];

    /// Sun required to place the plant.
    ///
    /// Generators cost 50 and shooters cost 100.
    #[must_use]
    pub const fn cost(self) -> Sun {
        match self {
            Self::Generator => Sun::new(50),
            Self::Shooter => Sun::new(100),
        }
    }

    /// Human readable label used by adapters.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generator => "Sunflower",
            Self::Shooter => "Peashooter",
        }
    }
}

/// Spendable resource gating plant placement.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Sun(u32);

impl Sun {
    /// Wraps the provided amount of sun.
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Retrieves the numeric amount of sun.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Subtracts `cost`, returning `None` when the balance cannot cover it.
    #[must_use]
    pub const fn checked_sub(self, cost: Sun) -> Option<Sun> {
        match self.0.checked_sub(cost.0) {
            Some(amount) => Some(Self(amount)),
            None => None,
        }
    }

    /// Adds `income`, clamping at the numeric limit.
    #[must_use]
    pub const fn saturating_add(self, income: Sun) -> Sun {
        Self(self.0.saturating_add(income.0))
    }
}

/// Running score accumulated by killing zombies.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Score(u32);

impl Score {
    /// Wraps the provided score value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric score.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Adds the reward for `kills` zombies.
    #[must_use]
    pub const fn award_kills(self, kills: u32) -> Score {
        Self(self.0.saturating_add(kills.saturating_mul(KILL_SCORE)))
    }
}

/// Unique identifier assigned to a plant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(u32);

impl PlantId {
    /// Creates a new plant identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a zombie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZombieId(u32);

impl ZombieId {
    /// Creates a new zombie identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a pea.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeaId(u32);

impl PeaId {
    /// Creates a new pea identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Location of a single lawn cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new lawn cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row (lane) index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Point on the playing field expressed in integer world units.
///
/// `x` grows away from the house towards the zombies' entry edge and `y`
/// grows downwards across the lanes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPoint {
    x: i32,
    y: i32,
}

impl FieldPoint {
    /// Creates a new field point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
}

/// Describes the discrete cell layout of the lawn and maps cells to world units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LawnGrid {
    columns: u32,
    rows: u32,
    cell_width: i32,
    cell_height: i32,
}

impl LawnGrid {
    /// The fixed 9x5 lawn of 80x100 cells.
    pub const STANDARD: LawnGrid = LawnGrid::new(LAWN_COLUMNS, LAWN_ROWS, CELL_WIDTH, CELL_HEIGHT);

    /// Creates a new lawn grid description.
    #[must_use]
    pub const fn new(columns: u32, rows: u32, cell_width: i32, cell_height: i32) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
        }
    }

    /// Number of columns contained in the lawn.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of lanes contained in the lawn.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Width of a cell in world units.
    #[must_use]
    pub const fn cell_width(&self) -> i32 {
        self.cell_width
    }

    /// Height of a cell in world units.
    #[must_use]
    pub const fn cell_height(&self) -> i32 {
        self.cell_height
    }

    /// Total width of the lawn measured in world units.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.columns as i32 * self.cell_width
    }

    /// Total height of the lawn measured in world units.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.rows as i32 * self.cell_height
    }

    /// Reports whether the cell lies on the lawn.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Upper-left corner of the cell in world units.
    #[must_use]
    pub const fn cell_origin(&self, cell: CellCoord) -> FieldPoint {
        FieldPoint::new(
            cell.column() as i32 * self.cell_width,
            cell.row() as i32 * self.cell_height,
        )
    }

    /// Vertical coordinate of the middle of a lane.
    #[must_use]
    pub const fn lane_center(&self, row: u32) -> i32 {
        row as i32 * self.cell_height + self.cell_height / 2
    }

    /// Translates a point in world units into the lawn cell containing it.
    ///
    /// Points left of or above the lawn, or beyond its far edges, have no cell.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellCoord> {
        if self.cell_width <= 0 || self.cell_height <= 0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let column = (x / self.cell_width as f32).floor() as u32;
        let row = (y / self.cell_height as f32).floor() as u32;
        let cell = CellCoord::new(column, row);
        self.contains(cell).then_some(cell)
    }
}

/// Reasons a plant placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PlacementError {
    /// The game is over, so the lawn no longer accepts plants.
    #[error("the game is over")]
    GameOver,
    /// No plant kind was selected.
    #[error("no plant selected")]
    NoKindSelected,
    /// The requested cell lies outside the lawn.
    #[error("cell lies outside the lawn")]
    OutOfBounds,
    /// Another plant already occupies the requested cell.
    #[error("cell is already occupied")]
    CellOccupied,
    /// The sun balance cannot cover the plant's cost.
    #[error("not enough sun")]
    InsufficientSun,
}

/// Reasons a zombie spawn request may be ignored by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum SpawnError {
    /// The game is over, so no more zombies enter the field.
    #[error("the game is over")]
    GameOver,
    /// The field already holds the maximum number of zombies.
    #[error("zombie population cap reached")]
    PopulationCap,
    /// The requested lane does not exist.
    #[error("lane does not exist")]
    InvalidLane,
}

/// Immutable representation of a single plant used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlantSnapshot {
    /// Identifier allocated to the plant by the world.
    pub id: PlantId,
    /// Kind of plant.
    pub kind: PlantKind,
    /// Cell occupied by the plant.
    pub cell: CellCoord,
    /// Upper-left corner of the plant's cell in world units.
    pub origin: FieldPoint,
}

/// Immutable representation of a single zombie used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ZombieSnapshot {
    /// Identifier allocated to the zombie by the world.
    pub id: ZombieId,
    /// Lane the zombie walks along.
    pub row: u32,
    /// Centre of the zombie in world units.
    pub position: FieldPoint,
    /// Remaining health.
    pub health: i32,
}

/// Immutable representation of a single pea used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PeaSnapshot {
    /// Identifier allocated to the pea by the world.
    pub id: PeaId,
    /// Lane the pea flies along.
    pub row: u32,
    /// Lane of the zombie the pea was aimed at.
    pub target_row: u32,
    /// Centre of the pea in world units.
    pub position: FieldPoint,
}

/// Read-only snapshot describing all plants on the lawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlantView {
    snapshots: Vec<PlantSnapshot>,
}

impl PlantView {
    /// Creates a new plant view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<PlantSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured plant snapshots in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &PlantSnapshot> {
        self.snapshots.iter()
    }

    /// Number of plants captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<PlantSnapshot> {
        self.snapshots
    }
}

/// Read-only snapshot describing all zombies on the field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZombieView {
    snapshots: Vec<ZombieSnapshot>,
}

impl ZombieView {
    /// Creates a new zombie view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ZombieSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured zombie snapshots in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &ZombieSnapshot> {
        self.snapshots.iter()
    }

    /// Number of zombies captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ZombieSnapshot> {
        self.snapshots
    }
}

/// Read-only snapshot describing all peas in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeaView {
    snapshots: Vec<PeaSnapshot>,
}

impl PeaView {
    /// Creates a new pea view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<PeaSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured pea snapshots in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &PeaSnapshot> {
        self.snapshots.iter()
    }

    /// Number of peas captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<PeaSnapshot> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CellCoord, FieldPoint, LawnGrid, PlacementError, PlantKind, Score, SpawnError, Sun,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn plant_costs_match_the_rules() {
        assert_eq!(PlantKind::Generator.cost(), Sun::new(50));
        assert_eq!(PlantKind::Shooter.cost(), Sun::new(100));
    }

    #[test]
    fn sun_subtraction_refuses_to_overdraw() {
        assert_eq!(Sun::new(50).checked_sub(Sun::new(100)), None);
        assert_eq!(Sun::new(150).checked_sub(Sun::new(100)), Some(Sun::new(50)));
    }

    #[test]
    fn score_awards_ten_points_per_kill() {
        assert_eq!(Score::default().award_kills(3), Score::new(30));
        assert_eq!(Score::new(u32::MAX).award_kills(1), Score::new(u32::MAX));
    }

    #[test]
    fn standard_lawn_maps_cells_to_world_units() {
        let lawn = LawnGrid::STANDARD;
        assert_eq!(lawn.width(), 720);
        assert_eq!(lawn.height(), 500);
        assert_eq!(lawn.cell_origin(CellCoord::new(3, 2)), FieldPoint::new(240, 200));
        assert_eq!(lawn.lane_center(2), 250);
    }

    #[test]
    fn cell_at_floors_world_coordinates() {
        let lawn = LawnGrid::STANDARD;
        assert_eq!(lawn.cell_at(0.0, 0.0), Some(CellCoord::new(0, 0)));
        assert_eq!(lawn.cell_at(159.9, 99.9), Some(CellCoord::new(1, 0)));
        assert_eq!(lawn.cell_at(719.0, 499.0), Some(CellCoord::new(8, 4)));
    }

    #[test]
    fn cell_at_rejects_points_off_the_lawn() {
        let lawn = LawnGrid::STANDARD;
        assert_eq!(lawn.cell_at(-1.0, 10.0), None);
        assert_eq!(lawn.cell_at(10.0, 500.0), None);
        assert_eq!(lawn.cell_at(720.0, 10.0), None);
        assert_eq!(lawn.cell_at(f32::NAN, 10.0), None);
    }

    #[test]
    fn rejection_reasons_round_trip_through_bincode() {
        assert_round_trip(&PlacementError::InsufficientSun);
        assert_round_trip(&SpawnError::PopulationCap);
    }

    #[test]
    fn rejection_reasons_render_readable_messages() {
        assert_eq!(PlacementError::CellOccupied.to_string(), "cell is already occupied");
        assert_eq!(SpawnError::GameOver.to_string(), "the game is over");
    }
}
