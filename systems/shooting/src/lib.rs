#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that pairs shooter plants with the zombies ahead of them.

use lawn_defence_core::{
    Command, LawnGrid, PlantId, PlantKind, PlantView, PlayState, ZombieView, LANE_TOLERANCE,
};

/// Shooting system that reuses scratch buffers to avoid repeated allocations.
#[derive(Debug, Default)]
pub struct Shooting {
    shooter_workspace: Vec<ShooterWorkspace>,
}

impl Shooting {
    /// Creates a new shooting system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits one `FirePea` command for every shooter and zombie pair where
    /// the zombie walks in the shooter's lane and is still ahead of it.
    ///
    /// Shooters are visited in identifier order and, for each shooter,
    /// zombies in identifier order.
    pub fn handle(
        &mut self,
        play_state: PlayState,
        plants: &PlantView,
        zombies: &ZombieView,
        lawn: &LawnGrid,
        out: &mut Vec<Command>,
    ) {
        if play_state.is_game_over() || zombies.is_empty() {
            return;
        }

        self.prepare_shooter_workspace(plants, lawn);

        for shooter in &self.shooter_workspace {
            for zombie in zombies.iter() {
                let in_lane = (shooter.lane_center - zombie.position.y()).abs() < LANE_TOLERANCE;
                if in_lane && zombie.position.x() > shooter.x {
                    out.push(Command::FirePea {
                        plant: shooter.id,
                        target: zombie.id,
                    });
                }
            }
        }
    }

    fn prepare_shooter_workspace(&mut self, plants: &PlantView, lawn: &LawnGrid) {
        self.shooter_workspace.clear();
        self.shooter_workspace.reserve(plants.len());

        for snapshot in plants.iter() {
            if snapshot.kind != PlantKind::Shooter {
                continue;
            }

            self.shooter_workspace.push(ShooterWorkspace {
                id: snapshot.id,
                x: snapshot.origin.x(),
                lane_center: lawn.lane_center(snapshot.cell.row()),
            });
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ShooterWorkspace {
    id: PlantId,
    x: i32,
    lane_center: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawn_defence_core::{CellCoord, FieldPoint, PlantSnapshot, ZombieId, ZombieSnapshot};

    fn shooter(id: u32, column: u32, row: u32) -> PlantSnapshot {
        let cell = CellCoord::new(column, row);
        PlantSnapshot {
            id: PlantId::new(id),
            kind: PlantKind::Shooter,
            cell,
            origin: LawnGrid::STANDARD.cell_origin(cell),
        }
    }

    fn zombie(id: u32, row: u32, x: i32) -> ZombieSnapshot {
        ZombieSnapshot {
            id: ZombieId::new(id),
            row,
            position: FieldPoint::new(x, LawnGrid::STANDARD.lane_center(row)),
            health: 100,
        }
    }

    #[test]
    fn fires_once_per_shooter_and_zombie_pair() {
        let plants = PlantView::from_snapshots(vec![shooter(0, 0, 1), shooter(1, 3, 1)]);
        let zombies = ZombieView::from_snapshots(vec![zombie(0, 1, 700), zombie(1, 1, 500)]);
        let mut shooting = Shooting::new();
        let mut out = Vec::new();

        shooting.handle(
            PlayState::Running,
            &plants,
            &zombies,
            &LawnGrid::STANDARD,
            &mut out,
        );

        assert_eq!(out.len(), 4);
        assert_eq!(
            out[0],
            Command::FirePea {
                plant: PlantId::new(0),
                target: ZombieId::new(0),
            }
        );
    }

    #[test]
    fn ignores_zombies_in_other_lanes_and_behind_the_shooter() {
        let plants = PlantView::from_snapshots(vec![shooter(0, 4, 2)]);
        let zombies = ZombieView::from_snapshots(vec![
            zombie(0, 1, 700),
            zombie(1, 3, 700),
            zombie(2, 2, 320),
            zombie(3, 2, 100),
            zombie(4, 2, 321),
        ]);
        let mut shooting = Shooting::new();
        let mut out = Vec::new();

        shooting.handle(
            PlayState::Running,
            &plants,
            &zombies,
            &LawnGrid::STANDARD,
            &mut out,
        );

        assert_eq!(
            out,
            vec![Command::FirePea {
                plant: PlantId::new(0),
                target: ZombieId::new(4),
            }]
        );
    }

    #[test]
    fn game_over_silences_every_shooter() {
        let plants = PlantView::from_snapshots(vec![shooter(0, 0, 0)]);
        let zombies = ZombieView::from_snapshots(vec![zombie(0, 0, 700)]);
        let mut shooting = Shooting::new();
        let mut out = Vec::new();

        shooting.handle(
            PlayState::GameOver,
            &plants,
            &zombies,
            &LawnGrid::STANDARD,
            &mut out,
        );

        assert!(out.is_empty());
    }
}
