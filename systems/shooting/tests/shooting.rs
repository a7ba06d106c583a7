use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use lawn_defence_core::{CellCoord, Command, Event, PlantKind, Score, ZombieId, TICK_PERIOD};
use lawn_defence_system_shooting::Shooting;
use lawn_defence_world::{self as world, query, World};

#[test]
fn lone_shooter_kills_an_approaching_zombie_after_five_hits() {
    let outcome = replay(scripted_commands(), 130);

    let hits: Vec<_> = outcome
        .events
        .iter()
        .filter_map(|(tick, event)| match event {
            Event::ZombieHit { health, .. } => Some((*tick, *health)),
            _ => None,
        })
        .collect();
    assert_eq!(
        hits,
        vec![(116, 80), (117, 60), (118, 40), (119, 20), (120, 0)],
        "zombie health must drop by exactly 20 per hit"
    );

    let killed_on = outcome.events.iter().find_map(|(tick, event)| match event {
        Event::ZombieKilled { zombie } => Some((*tick, *zombie)),
        _ => None,
    });
    assert_eq!(killed_on, Some((120, ZombieId::new(0))));
    assert!(outcome.events.contains(&(
        120,
        Event::ScoreAwarded {
            kills: 1,
            score: Score::new(10),
        }
    )));

    let fired = outcome
        .events
        .iter()
        .filter(|(_, event)| matches!(event, Event::PeaFired { .. }))
        .count();
    assert_eq!(fired, 119, "one pea per tick while the zombie is ahead");
}

#[test]
fn deterministic_replay_produces_identical_sequence() {
    let first = replay(scripted_commands(), 60);
    let second = replay(scripted_commands(), 60);

    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(first.fingerprint(), second.fingerprint());
}

fn scripted_commands() -> Vec<Command> {
    vec![
        Command::PlacePlant {
            kind: Some(PlantKind::Shooter),
            cell: CellCoord::new(0, 2),
        },
        Command::SpawnZombie { row: 2 },
    ]
}

fn replay(setup: Vec<Command>, ticks: u64) -> ReplayOutcome {
    let mut world = World::new();
    let mut shooting = Shooting::new();
    let mut events = Vec::new();

    for command in setup {
        let mut generated = Vec::new();
        world::apply(&mut world, command, &mut generated);
        events.extend(generated.into_iter().map(|event| (0, event)));
    }

    for tick in 1..=ticks {
        let mut generated = Vec::new();
        world::apply(&mut world, Command::Tick { dt: TICK_PERIOD }, &mut generated);

        let mut commands = Vec::new();
        shooting.handle(
            query::play_state(&world),
            &query::plant_view(&world),
            &query::zombie_view(&world),
            query::lawn(&world),
            &mut commands,
        );
        for command in commands {
            world::apply(&mut world, command, &mut generated);
        }

        events.extend(generated.into_iter().map(|event| (tick, event)));
    }

    ReplayOutcome {
        events,
        score: query::score(&world),
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct ReplayOutcome {
    events: Vec<(u64, Event)>,
    score: Score,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
