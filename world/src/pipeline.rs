//! Movement and collision stages executed by every tick.
//!
//! Each stage reads the collections as they were when the stage started and
//! commits its removals once the whole pass is done, so the order of records
//! inside a collection never changes the outcome of a pass.

use lawn_defence_core::{
    Event, PeaId, ZombieId, FIELD_FAR_BOUND, HIT_REACH_X, HIT_REACH_Y, HOUSE_BOUND, PEA_DAMAGE,
    PEA_STEP, ZOMBIE_PRUNE_BOUND, ZOMBIE_STEP,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Zombie {
    pub(crate) id: ZombieId,
    pub(crate) row: u32,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) health: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pea {
    pub(crate) id: PeaId,
    pub(crate) row: u32,
    pub(crate) target_row: u32,
    pub(crate) x: i32,
    pub(crate) y: i32,
}

/// Walks every zombie towards the house and discards the ones far past it.
///
/// Returns the first zombie found beyond the house boundary. The check runs
/// before pruning, so a zombie is reported even if it is discarded in the same
/// pass.
pub(crate) fn advance_zombies(
    zombies: &mut Vec<Zombie>,
    out_events: &mut Vec<Event>,
) -> Option<ZombieId> {
    for zombie in zombies.iter_mut() {
        zombie.x -= ZOMBIE_STEP;
    }

    let breach = zombies
        .iter()
        .find(|zombie| zombie.x < HOUSE_BOUND)
        .map(|zombie| zombie.id);

    zombies.retain(|zombie| {
        let keep = zombie.x > ZOMBIE_PRUNE_BOUND;
        if !keep {
            out_events.push(Event::ZombieDespawned { zombie: zombie.id });
        }
        keep
    });

    breach
}

/// Moves every pea away from the house and discards the ones leaving the field.
pub(crate) fn advance_peas(peas: &mut Vec<Pea>, out_events: &mut Vec<Event>) {
    for pea in peas.iter_mut() {
        pea.x += PEA_STEP;
    }

    peas.retain(|pea| {
        let keep = pea.x < FIELD_FAR_BOUND;
        if !keep {
            out_events.push(Event::PeaExpired { pea: pea.id });
        }
        keep
    });
}

/// Resolves pea hits and removes the zombies that ran out of health.
///
/// Every pea strikes at most one zombie: the first one, in store order, that
/// lies within reach on both axes. Zombies dropping to zero health stay
/// targetable until the whole pass is done. Returns the number of zombies
/// killed.
pub(crate) fn resolve_collisions(
    peas: &mut Vec<Pea>,
    zombies: &mut Vec<Zombie>,
    out_events: &mut Vec<Event>,
) -> u32 {
    if peas.is_empty() || zombies.is_empty() {
        return 0;
    }

    let mut health: Vec<i32> = zombies.iter().map(|zombie| zombie.health).collect();
    let mut consumed = vec![false; peas.len()];

    for (pea_index, pea) in peas.iter().enumerate() {
        let target = zombies
            .iter()
            .enumerate()
            .find(|(_, zombie)| within_reach(pea, zombie));

        if let Some((index, zombie)) = target {
            health[index] -= PEA_DAMAGE;
            consumed[pea_index] = true;
            out_events.push(Event::ZombieHit {
                zombie: zombie.id,
                pea: pea.id,
                health: health[index],
            });
        }
    }

    let mut pea_index = 0;
    peas.retain(|_| {
        let keep = !consumed[pea_index];
        pea_index += 1;
        keep
    });

    for (zombie, remaining) in zombies.iter_mut().zip(health) {
        zombie.health = remaining;
    }

    let mut kills = 0;
    zombies.retain(|zombie| {
        if zombie.health > 0 {
            return true;
        }
        kills += 1;
        out_events.push(Event::ZombieKilled { zombie: zombie.id });
        false
    });

    kills
}

fn within_reach(pea: &Pea, zombie: &Zombie) -> bool {
    (pea.x - zombie.x).abs() < HIT_REACH_X && (pea.y - zombie.y).abs() < HIT_REACH_Y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zombie(id: u32, x: i32, y: i32, health: i32) -> Zombie {
        Zombie {
            id: ZombieId::new(id),
            row: 0,
            x,
            y,
            health,
        }
    }

    fn pea(id: u32, x: i32, y: i32) -> Pea {
        Pea {
            id: PeaId::new(id),
            row: 0,
            target_row: 0,
            x,
            y,
        }
    }

    #[test]
    fn zombies_step_one_unit_towards_the_house() {
        let mut zombies = vec![zombie(0, 800, 50, 100), zombie(1, 10, 150, 100)];
        let mut events = Vec::new();

        let breach = advance_zombies(&mut zombies, &mut events);

        assert_eq!(breach, None);
        assert_eq!(zombies[0].x, 799);
        assert_eq!(zombies[1].x, 9);
        assert!(events.is_empty());
    }

    #[test]
    fn crossing_the_house_boundary_is_reported() {
        let mut zombies = vec![zombie(3, 1, 50, 100), zombie(4, 0, 150, 100)];
        let mut events = Vec::new();

        let breach = advance_zombies(&mut zombies, &mut events);

        assert_eq!(breach, Some(ZombieId::new(4)));
        assert_eq!(zombies.len(), 2);
    }

    #[test]
    fn breach_is_detected_before_pruning() {
        let mut zombies = vec![zombie(7, -49, 50, 100)];
        let mut events = Vec::new();

        let breach = advance_zombies(&mut zombies, &mut events);

        assert_eq!(breach, Some(ZombieId::new(7)));
        assert!(zombies.is_empty());
        assert_eq!(
            events,
            vec![Event::ZombieDespawned {
                zombie: ZombieId::new(7)
            }]
        );
    }

    #[test]
    fn peas_leaving_the_field_expire() {
        let mut peas = vec![pea(0, 790, 50), pea(1, 794, 50), pea(2, 795, 50)];
        let mut events = Vec::new();

        advance_peas(&mut peas, &mut events);

        assert_eq!(peas.iter().map(|pea| pea.x).collect::<Vec<_>>(), vec![795, 799]);
        assert_eq!(events, vec![Event::PeaExpired { pea: PeaId::new(2) }]);
    }

    #[test]
    fn reach_is_exclusive_on_both_axes() {
        let target = zombie(0, 500, 250, 100);

        assert!(within_reach(&pea(0, 471, 250), &target));
        assert!(!within_reach(&pea(1, 470, 250), &target));
        assert!(within_reach(&pea(2, 500, 279), &target));
        assert!(!within_reach(&pea(3, 500, 280), &target));
    }

    #[test]
    fn each_pea_hits_only_the_first_zombie_in_reach() {
        let mut zombies = vec![zombie(0, 500, 250, 100), zombie(1, 505, 250, 100)];
        let mut peas = vec![pea(9, 498, 250)];
        let mut events = Vec::new();

        let kills = resolve_collisions(&mut peas, &mut zombies, &mut events);

        assert_eq!(kills, 0);
        assert!(peas.is_empty());
        assert_eq!(zombies[0].health, 80);
        assert_eq!(zombies[1].health, 100);
        assert_eq!(
            events,
            vec![Event::ZombieHit {
                zombie: ZombieId::new(0),
                pea: PeaId::new(9),
                health: 80,
            }]
        );
    }

    #[test]
    fn zombies_killed_within_a_pass_keep_absorbing_peas() {
        let mut zombies = vec![zombie(0, 500, 250, 20), zombie(1, 505, 250, 100)];
        let mut peas = vec![pea(0, 498, 250), pea(1, 499, 250)];
        let mut events = Vec::new();

        let kills = resolve_collisions(&mut peas, &mut zombies, &mut events);

        assert_eq!(kills, 1);
        assert!(peas.is_empty());
        assert_eq!(zombies.len(), 1);
        assert_eq!(zombies[0].id, ZombieId::new(1));
        assert_eq!(zombies[0].health, 100, "the rear zombie is shielded");
        assert_eq!(
            events,
            vec![
                Event::ZombieHit {
                    zombie: ZombieId::new(0),
                    pea: PeaId::new(0),
                    health: 0,
                },
                Event::ZombieHit {
                    zombie: ZombieId::new(0),
                    pea: PeaId::new(1),
                    health: -20,
                },
                Event::ZombieKilled {
                    zombie: ZombieId::new(0)
                },
            ]
        );
    }

    #[test]
    fn peas_out_of_reach_keep_flying() {
        let mut zombies = vec![zombie(0, 500, 250, 100)];
        let mut peas = vec![pea(0, 300, 250), pea(1, 500, 350)];
        let mut events = Vec::new();

        let kills = resolve_collisions(&mut peas, &mut zombies, &mut events);

        assert_eq!(kills, 0);
        assert_eq!(peas.len(), 2);
        assert_eq!(zombies[0].health, 100);
        assert!(events.is_empty());
    }
}
