//! Windowless runner that plays a placement plan for a fixed number of ticks.

use std::fmt;

use anyhow::{ensure, Result};
use lawn_defence_core::{Event, PlacementError, Score, Sun};
use lawn_defence_simulation::{Config, Simulation};
use tracing::{debug, info};

use crate::plan_transfer::{PlacementPlan, PlannedPlacement};

/// Outcome of a headless run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) ticks_run: u64,
    pub(crate) spawn_attempts: u64,
    pub(crate) score: Score,
    pub(crate) sun: Sun,
    pub(crate) plants: usize,
    pub(crate) zombies: usize,
    pub(crate) peas: usize,
    pub(crate) kills: u64,
    pub(crate) game_over_at: Option<u64>,
    pub(crate) applied: PlacementPlan,
    pub(crate) rejected: Vec<(PlannedPlacement, PlacementError)>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Headless run finished.")?;
        writeln!(f, "  Ticks run:      {}", self.ticks_run)?;
        writeln!(f, "  Spawn attempts: {}", self.spawn_attempts)?;
        writeln!(f, "  Score:          {}", self.score.get())?;
        writeln!(f, "  Sun:            {}", self.sun.get())?;
        writeln!(f, "  Kills:          {}", self.kills)?;
        writeln!(
            f,
            "  Live entities:  {} plants, {} zombies, {} peas",
            self.plants, self.zombies, self.peas
        )?;
        writeln!(
            f,
            "  Placements:     {} applied, {} rejected",
            self.applied.placements.len(),
            self.rejected.len()
        )?;
        for (placement, reason) in &self.rejected {
            writeln!(
                f,
                "    tick {} {} at ({}, {}): {reason}",
                placement.tick,
                placement.kind.label(),
                placement.column,
                placement.row
            )?;
        }
        match self.game_over_at {
            Some(tick) => write!(f, "  Game over:      yes, on tick {tick}"),
            None => write!(f, "  Game over:      no"),
        }
    }
}

/// Runs `ticks` ticks of simulated time, attempting every planned placement
/// once the matching number of ticks has elapsed.
pub(crate) fn run(config: Config, ticks: u64, plan: &PlacementPlan) -> Result<Summary> {
    ensure!(
        !config.tick_period().is_zero(),
        "headless runs need a positive tick period"
    );

    let mut schedule = plan.placements.clone();
    schedule.sort_by_key(|placement| placement.tick);
    let mut pending = schedule.into_iter().peekable();

    let mut simulation = Simulation::new(config);
    let mut summary = Summary {
        ticks_run: 0,
        spawn_attempts: 0,
        score: simulation.score(),
        sun: simulation.sun(),
        plants: 0,
        zombies: 0,
        peas: 0,
        kills: 0,
        game_over_at: None,
        applied: PlacementPlan::default(),
        rejected: Vec::new(),
    };

    for step in 0..ticks {
        while let Some(placement) = pending.next_if(|placement| placement.tick <= step) {
            match simulation.place_plant(placement.cell(), Some(placement.kind)) {
                Ok(plant) => {
                    debug!(plant = plant.get(), tick = step, "planned placement applied");
                    summary.applied.placements.push(placement);
                }
                Err(reason) => summary.rejected.push((placement, reason)),
            }
        }

        let advanced = simulation.advance(config.tick_period());
        summary.ticks_run += u64::from(advanced.ticks);
        summary.spawn_attempts += u64::from(advanced.spawn_attempts);

        for event in simulation.take_events() {
            match event {
                Event::ZombieKilled { .. } => summary.kills += 1,
                Event::GameOver { .. } => summary.game_over_at = Some(simulation.tick_index()),
                _ => {}
            }
        }

        if simulation.is_game_over() {
            break;
        }
    }

    let skipped = pending.count();
    if skipped > 0 {
        info!(skipped, "planned placements never reached their tick");
    }

    summary.score = simulation.score();
    summary.sun = simulation.sun();
    summary.plants = simulation.plants().len();
    summary.zombies = simulation.zombies().len();
    summary.peas = simulation.peas().len();
    info!(
        ticks = summary.ticks_run,
        score = summary.score.get(),
        game_over = summary.game_over_at.is_some(),
        "headless run finished"
    );

    Ok(summary)
}
