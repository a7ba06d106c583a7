//! Windowed game loop bridging the simulation and the macroquad backend.

use anyhow::{Context, Result};
use lawn_defence_core::Event;
use lawn_defence_rendering::{
    palette, ControlPanelView, FrameInput, HudPresentation, LawnPresentation, Presentation,
    RenderingBackend, Scene,
};
use lawn_defence_rendering_macroquad::MacroquadBackend;
use lawn_defence_simulation::{Config, Simulation};
use tracing::debug;

const CONTROL_PANEL_WIDTH: f32 = 240.0;

/// Opens the game window and runs until the player quits.
pub(crate) fn run(config: Config, vsync: bool) -> Result<()> {
    let mut simulation = Simulation::new(config);
    println!("{}", simulation.welcome_banner());

    let lawn = LawnPresentation::from_grid(simulation.lawn(), palette::GRID_LINE)
        .context("failed to describe the lawn")?;
    let mut scene = Scene::new(
        lawn,
        Some(ControlPanelView::new(CONTROL_PANEL_WIDTH, palette::PANEL)),
    );
    sync_scene(&simulation, &mut scene);

    let presentation = Presentation::new("Lawn Defence", palette::SKY, scene);
    MacroquadBackend::new()
        .with_vsync(vsync)
        .run(presentation, move |dt, input, scene| {
            apply_input(&mut simulation, input);
            let _ = simulation.advance(dt);
            for event in simulation.take_events() {
                log_event(&event);
            }
            sync_scene(&simulation, scene);
        })
}

fn apply_input(simulation: &mut Simulation, input: FrameInput) {
    if input.reset {
        simulation.reset();
        return;
    }

    if let Some(kind) = input.select_plant {
        simulation.select_plant(Some(kind));
    }

    if let Some(cell) = input.placement {
        if let Err(reason) = simulation.place_selected(cell) {
            debug!(?cell, %reason, "placement refused");
        }
    }
}

fn log_event(event: &Event) {
    match event {
        Event::ZombieKilled { zombie } => debug!(zombie = zombie.get(), "zombie killed"),
        Event::SunProduced { balance, .. } => debug!(sun = balance.get(), "sun produced"),
        _ => {}
    }
}

fn sync_scene(simulation: &Simulation, scene: &mut Scene) {
    scene.sync(
        &simulation.plants(),
        &simulation.zombies(),
        &simulation.peas(),
        HudPresentation {
            sun: simulation.sun(),
            score: simulation.score(),
            selected: simulation.selected_plant(),
            game_over: simulation.is_game_over(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawn_defence_core::{CellCoord, LawnGrid, PlantKind, Sun};

    #[test]
    fn selection_then_click_places_the_selected_plant() {
        let mut simulation = Simulation::default();

        apply_input(
            &mut simulation,
            FrameInput {
                select_plant: Some(PlantKind::Generator),
                placement: Some(CellCoord::new(3, 2)),
                reset: false,
            },
        );

        assert_eq!(simulation.plants().len(), 1);
        assert_eq!(simulation.sun(), Sun::new(50));
    }

    #[test]
    fn reset_wins_over_other_requests_in_the_same_frame() {
        let mut simulation = Simulation::default();
        simulation.select_plant(Some(PlantKind::Generator));
        let _ = simulation.place_selected(CellCoord::new(0, 0));

        apply_input(
            &mut simulation,
            FrameInput {
                select_plant: Some(PlantKind::Shooter),
                placement: Some(CellCoord::new(1, 0)),
                reset: true,
            },
        );

        assert!(simulation.plants().is_empty());
        assert_eq!(simulation.selected_plant(), None);
        assert_eq!(simulation.sun(), Sun::new(100));
    }

    #[test]
    fn scene_mirrors_the_simulation_hud() {
        let mut simulation = Simulation::default();
        simulation.select_plant(Some(PlantKind::Shooter));
        let lawn = LawnPresentation::from_grid(&LawnGrid::STANDARD, palette::GRID_LINE)
            .expect("standard lawn is valid");
        let mut scene = Scene::new(lawn, None);

        sync_scene(&simulation, &mut scene);

        assert_eq!(scene.hud.sun, Sun::new(100));
        assert_eq!(scene.hud.selected, Some(PlantKind::Shooter));
        assert!(!scene.hud.game_over);
    }
}
