#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Lawn Defence.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.
//!
//! All UI-specific calls live inside the local `ui` module to avoid leaking
//! Macroquad UI types throughout the renderer.

mod ui;

use self::ui::{
    draw_control_panel_ui, draw_game_over_ui, ControlPanelUiContext, ControlPanelUiResult,
};
use anyhow::Result;
use glam::Vec2;
use lawn_defence_core::PlantKind;
use lawn_defence_rendering::{
    palette, shapes, Color, ControlPanelView, FrameInput, PlantPresentation, Presentation,
    RenderingBackend, Scene, ZombiePresentation,
};
use macroquad::input::{
    is_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton,
};
use macroquad::math::Vec2 as MacroquadVec2;
use std::time::Duration;

/// Tracks UI-sourced interactions so they can be merged with physical input on the next frame.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlPanelInputState {
    selection_latched: Option<PlantKind>,
    reset_latched: bool,
}

impl ControlPanelInputState {
    /// Returns the latched plant selection, clearing it so the action fires once.
    pub fn take_selection(&mut self) -> Option<PlantKind> {
        self.selection_latched.take()
    }

    /// Records that a plant button was pressed this frame.
    pub fn register_selection(&mut self, kind: PlantKind) {
        self.selection_latched = Some(kind);
    }

    /// Returns whether the UI requested a reset and clears the latch so the
    /// action fires only once.
    pub fn take_reset(&mut self) -> bool {
        let latched = self.reset_latched;
        self.reset_latched = false;
        latched
    }

    /// Records that a reset or play-again button was pressed this frame.
    pub fn register_reset(&mut self) {
        self.reset_latched = true;
    }
}

/// Snapshot of edge-triggered keyboard shortcuts observed during a single frame.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the game loop.
    quit_requested: bool,
    /// `1` selects the sunflower, `2` the peashooter.
    selection: Option<PlantKind>,
    /// `R` starts a new game.
    reset: bool,
    /// `H` toggles zombie health-bar overlays.
    toggle_health_bars: bool,
}

impl KeyboardShortcuts {
    fn poll() -> Self {
        let quit_requested = is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q);
        let selection = if is_key_pressed(KeyCode::Key1) {
            Some(PlantKind::Generator)
        } else if is_key_pressed(KeyCode::Key2) {
            Some(PlantKind::Shooter)
        } else {
            None
        };

        Self {
            quit_requested,
            selection,
            reset: is_key_pressed(KeyCode::R),
            toggle_health_bars: is_key_pressed(KeyCode::H),
        }
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let panel_width = scene.control_panel.map_or(0.0, |panel| panel.width);
        let mut config = macroquad::window::Conf {
            window_title,
            window_width: (scene.lawn.width() + panel_width).ceil() as i32,
            window_height: scene.lawn.height().ceil() as i32,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = self.swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);
            let mut show_health_bars = false;
            let mut control_panel_input = ControlPanelInputState::default();

            loop {
                let keyboard = KeyboardShortcuts::poll();
                if keyboard.quit_requested {
                    break;
                }
                if keyboard.toggle_health_bars {
                    show_health_bars = !show_health_bars;
                }

                macroquad::window::clear_background(background);

                let screen_width = macroquad::window::screen_width();
                let screen_height = macroquad::window::screen_height();

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                let metrics_before = SceneMetrics::from_scene(&scene, screen_width, screen_height);
                let (cursor_x, cursor_y) = mouse_position();
                let frame_input = gather_frame_input_from_observations(
                    &scene,
                    &metrics_before,
                    Vec2::new(cursor_x, cursor_y),
                    is_mouse_button_pressed(MouseButton::Left),
                    ControlPanelUiResult {
                        selection: control_panel_input.take_selection(),
                        reset: control_panel_input.take_reset(),
                    },
                    keyboard,
                );

                update_scene(frame_dt, frame_input, &mut scene);

                let metrics = SceneMetrics::from_scene(&scene, screen_width, screen_height);
                draw_lawn(&scene, &metrics);
                draw_plants(&scene, &metrics);
                draw_zombies(&scene.zombies, &metrics);
                if show_health_bars {
                    draw_health_bars(&scene.zombies, &metrics);
                }
                draw_peas(&scene, &metrics);

                if let Some(panel_context) = draw_control_panel(&scene, screen_width, screen_height)
                {
                    let mut control_panel_ui = macroquad::ui::root_ui();
                    let ControlPanelUiResult { selection, reset } =
                        draw_control_panel_ui(&mut control_panel_ui, panel_context);
                    if let Some(kind) = selection {
                        control_panel_input.register_selection(kind);
                    }
                    if reset {
                        control_panel_input.register_reset();
                    }
                }

                if scene.hud.game_over {
                    let center = draw_game_over_veil(&scene, &metrics);
                    let mut overlay_ui = macroquad::ui::root_ui();
                    let panel_background = to_macroquad_color(
                        scene
                            .control_panel
                            .map_or(palette::PANEL, |panel| panel.background),
                    );
                    if draw_game_over_ui(
                        &mut overlay_ui,
                        center,
                        panel_background,
                        scene.hud.score.get(),
                    ) {
                        control_panel_input.register_reset();
                    }
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
struct SceneMetrics {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl SceneMetrics {
    fn from_scene(scene: &Scene, screen_width: f32, screen_height: f32) -> Self {
        let world_width = scene.lawn.width();
        let world_height = scene.lawn.height();
        let panel_width = scene
            .control_panel
            .map(|panel| panel.width.max(0.0))
            .unwrap_or(0.0)
            .min(screen_width);
        let available_width = (screen_width - panel_width).max(0.0);
        let scale = if world_width <= f32::EPSILON || world_height <= f32::EPSILON {
            1.0
        } else {
            (available_width / world_width).min(screen_height / world_height)
        };

        let offset_x = ((available_width - world_width * scale) * 0.5).max(0.0);
        let offset_y = ((screen_height - world_height * scale) * 0.5).max(0.0);

        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    fn to_screen(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            self.offset_x + position.x * self.scale,
            self.offset_y + position.y * self.scale,
        )
    }

    fn to_lawn(&self, position: Vec2) -> Option<Vec2> {
        if self.scale <= f32::EPSILON {
            return None;
        }

        Some(Vec2::new(
            (position.x - self.offset_x) / self.scale,
            (position.y - self.offset_y) / self.scale,
        ))
    }
}

fn gather_frame_input_from_observations(
    scene: &Scene,
    metrics: &SceneMetrics,
    cursor_position: Vec2,
    click: bool,
    panel: ControlPanelUiResult,
    keyboard: KeyboardShortcuts,
) -> FrameInput {
    let mut input = FrameInput {
        select_plant: panel.selection.or(keyboard.selection),
        reset: panel.reset || keyboard.reset,
        placement: None,
    };

    if click && !scene.hud.game_over {
        input.placement = metrics
            .to_lawn(cursor_position)
            .and_then(|position| scene.lawn.cell_at(position));
    }

    input
}

fn draw_control_panel(
    scene: &Scene,
    screen_width: f32,
    screen_height: f32,
) -> Option<ControlPanelUiContext> {
    let Some(ControlPanelView { width, background }) = scene.control_panel else {
        return None;
    };
    if width <= f32::EPSILON {
        return None;
    }

    let left = (screen_width - width).max(0.0);
    let background_color = to_macroquad_color(background);
    macroquad::shapes::draw_rectangle(left, 0.0, width, screen_height, background_color);

    Some(ControlPanelUiContext {
        origin: MacroquadVec2::new(left, 0.0),
        size: MacroquadVec2::new(width, screen_height),
        background: background_color,
        hud: scene.hud,
    })
}

fn draw_lawn(scene: &Scene, metrics: &SceneMetrics) {
    let lawn = scene.lawn;
    let color = to_macroquad_color(lawn.line_color);
    let top_left = metrics.to_screen(Vec2::ZERO);
    let bottom_right = metrics.to_screen(Vec2::new(lawn.width(), lawn.height()));

    for column in 0..=lawn.columns {
        let x = metrics.to_screen(Vec2::new(column as f32 * lawn.cell_width, 0.0)).x;
        macroquad::shapes::draw_line(x, top_left.y, x, bottom_right.y, 1.0, color);
    }

    for row in 0..=lawn.rows {
        let y = metrics.to_screen(Vec2::new(0.0, row as f32 * lawn.cell_height)).y;
        macroquad::shapes::draw_line(top_left.x, y, bottom_right.x, y, 1.0, color);
    }
}

fn draw_plants(scene: &Scene, metrics: &SceneMetrics) {
    for plant in &scene.plants {
        match plant.kind {
            PlantKind::Generator => {
                let center = metrics.to_screen(scene.lawn.cell_center(plant.cell));
                macroquad::shapes::draw_circle(
                    center.x,
                    center.y,
                    shapes::SUNFLOWER_RADIUS * metrics.scale,
                    to_macroquad_color(palette::SUNFLOWER),
                );
            }
            PlantKind::Shooter => {
                let (top_left, size) = peashooter_rectangle(scene, plant, metrics);
                macroquad::shapes::draw_rectangle(
                    top_left.x,
                    top_left.y,
                    size.x,
                    size.y,
                    to_macroquad_color(palette::PEASHOOTER),
                );
            }
        }
    }
}

fn peashooter_rectangle(
    scene: &Scene,
    plant: &PlantPresentation,
    metrics: &SceneMetrics,
) -> (Vec2, Vec2) {
    let inset = Vec2::splat(shapes::PEASHOOTER_INSET);
    let cell = Vec2::new(scene.lawn.cell_width, scene.lawn.cell_height);
    let top_left = metrics.to_screen(scene.lawn.cell_origin(plant.cell) + inset);
    let size = (cell - inset * 2.0).max(Vec2::ZERO) * metrics.scale;
    (top_left, size)
}

fn zombie_body(zombie: &ZombiePresentation, metrics: &SceneMetrics) -> (Vec2, Vec2) {
    let size = Vec2::new(shapes::ZOMBIE_WIDTH, shapes::ZOMBIE_HEIGHT);
    let top_left = metrics.to_screen(zombie.position - size * 0.5);
    (top_left, size * metrics.scale)
}

fn draw_zombies(zombies: &[ZombiePresentation], metrics: &SceneMetrics) {
    let body_color = to_macroquad_color(palette::ZOMBIE);
    let eye_color = to_macroquad_color(palette::ZOMBIE_EYE);
    let eye_radius = shapes::ZOMBIE_EYE_RADIUS * metrics.scale;

    for zombie in zombies {
        let (top_left, size) = zombie_body(zombie, metrics);
        macroquad::shapes::draw_rectangle(top_left.x, top_left.y, size.x, size.y, body_color);

        let eye_y = top_left.y + size.y * 0.2;
        for eye_x in [top_left.x + size.x * 0.3, top_left.x + size.x * 0.7] {
            macroquad::shapes::draw_circle(eye_x, eye_y, eye_radius, eye_color);
        }
    }
}

fn draw_health_bars(zombies: &[ZombiePresentation], metrics: &SceneMetrics) {
    let fill = to_macroquad_color(palette::HEALTH);
    let track = to_macroquad_color(palette::HEALTH.lighten(0.7));
    let height = 4.0 * metrics.scale;

    for zombie in zombies {
        let (top_left, size) = zombie_body(zombie, metrics);
        let y = top_left.y - height * 2.0;
        macroquad::shapes::draw_rectangle(top_left.x, y, size.x, height, track);
        macroquad::shapes::draw_rectangle(
            top_left.x,
            y,
            size.x * zombie.health_fraction,
            height,
            fill,
        );
    }
}

fn draw_peas(scene: &Scene, metrics: &SceneMetrics) {
    let color = to_macroquad_color(palette::PEA);
    let radius = shapes::PEA_RADIUS * metrics.scale;

    for pea in &scene.peas {
        let center = metrics.to_screen(pea.position);
        macroquad::shapes::draw_circle(center.x, center.y, radius, color);
    }
}

/// Dims the lawn and returns the centre of the dimmed area in screen space.
fn draw_game_over_veil(scene: &Scene, metrics: &SceneMetrics) -> MacroquadVec2 {
    let top_left = metrics.to_screen(Vec2::ZERO);
    let bottom_right = metrics.to_screen(Vec2::new(scene.lawn.width(), scene.lawn.height()));
    let size = bottom_right - top_left;
    macroquad::shapes::draw_rectangle(
        top_left.x,
        top_left.y,
        size.x,
        size.y,
        to_macroquad_color(palette::GAME_OVER_VEIL),
    );

    let center = top_left + size * 0.5;
    MacroquadVec2::new(center.x, center.y)
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawn_defence_core::{CellCoord, LawnGrid};
    use lawn_defence_rendering::LawnPresentation;

    fn base_scene() -> Scene {
        let lawn = LawnPresentation::from_grid(&LawnGrid::STANDARD, palette::GRID_LINE)
            .expect("standard lawn is valid");
        Scene::new(lawn, Some(ControlPanelView::new(200.0, palette::PANEL)))
    }

    fn click_at(scene: &Scene, metrics: &SceneMetrics, lawn_point: Vec2) -> FrameInput {
        gather_frame_input_from_observations(
            scene,
            metrics,
            metrics.to_screen(lawn_point),
            true,
            ControlPanelUiResult::default(),
            KeyboardShortcuts::default(),
        )
    }

    #[test]
    fn scene_metrics_fit_the_lawn_beside_the_panel() {
        let scene = base_scene();
        let metrics = SceneMetrics::from_scene(&scene, 920.0, 500.0);

        assert!((metrics.scale - 1.0).abs() <= f32::EPSILON);
        assert!(metrics.offset_x.abs() <= f32::EPSILON);
        assert!(metrics.offset_y.abs() <= f32::EPSILON);

        let doubled = SceneMetrics::from_scene(&scene, 1_640.0, 1_000.0);
        assert!((doubled.scale - 2.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn click_inside_the_lawn_targets_the_cell_under_the_cursor() {
        let scene = base_scene();
        let metrics = SceneMetrics::from_scene(&scene, 1_640.0, 1_000.0);

        let input = click_at(&scene, &metrics, Vec2::new(170.0, 420.0));

        assert_eq!(input.placement, Some(CellCoord::new(2, 4)));
    }

    #[test]
    fn clicks_outside_the_lawn_or_after_game_over_place_nothing() {
        let mut scene = base_scene();
        let metrics = SceneMetrics::from_scene(&scene, 920.0, 500.0);

        let outside = click_at(&scene, &metrics, Vec2::new(750.0, 20.0));
        assert!(outside.placement.is_none(), "panel clicks must not place");

        scene.hud.game_over = true;
        let over = click_at(&scene, &metrics, Vec2::new(10.0, 10.0));
        assert!(over.placement.is_none(), "game over must ignore lawn clicks");
    }

    #[test]
    fn panel_requests_take_precedence_over_keyboard() {
        let scene = base_scene();
        let metrics = SceneMetrics::from_scene(&scene, 920.0, 500.0);
        let keyboard = KeyboardShortcuts {
            selection: Some(PlantKind::Generator),
            reset: true,
            ..KeyboardShortcuts::default()
        };

        let input = gather_frame_input_from_observations(
            &scene,
            &metrics,
            Vec2::ZERO,
            false,
            ControlPanelUiResult {
                selection: Some(PlantKind::Shooter),
                reset: false,
            },
            keyboard,
        );

        assert_eq!(input.select_plant, Some(PlantKind::Shooter));
        assert!(input.reset, "keyboard reset still applies");
        assert!(input.placement.is_none());
    }

    #[test]
    fn peashooter_rectangle_is_inset_within_its_cell() {
        let scene = base_scene();
        let metrics = SceneMetrics::from_scene(&scene, 920.0, 500.0);
        let plant = PlantPresentation {
            kind: PlantKind::Shooter,
            cell: CellCoord::new(1, 1),
        };

        let (top_left, size) = peashooter_rectangle(&scene, &plant, &metrics);

        assert_eq!(top_left, Vec2::new(95.0, 115.0));
        assert_eq!(size, Vec2::new(50.0, 70.0));
    }

    #[test]
    fn zombie_body_is_centred_on_its_position() {
        let scene = base_scene();
        let metrics = SceneMetrics::from_scene(&scene, 920.0, 500.0);
        let zombie = ZombiePresentation {
            position: Vec2::new(400.0, 250.0),
            health_fraction: 1.0,
        };

        let (top_left, size) = zombie_body(&zombie, &metrics);

        assert_eq!(top_left, Vec2::new(385.0, 225.0));
        assert_eq!(size, Vec2::new(30.0, 50.0));
    }
}
