//! Immediate-mode UI helpers for the Macroquad rendering backend.
//!
//! This module hosts all uses of `macroquad::ui` so the rest of the adapter can
//! remain agnostic of Macroquad's UI types.

use lawn_defence_core::PlantKind;
use lawn_defence_rendering::HudPresentation;
use macroquad::{
    color::{Color, WHITE},
    math::{RectOffset, Vec2},
    ui::{hash, Skin, Ui},
};

/// Outcome of rendering the control panel UI for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ControlPanelUiResult {
    /// Plant button pressed during this frame, if any.
    pub(crate) selection: Option<PlantKind>,
    /// Whether the reset button was pressed during this frame.
    pub(crate) reset: bool,
}

/// Snapshot of the control panel's UI layout and data for the current frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ControlPanelUiContext {
    /// Top-left corner of the panel in screen coordinates.
    pub(crate) origin: Vec2,
    /// Panel dimensions in screen space.
    pub(crate) size: Vec2,
    /// Background colour applied to the window skin so the UI matches the
    /// adapter's solid rectangle.
    pub(crate) background: Color,
    /// Counters displayed as labels.
    pub(crate) hud: HudPresentation,
}

/// Renders the control panel's labels and buttons for the current frame.
pub(crate) fn draw_control_panel_ui(
    ui: &mut Ui,
    context: ControlPanelUiContext,
) -> ControlPanelUiResult {
    let skin = panel_skin(ui, context.background);
    ui.push_skin(&skin);

    let mut result = ControlPanelUiResult::default();
    let _ = ui.window(hash!("control_panel"), context.origin, context.size, |ui| {
        ui.label(None, &format!("Sun: {}", context.hud.sun.get()));
        ui.label(None, &format!("Score: {}", context.hud.score.get()));
        ui.separator();

        for kind in PlantKind::ALL {
            let marker = if context.hud.selected == Some(kind) {
                "> "
            } else {
                ""
            };
            let label = format!("{marker}{} ({})", kind.label(), kind.cost().get());
            if ui.button(None, label.as_str()) {
                result.selection = Some(kind);
            }
        }

        ui.separator();
        ui.label(None, "Keys: 1 / 2 select, R resets.");
        result.reset = ui.button(None, "Reset");
    });

    ui.pop_skin();
    result
}

/// Renders the game-over box and reports whether "play again" was pressed.
pub(crate) fn draw_game_over_ui(ui: &mut Ui, center: Vec2, background: Color, score: u32) -> bool {
    let size = Vec2::new(260.0, 140.0);
    let origin = center - size * 0.5;
    let skin = panel_skin(ui, background);
    ui.push_skin(&skin);

    let mut play_again = false;
    let _ = ui.window(hash!("game_over"), origin, size, |ui| {
        ui.label(None, "Game Over");
        ui.label(None, &format!("Final score: {score}"));
        play_again = ui.button(None, "Play Again");
    });

    ui.pop_skin();
    play_again
}

fn panel_skin(ui: &mut Ui, background: Color) -> Skin {
    let mut skin = ui.default_skin();
    skin.margin = 0.0;

    skin.window_style = ui
        .style_builder()
        .color(background)
        .color_hovered(background)
        .color_clicked(background)
        .color_selected(background)
        .color_selected_hovered(background)
        .color_inactive(background)
        .text_color(WHITE)
        .text_color_hovered(WHITE)
        .text_color_clicked(WHITE)
        .margin(RectOffset::new(16.0, 16.0, 16.0, 16.0))
        .build();

    skin.label_style = ui
        .style_builder()
        .text_color(WHITE)
        .text_color_hovered(WHITE)
        .text_color_clicked(WHITE)
        .margin(RectOffset::new(0.0, 0.0, 4.0, 4.0))
        .build();

    skin.button_style = ui
        .style_builder()
        .text_color(WHITE)
        .text_color_hovered(WHITE)
        .text_color_clicked(WHITE)
        .color(Color::from_rgba(70, 70, 70, 255))
        .color_hovered(Color::from_rgba(96, 96, 96, 255))
        .color_clicked(Color::from_rgba(56, 56, 56, 255))
        .color_selected(Color::from_rgba(70, 70, 70, 255))
        .color_selected_hovered(Color::from_rgba(96, 96, 96, 255))
        .color_inactive(Color::from_rgba(56, 56, 56, 200))
        .margin(RectOffset::new(0.0, 0.0, 8.0, 8.0))
        .build();

    skin
}
