#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Lawn Defence adapters.

use anyhow::Result as AnyResult;
use glam::Vec2;
use lawn_defence_core::{
    CellCoord, LawnGrid, PeaView, PlantKind, PlantView, Score, Sun, ZombieView, ZOMBIE_MAX_HEALTH,
};
use std::{error::Error, fmt, time::Duration};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns the same color with a different alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Colors used to draw the lawn and its inhabitants.
pub mod palette {
    use super::Color;

    /// Background behind the lawn.
    pub const SKY: Color = Color::from_rgb_u8(0x87, 0xce, 0xeb);
    /// Lines separating lawn cells.
    pub const GRID_LINE: Color = Color::from_rgb_u8(0xdd, 0xdd, 0xdd);
    /// Sunflower disc.
    pub const SUNFLOWER: Color = Color::from_rgb_u8(0xff, 0xd7, 0x00);
    /// Peashooter body.
    pub const PEASHOOTER: Color = Color::from_rgb_u8(0x00, 0xaa, 0x00);
    /// Zombie body.
    pub const ZOMBIE: Color = Color::from_rgb_u8(0x88, 0x88, 0x88);
    /// Zombie eyes.
    pub const ZOMBIE_EYE: Color = Color::from_rgb_u8(0x00, 0x00, 0x00);
    /// Pea in flight.
    pub const PEA: Color = Color::from_rgb_u8(0x90, 0xee, 0x90);
    /// Control panel background.
    pub const PANEL: Color = Color::from_rgb_u8(0x2e, 0x4a, 0x2e);
    /// Translucent veil drawn over the lawn once the game is over.
    pub const GAME_OVER_VEIL: Color = Color::new(0.0, 0.0, 0.0, 0.6);
    /// Health bar fill.
    pub const HEALTH: Color = Color::from_rgb_u8(0xd6, 0x3a, 0x3a);
}

/// Geometry of a plant sprite, in lawn units relative to its cell.
pub mod shapes {
    /// Radius of the sunflower disc drawn at the cell centre.
    pub const SUNFLOWER_RADIUS: f32 = 20.0;
    /// Inset of the peashooter rectangle from every cell edge.
    pub const PEASHOOTER_INSET: f32 = 15.0;
    /// Width of the zombie body.
    pub const ZOMBIE_WIDTH: f32 = 30.0;
    /// Height of the zombie body.
    pub const ZOMBIE_HEIGHT: f32 = 50.0;
    /// Radius of each zombie eye.
    pub const ZOMBIE_EYE_RADIUS: f32 = 3.0;
    /// Radius of a pea.
    pub const PEA_RADIUS: f32 = 5.0;
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Plant kind the player picked this frame, if any.
    pub select_plant: Option<PlantKind>,
    /// Lawn cell the player clicked this frame, if any.
    pub placement: Option<CellCoord>,
    /// Whether the player requested a new game.
    pub reset: bool,
}

/// Describes the lawn grid in lawn units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LawnPresentation {
    /// Number of cell columns.
    pub columns: u32,
    /// Number of lanes.
    pub rows: u32,
    /// Width of a single cell.
    pub cell_width: f32,
    /// Height of a single cell.
    pub cell_height: f32,
    /// Color of the lines separating cells.
    pub line_color: Color,
}

impl LawnPresentation {
    /// Builds a presentation matching the provided lawn layout.
    ///
    /// # Errors
    ///
    /// Returns [`RenderingError::InvalidCellSize`] when the cells have no area.
    pub fn from_grid(lawn: &LawnGrid, line_color: Color) -> Result<Self, RenderingError> {
        if lawn.cell_width() <= 0 || lawn.cell_height() <= 0 {
            return Err(RenderingError::InvalidCellSize {
                width: lawn.cell_width(),
                height: lawn.cell_height(),
            });
        }

        Ok(Self {
            columns: lawn.columns(),
            rows: lawn.rows(),
            cell_width: lawn.cell_width() as f32,
            cell_height: lawn.cell_height() as f32,
            line_color,
        })
    }

    /// Width of the lawn.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.columns as f32 * self.cell_width
    }

    /// Height of the lawn.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    /// Top-left corner of the provided cell.
    #[must_use]
    pub fn cell_origin(&self, cell: CellCoord) -> Vec2 {
        Vec2::new(
            cell.column() as f32 * self.cell_width,
            cell.row() as f32 * self.cell_height,
        )
    }

    /// Centre of the provided cell.
    #[must_use]
    pub fn cell_center(&self, cell: CellCoord) -> Vec2 {
        self.cell_origin(cell) + Vec2::new(self.cell_width, self.cell_height) * 0.5
    }

    /// Translates a point on the lawn into the cell containing it.
    ///
    /// Points outside the lawn, including non-finite ones, map to `None`.
    #[must_use]
    pub fn cell_at(&self, position: Vec2) -> Option<CellCoord> {
        if !position.is_finite() || position.x < 0.0 || position.y < 0.0 {
            return None;
        }

        let column = (position.x / self.cell_width).floor();
        let row = (position.y / self.cell_height).floor();
        if column >= self.columns as f32 || row >= self.rows as f32 {
            return None;
        }

        Some(CellCoord::new(column as u32, row as u32))
    }
}

/// Plant drawn on the lawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlantPresentation {
    /// Kind of plant, which selects its shape and color.
    pub kind: PlantKind,
    /// Cell the plant occupies.
    pub cell: CellCoord,
}

/// Zombie drawn on the lawn, positioned by the centre of its body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZombiePresentation {
    /// Body centre in lawn units.
    pub position: Vec2,
    /// Remaining health in the range 0.0..=1.0.
    pub health_fraction: f32,
}

/// Pea drawn on the lawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeaPresentation {
    /// Pea centre in lawn units.
    pub position: Vec2,
}

/// Counters and status shown next to the lawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HudPresentation {
    /// Spendable sun.
    pub sun: Sun,
    /// Current score.
    pub score: Score,
    /// Plant kind that the next click will place.
    pub selected: Option<PlantKind>,
    /// Whether the game-over overlay should be shown.
    pub game_over: bool,
}

/// Side panel hosting the HUD and the plant buttons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPanelView {
    /// Panel width in screen pixels.
    pub width: f32,
    /// Panel background.
    pub background: Color,
}

impl ControlPanelView {
    /// Creates a new control panel descriptor.
    #[must_use]
    pub const fn new(width: f32, background: Color) -> Self {
        Self { width, background }
    }
}

/// Scene description combining the lawn and everything standing on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Lawn grid composing the play area.
    pub lawn: LawnPresentation,
    /// Plants on the lawn.
    pub plants: Vec<PlantPresentation>,
    /// Zombies on the field.
    pub zombies: Vec<ZombiePresentation>,
    /// Peas in flight.
    pub peas: Vec<PeaPresentation>,
    /// Status counters.
    pub hud: HudPresentation,
    /// Optional side panel.
    pub control_panel: Option<ControlPanelView>,
}

impl Scene {
    /// Creates an empty scene for the provided lawn.
    #[must_use]
    pub fn new(lawn: LawnPresentation, control_panel: Option<ControlPanelView>) -> Self {
        Self {
            lawn,
            plants: Vec::new(),
            zombies: Vec::new(),
            peas: Vec::new(),
            hud: HudPresentation::default(),
            control_panel,
        }
    }

    /// Replaces the inhabitants and HUD with the provided world snapshots.
    pub fn sync(
        &mut self,
        plants: &PlantView,
        zombies: &ZombieView,
        peas: &PeaView,
        hud: HudPresentation,
    ) {
        self.plants.clear();
        self.plants
            .extend(plants.iter().map(|plant| PlantPresentation {
                kind: plant.kind,
                cell: plant.cell,
            }));

        self.zombies.clear();
        self.zombies
            .extend(zombies.iter().map(|zombie| ZombiePresentation {
                position: Vec2::new(zombie.position.x() as f32, zombie.position.y() as f32),
                health_fraction: (zombie.health as f32 / ZOMBIE_MAX_HEALTH as f32)
                    .clamp(0.0, 1.0),
            }));

        self.peas.clear();
        self.peas.extend(peas.iter().map(|pea| PeaPresentation {
            position: Vec2::new(pea.position.x() as f32, pea.position.y() as f32),
        }));

        self.hud = hud;
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Lawn Defence scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the real frame delta and
    /// the per-frame input captured by the adapter, and refreshes the scene
    /// before it is rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// Lawn cells must have a positive width and height.
    InvalidCellSize {
        /// Provided cell width.
        width: i32,
        /// Provided cell height.
        height: i32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { width, height } => {
                write!(
                    f,
                    "lawn cells must have a positive size (received {width}x{height})"
                )
            }
        }
    }
}

impl Error for RenderingError {}
