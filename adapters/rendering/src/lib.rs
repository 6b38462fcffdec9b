#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Lords of Midnight adapters.

use anyhow::Result as AnyResult;
use glam::Vec2;
use midnight_core::{DrawInstruction, ScreenPoint};

/// Width of the panorama canvas in pixels.
pub const CANVAS_WIDTH: u32 = 1024;
/// Height of the panorama canvas in pixels.
pub const CANVAS_HEIGHT: u32 = 768;

/// Position of a draw anchor as a fraction of the canvas, `0.0..=1.0` inside.
///
/// Anchors may fall outside the canvas; callers clip them.
#[must_use]
pub fn normalized_anchor(anchor: ScreenPoint) -> Vec2 {
    Vec2::new(
        anchor.x() as f32 / CANVAS_WIDTH as f32,
        anchor.y() as f32 / CANVAS_HEIGHT as f32,
    )
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Key pressed by the player on this frame, if any.
    pub key: Option<char>,
}

/// Whether the backend should keep presenting frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    /// Present the updated scene and wait for more input.
    Continue,
    /// Stop presenting and return from [`RenderingBackend::run`].
    Exit,
}

/// Name plate shown above the panorama.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LordPresentation {
    /// Name followed by title, e.g. "Luxor the Moonprince".
    pub name_and_title: String,
    /// Shield asset drawn beside the name.
    pub heraldry: Option<String>,
}

/// Scene description combining the panorama and its narration.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Lord whose view is shown.
    pub lord: LordPresentation,
    /// Sprites to draw in order, back to front.
    pub panorama: Vec<DrawInstruction>,
    /// Where the lord stands and what lies ahead.
    pub location: String,
    /// Time of day and how rested the lord is.
    pub time_and_energy: String,
    /// Message about the last command, such as a refused move.
    pub status: Option<String>,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        lord: LordPresentation,
        panorama: Vec<DrawInstruction>,
        location: String,
        time_and_energy: String,
        status: Option<String>,
    ) -> Self {
        Self {
            lord,
            panorama,
            location,
            time_and_energy,
            status,
        }
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title shown above the first frame.
    pub window_title: String,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            scene,
        }
    }
}

/// Rendering backend capable of presenting Lords of Midnight scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the input captured for
    /// each frame and may mutate the scene before it is presented. Returning
    /// [`FrameControl::Exit`] ends the loop.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene) -> FrameControl;
}
