#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Lords of Midnight workspace.
//!
//! This crate defines the vocabulary that connects adapters, the
//! authoritative world and the pure systems. Adapters translate player input
//! into [`Command`] values, the world executes those commands through its
//! `apply` entry point and reports the outcome as [`Event`] values, while
//! systems read the immutable [`WorldGrid`] and [`Actor`] state to compute
//! movement costs and panorama draw lists.
//!
//! Everything in this crate is pure data: no I/O, no logging and no global
//! mutable state.

use serde::{Deserialize, Serialize};
use std::ops::Add;

mod actor;
mod grid;
mod heading;
mod layout;
mod occupant;
mod terrain;

pub use actor::{Actor, ActorId, GameClockPolicy, PolicyError, Race, DEFAULT_DAWN_HOUR, MAX_ENERGY};
pub use grid::{GridError, WorldGrid, WorldTile, DEFAULT_BORDER_TERRAIN};
pub use heading::{Heading, ViewCell};
pub use occupant::{Occupant, UnknownOccupant};
pub use terrain::{TerrainCatalog, TerrainInfo, TerrainKind, UnknownTerrainKind};

/// Location of a grid square, or an offset between two squares.
///
/// Coordinates index the world as rows of columns. They are NOT screen
/// `(x, y)` pairs: `row` grows southwards and `col` grows eastwards, so an
/// offset of `(-1, 1)` points one row up and one column right (northeast).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    /// Creates a new coordinate from a row and a column.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row index (or row delta when used as an offset).
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Column index (or column delta when used as an offset).
    #[must_use]
    pub const fn col(&self) -> i32 {
        self.col
    }

    /// Returns the coordinate displaced by the provided offset.
    ///
    /// Components saturate at the `i32` range, where everything is border.
    #[must_use]
    pub const fn offset_by(self, delta: Coordinate) -> Self {
        Self {
            row: self.row.saturating_add(delta.row),
            col: self.col.saturating_add(delta.col),
        }
    }

    /// Rotates an offset a quarter turn clockwise around the origin.
    ///
    /// North `(-1, 0)` becomes east `(0, 1)`, east becomes south `(1, 0)`.
    #[must_use]
    pub const fn quarter_turn_cw(self) -> Self {
        Self {
            row: self.col,
            col: self.row.saturating_neg(),
        }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Self::Output {
        self.offset_by(rhs)
    }
}

/// Pixel position on the 1024x768 panorama canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPoint {
    x: i32,
    y: i32,
}

impl ScreenPoint {
    /// Creates a new screen point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal pixel coordinate, growing rightwards.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical pixel coordinate, growing downwards.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
}

/// Direction of a single heading rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Turn 45 degrees clockwise.
    Clockwise,
    /// Turn 45 degrees counter-clockwise.
    CounterClockwise,
}

/// Commands that express all permissible session mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Moves the selected lord one square along their heading.
    MoveForward,
    /// Turns the selected lord 45 degrees clockwise.
    RotateClockwise,
    /// Turns the selected lord 45 degrees counter-clockwise.
    RotateCounterClockwise,
    /// Hands control to another lord.
    SelectActor {
        /// Identifier of the lord to control.
        actor: ActorId,
    },
    /// Faces the selected lord towards an absolute heading.
    SetHeading {
        /// Heading the lord should face.
        heading: Heading,
    },
}

/// Events reported by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Confirms that a lord moved between two squares.
    ActorMoved {
        /// Lord that moved.
        actor: ActorId,
        /// Square the lord left.
        from: Coordinate,
        /// Square the lord now stands on.
        to: Coordinate,
        /// Hours charged against the lord's clock.
        hours: f32,
        /// Energy charged against the lord's reserves.
        energy_spent: u8,
    },
    /// Reports that a move was refused without changing any state.
    MoveRejected {
        /// Lord that attempted to move.
        actor: ActorId,
        /// Reason the move was refused.
        reason: MoveError,
    },
    /// Announces that a lord now faces a different heading.
    HeadingChanged {
        /// Lord that turned.
        actor: ActorId,
        /// Heading the lord now faces.
        heading: Heading,
    },
    /// Announces that control passed to another lord.
    ActorSelected {
        /// Lord now under control.
        actor: ActorId,
    },
    /// Reports that a selection named a lord absent from the roster.
    SelectionRejected {
        /// Identifier that failed to resolve.
        actor: ActorId,
    },
}

/// Reasons a move forward may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum MoveError {
    /// The destination terrain forbids entry.
    #[error("the destination terrain cannot be entered")]
    ImpassableTerrain,
    /// The clock already reached nightfall.
    #[error("night has fallen and no one may travel")]
    TooLateInDay,
    /// The move would end after nightfall.
    #[error("not enough hours remain in the day")]
    InsufficientTime,
    /// The lord lacks the energy the terrain demands.
    #[error("not enough energy remains to cross the terrain")]
    InsufficientEnergy,
}

/// Summary of a committed move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    /// Square the lord left.
    pub from: Coordinate,
    /// Square the lord now stands on.
    pub to: Coordinate,
    /// Hours charged against the clock. Zero in cheat mode.
    pub hours: f32,
    /// Energy charged against the lord. Zero in cheat mode.
    pub energy_spent: u8,
}

/// Result of attempting to move forward.
pub type MoveResult = Result<MoveOutcome, MoveError>;

/// Compositing layer of a draw instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawLayer {
    /// Landscape feature drawn from the panorama layout.
    Terrain,
    /// Creature standing on the square directly ahead.
    Occupant,
}

/// Single sprite blit requested from the external renderer.
///
/// The bottom-centre of the asset, after scaling, sits on `anchor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawInstruction {
    /// Asset file name resolved by the renderer.
    pub asset: &'static str,
    /// Bottom-centre position of the scaled asset.
    pub anchor: ScreenPoint,
    /// Uniform scale applied to the asset.
    pub scale: f32,
    /// Layer the instruction belongs to.
    pub layer: DrawLayer,
}
