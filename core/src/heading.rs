use serde::{Deserialize, Serialize};

use crate::{layout, Coordinate, ScreenPoint};

/// One of the eight compass directions a lord can face.
///
/// Headings form a cycle in 45 degree increments starting at north, so all
/// rotation is index arithmetic modulo eight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Heading {
    /// Bearing 0.
    #[serde(rename = "north")]
    North,
    /// Bearing 45.
    #[serde(rename = "northeast")]
    NorthEast,
    /// Bearing 90.
    #[serde(rename = "east")]
    East,
    /// Bearing 135.
    #[serde(rename = "southeast")]
    SouthEast,
    /// Bearing 180.
    #[serde(rename = "south")]
    South,
    /// Bearing 225.
    #[serde(rename = "southwest")]
    SouthWest,
    /// Bearing 270.
    #[serde(rename = "west")]
    West,
    /// Bearing 315.
    #[serde(rename = "northwest")]
    NorthWest,
}

impl Heading {
    /// Every heading in clockwise order starting at north.
    pub const ALL: [Heading; 8] = [
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
    ];

    /// Position of the heading within [`Heading::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolves a heading from any index, wrapping modulo eight.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Heading 45 degrees clockwise of this one.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Heading 45 degrees counter-clockwise of this one.
    #[must_use]
    pub const fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    /// Offset of the square directly ahead.
    #[must_use]
    pub const fn step_offset(self) -> Coordinate {
        match self {
            Self::North => Coordinate::new(-1, 0),
            Self::NorthEast => Coordinate::new(-1, 1),
            Self::East => Coordinate::new(0, 1),
            Self::SouthEast => Coordinate::new(1, 1),
            Self::South => Coordinate::new(1, 0),
            Self::SouthWest => Coordinate::new(1, -1),
            Self::West => Coordinate::new(0, -1),
            Self::NorthWest => Coordinate::new(-1, -1),
        }
    }

    /// Whether the heading is one of north, east, south or west.
    #[must_use]
    pub const fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Compass bearing in degrees.
    #[must_use]
    pub const fn bearing(self) -> u16 {
        self.index() as u16 * 45
    }

    /// Lower-case name used in narration, e.g. `"northeast"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthEast => "northeast",
            Self::East => "east",
            Self::SouthEast => "southeast",
            Self::South => "south",
            Self::SouthWest => "southwest",
            Self::West => "west",
            Self::NorthWest => "northwest",
        }
    }

    /// Panorama cells visible along this heading, ordered back to front.
    #[must_use]
    pub fn panorama_layout(self) -> &'static [ViewCell] {
        &layout::LAYOUTS[self.index()]
    }
}

/// Precomputed placement of one world square within the panorama.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewCell {
    screen_anchor: ScreenPoint,
    world_offset: Coordinate,
    scale: f32,
}

impl ViewCell {
    /// Creates a new view cell.
    ///
    /// `scale` must be positive; layouts are authored data and are checked
    /// by tests rather than at runtime.
    #[must_use]
    pub const fn new(screen_anchor: ScreenPoint, world_offset: Coordinate, scale: f32) -> Self {
        Self {
            screen_anchor,
            world_offset,
            scale,
        }
    }

    /// Screen position of the bottom-centre of the scaled terrain asset.
    #[must_use]
    pub const fn screen_anchor(&self) -> ScreenPoint {
        self.screen_anchor
    }

    /// Offset of the viewed square relative to the viewer.
    #[must_use]
    pub const fn world_offset(&self) -> Coordinate {
        self.world_offset
    }

    /// Scale applied to terrain assets drawn for this cell.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Same screen placement with the world offset turned 90 degrees clockwise.
    #[must_use]
    pub const fn quarter_turn_cw(self) -> Self {
        Self {
            world_offset: self.world_offset.quarter_turn_cw(),
            ..self
        }
    }
}
