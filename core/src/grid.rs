use crate::{Coordinate, Occupant, TerrainKind};

/// Terrain substituted for every square beyond the edge of the map.
pub const DEFAULT_BORDER_TERRAIN: TerrainKind = TerrainKind::FrozenWastes;

/// Single square of the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldTile {
    terrain: TerrainKind,
    occupant: Option<Occupant>,
    name: Option<String>,
}

impl WorldTile {
    /// Creates an unnamed, unoccupied tile of the provided terrain.
    #[must_use]
    pub const fn new(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            occupant: None,
            name: None,
        }
    }

    /// Places a creature on the tile.
    #[must_use]
    pub fn with_occupant(mut self, occupant: Occupant) -> Self {
        self.occupant = Some(occupant);
        self
    }

    /// Gives the tile a place name such as "the Tower of the Moon".
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Terrain covering the tile.
    #[must_use]
    pub const fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    /// Creature standing on the tile, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<Occupant> {
        self.occupant
    }

    /// Place name of the tile, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Errors raised while assembling a grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid contains no tiles at all.
    #[error("the world grid must contain at least one tile")]
    Empty,
    /// A row differs in length from the first row.
    #[error("row {row} has {found} tiles but the first row has {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// Rectangular map of tiles surrounded by an endless border.
///
/// The grid is fixed once built. Every read goes through
/// [`WorldGrid::tile_at`], which substitutes the border tile for any
/// coordinate outside the map.
#[derive(Clone, Debug)]
pub struct WorldGrid {
    rows: u32,
    cols: u32,
    tiles: Vec<WorldTile>,
    border: WorldTile,
}

impl WorldGrid {
    /// Builds a grid from rows of tiles listed north to south.
    pub fn from_rows(
        rows: Vec<Vec<WorldTile>>,
        border_terrain: TerrainKind,
    ) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(GridError::RaggedRow {
                row,
                expected,
                found,
            });
        }

        let row_count = rows.len();
        let tiles: Vec<WorldTile> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: dimension(row_count),
            cols: dimension(expected),
            tiles,
            border: WorldTile::new(border_terrain),
        })
    }

    /// Builds a grid covered by a single terrain kind.
    ///
    /// Zero dimensions produce a grid made entirely of border.
    #[must_use]
    pub fn uniform(rows: u32, cols: u32, terrain: TerrainKind, border_terrain: TerrainKind) -> Self {
        let count = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            tiles: vec![WorldTile::new(terrain); count],
            border: WorldTile::new(border_terrain),
        }
    }

    /// Replaces a tile inside the map; coordinates outside it are ignored.
    ///
    /// Intended for assembling grids before a session starts.
    #[must_use]
    pub fn with_tile(mut self, coord: Coordinate, tile: WorldTile) -> Self {
        if let Some(index) = self.index_of(coord) {
            self.tiles[index] = tile;
        }
        self
    }

    /// Number of rows inside the map.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns inside the map.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Terrain substituted for coordinates outside the map.
    #[must_use]
    pub const fn border_terrain(&self) -> TerrainKind {
        self.border.terrain
    }

    /// Whether the coordinate lies inside the map.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index_of(coord).is_some()
    }

    /// Tile at the coordinate, or the border tile beyond the map edge.
    #[must_use]
    pub fn tile_at(&self, coord: Coordinate) -> &WorldTile {
        self.index_of(coord)
            .and_then(|index| self.tiles.get(index))
            .unwrap_or(&self.border)
    }

    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        let row = u32::try_from(coord.row()).ok()?;
        let col = u32::try_from(coord.col()).ok()?;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }
}

fn dimension(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
