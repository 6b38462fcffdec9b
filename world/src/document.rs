use serde::{Deserialize, Serialize};

use midnight_core::{
    GridError, Occupant, TerrainKind, UnknownOccupant, UnknownTerrainKind, WorldGrid, WorldTile,
};

/// One square as written in a world file, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    /// Terrain identifier, e.g. `"forest"` or `"img/terrain_forest.png"`.
    pub terrain_type: String,
    /// Creature identifier, e.g. `"wolves"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster: Option<String>,
    /// Place name, e.g. `"the Tower of the Moon"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TileSpec {
    /// Creates an unnamed, unoccupied square.
    #[must_use]
    pub fn new(terrain_type: impl Into<String>) -> Self {
        Self {
            terrain_type: terrain_type.into(),
            ..Self::default()
        }
    }
}

/// Errors raised while validating a world document.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldBuildError {
    /// A square names terrain absent from the catalog.
    #[error("square ({row}, {col}): {source}")]
    UnknownTerrain {
        /// Row of the offending square.
        row: usize,
        /// Column of the offending square.
        col: usize,
        /// Identifier that failed to resolve.
        source: UnknownTerrainKind,
    },
    /// A square names a creature that does not exist.
    #[error("square ({row}, {col}): {source}")]
    UnknownOccupant {
        /// Row of the offending square.
        row: usize,
        /// Column of the offending square.
        col: usize,
        /// Identifier that failed to resolve.
        source: UnknownOccupant,
    },
    /// The squares do not form a rectangle.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Validates a world document and builds the grid it describes.
///
/// Identifiers are resolved once here; the first unknown one aborts the load.
/// Blank place names are treated as absent.
pub fn build_grid(
    rows: Vec<Vec<TileSpec>>,
    border_terrain: TerrainKind,
) -> Result<WorldGrid, WorldBuildError> {
    let tiles = rows
        .into_iter()
        .enumerate()
        .map(|(row, specs)| {
            specs
                .into_iter()
                .enumerate()
                .map(|(col, spec)| resolve(row, col, spec))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(WorldGrid::from_rows(tiles, border_terrain)?)
}

fn resolve(row: usize, col: usize, spec: TileSpec) -> Result<WorldTile, WorldBuildError> {
    let terrain = TerrainKind::from_identifier(&spec.terrain_type)
        .map_err(|source| WorldBuildError::UnknownTerrain { row, col, source })?;
    let mut tile = WorldTile::new(terrain);
    if let Some(monster) = spec.monster.as_deref().filter(|id| !id.trim().is_empty()) {
        let occupant = Occupant::from_identifier(monster)
            .map_err(|source| WorldBuildError::UnknownOccupant { row, col, source })?;
        tile = tile.with_occupant(occupant);
    }
    if let Some(name) = spec.name.filter(|name| !name.trim().is_empty()) {
        tile = tile.with_name(name);
    }
    Ok(tile)
}
