use std::{fs, path::Path};

use anyhow::{Context, Result};
use midnight_core::{TerrainKind, WorldGrid};
use midnight_world::{build_grid, TileSpec};

/// Reads a JSON world document and validates it into a grid.
pub(crate) fn load(path: &Path, border_terrain: TerrainKind) -> Result<WorldGrid> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read world map at {}", path.display()))?;
    parse(&contents, border_terrain)
        .with_context(|| format!("invalid world map in {}", path.display()))
}

fn parse(contents: &str, border_terrain: TerrainKind) -> Result<WorldGrid> {
    let rows: Vec<Vec<TileSpec>> =
        serde_json::from_str(contents).context("failed to parse world map json")?;
    build_grid(rows, border_terrain).context("failed to build world grid")
}
