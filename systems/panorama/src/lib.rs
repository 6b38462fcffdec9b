#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Panorama projector that turns a lord's view into draw instructions.
//!
//! The projector reads the grid through [`WorldGrid::tile_at`] only, never
//! mutates anything and leaves asset loading to the renderer. It also
//! produces the narration shown beneath the panorama.

use midnight_core::{
    Actor, DrawInstruction, DrawLayer, GameClockPolicy, ScreenPoint, TerrainCatalog, TerrainKind,
    ViewCell, WorldGrid, WorldTile,
};

/// Foreground position of a creature standing directly ahead.
pub const OCCUPANT_ANCHOR: ScreenPoint = ScreenPoint::new(512, 768);

/// Scale of the foreground creature overlay.
pub const OCCUPANT_SCALE: f32 = 1.0;

/// Furthest number of squares the location narration looks ahead.
pub const LOOK_AHEAD_LIMIT: usize = 6;

/// Draw list for the lord's current heading, back to front.
#[must_use]
pub fn project(actor: &Actor, grid: &WorldGrid) -> Vec<DrawInstruction> {
    project_layout(actor, grid, actor.heading().panorama_layout())
}

/// Draw list for an explicit layout, back to front.
///
/// Cells whose terrain has no sprite emit nothing. A creature on the square
/// directly ahead is appended last so it covers the landscape.
#[must_use]
pub fn project_layout(actor: &Actor, grid: &WorldGrid, layout: &[ViewCell]) -> Vec<DrawInstruction> {
    let origin = actor.position();
    let mut instructions: Vec<DrawInstruction> = layout
        .iter()
        .filter_map(|cell| {
            let tile = grid.tile_at(origin + cell.world_offset());
            TerrainCatalog::lookup(tile.terrain())
                .asset_ref()
                .map(|asset| DrawInstruction {
                    asset,
                    anchor: cell.screen_anchor(),
                    scale: cell.scale(),
                    layer: DrawLayer::Terrain,
                })
        })
        .collect();

    let ahead = grid.tile_at(origin + actor.heading().step_offset());
    if let Some(occupant) = ahead.occupant() {
        instructions.push(DrawInstruction {
            asset: occupant.asset_ref(),
            anchor: OCCUPANT_ANCHOR,
            scale: OCCUPANT_SCALE,
            layer: DrawLayer::Occupant,
        });
    }

    instructions
}

/// Sentence naming where the lord stands and the first landmark ahead.
///
/// Open plains are looked across until something else appears or
/// [`LOOK_AHEAD_LIMIT`] squares have been examined, in which case the last
/// examined square is named.
#[must_use]
pub fn describe_location(actor: &Actor, grid: &WorldGrid) -> String {
    let heading = actor.heading();
    let step = heading.step_offset();
    let here = grid.tile_at(actor.position());

    let mut cursor = actor.position();
    let mut there = here;
    for _ in 0..LOOK_AHEAD_LIMIT {
        cursor = cursor + step;
        there = grid.tile_at(cursor);
        if there.terrain() != TerrainKind::Plains {
            break;
        }
    }

    format!(
        "{} stands at {}, looking {} to {}.",
        actor.name(),
        place_name(here),
        heading.name(),
        place_name(there)
    )
}

/// Sentence describing the hour and how rested the lord is.
#[must_use]
pub fn describe_time_and_energy(actor: &Actor, policy: &GameClockPolicy) -> String {
    let clock = actor.clock();
    let time = if clock == policy.dawn_hour() {
        "It is dawn".to_owned()
    } else if clock >= policy.nightfall_hour() {
        "It is night".to_owned()
    } else {
        match (policy.nightfall_hour() - clock).floor() as u32 {
            0 => "Less than an hour of the day remains".to_owned(),
            1 => "1 hour of the day remains".to_owned(),
            hours => format!("{hours} hours of the day remain"),
        }
    };
    format!(
        "{time} and {} is {}.",
        actor.name(),
        energy_band(actor.energy())
    )
}

/// Name and title of the lord, e.g. "Luxor the Moonprince".
#[must_use]
pub fn describe_lord(actor: &Actor) -> String {
    match actor.title() {
        Some(title) => format!("{} {title}", actor.name()),
        None => actor.name().to_owned(),
    }
}

/// Word describing an energy level, in eight bands of sixteen points.
#[must_use]
pub fn energy_band(energy: u8) -> &'static str {
    const BANDS: [&str; 8] = [
        "utterly tired",
        "very tired",
        "tired",
        "slightly tired",
        "slightly invigorated",
        "invigorated",
        "very invigorated",
        "utterly invigorated",
    ];
    BANDS[usize::from(energy / 16).min(BANDS.len() - 1)]
}

fn place_name(tile: &WorldTile) -> String {
    match tile.name() {
        Some(name) => name.to_owned(),
        None => format!("the {}", TerrainCatalog::lookup(tile.terrain()).display_name()),
    }
}
