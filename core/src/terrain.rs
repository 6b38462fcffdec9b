use serde::{Deserialize, Serialize};

/// Closed set of terrain found on the map of Midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainKind {
    /// Open plains. Never drawn in the panorama.
    Plains,
    /// Mountains, slow and exhausting to cross.
    Mountains,
    /// A citadel.
    Citadel,
    /// Forest.
    Forest,
    /// A watchtower.
    Tower,
    /// A henge of standing stones.
    Henge,
    /// A village.
    Village,
    /// Rolling downs.
    Downs,
    /// A keep.
    Keep,
    /// A snowhall.
    Snowhall,
    /// A frozen lake.
    Lake,
    /// The Frozen Wastes, which no one may enter.
    FrozenWastes,
    /// A ruin.
    Ruin,
    /// A lith.
    Lith,
    /// A cavern.
    Cavern,
}

impl TerrainKind {
    /// Every terrain kind in catalog order.
    pub const ALL: [TerrainKind; 15] = [
        TerrainKind::Plains,
        TerrainKind::Mountains,
        TerrainKind::Citadel,
        TerrainKind::Forest,
        TerrainKind::Tower,
        TerrainKind::Henge,
        TerrainKind::Village,
        TerrainKind::Downs,
        TerrainKind::Keep,
        TerrainKind::Snowhall,
        TerrainKind::Lake,
        TerrainKind::FrozenWastes,
        TerrainKind::Ruin,
        TerrainKind::Lith,
        TerrainKind::Cavern,
    ];

    /// Catalog entry describing this terrain.
    #[must_use]
    pub const fn info(self) -> &'static TerrainInfo {
        &CATALOG[self as usize]
    }

    /// Whether the terrain can never be entered.
    #[must_use]
    pub const fn is_impassable(self) -> bool {
        matches!(self, Self::FrozenWastes)
    }

    /// Resolves a terrain kind from a world-file identifier.
    ///
    /// Matching ignores case and surrounding whitespace, and accepts the
    /// image file names produced by map imports (`img/terrain_forest.png`).
    pub fn from_identifier(identifier: &str) -> Result<Self, UnknownTerrainKind> {
        let normalized = normalize_identifier(identifier);
        if normalized == "wastes" {
            return Ok(Self::FrozenWastes);
        }
        TerrainCatalog::iter()
            .find(|info| {
                info.display_name()
                    .bytes()
                    .map(|byte| if byte == b' ' { b'_' } else { byte })
                    .eq(normalized.bytes())
            })
            .map(TerrainInfo::kind)
            .ok_or_else(|| UnknownTerrainKind(identifier.to_owned()))
    }
}

fn normalize_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    let file_name = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
    let stem = file_name.strip_suffix(".png").unwrap_or(file_name);
    let stem = stem.strip_prefix("terrain_").unwrap_or(stem);
    stem.to_ascii_lowercase().replace([' ', '-'], "_")
}

/// Raised when a world file names terrain absent from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown terrain kind '{0}'")]
pub struct UnknownTerrainKind(pub String);

/// Fixed traversal costs and presentation of a terrain kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainInfo {
    kind: TerrainKind,
    display_name: &'static str,
    move_hours: f32,
    energy_cost: u8,
    asset_ref: Option<&'static str>,
}

impl TerrainInfo {
    const fn new(
        kind: TerrainKind,
        display_name: &'static str,
        move_hours: f32,
        energy_cost: u8,
        asset_ref: Option<&'static str>,
    ) -> Self {
        Self {
            kind,
            display_name,
            move_hours,
            energy_cost,
            asset_ref,
        }
    }

    const fn standard(kind: TerrainKind, display_name: &'static str, asset: &'static str) -> Self {
        Self::new(
            kind,
            display_name,
            BASE_MOVE_HOURS,
            BASE_ENERGY_COST,
            Some(asset),
        )
    }

    /// Terrain kind the entry describes.
    #[must_use]
    pub const fn kind(&self) -> TerrainKind {
        self.kind
    }

    /// Lower-case name used in narration.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Hours a mounted lord spends entering the terrain on a cardinal heading.
    #[must_use]
    pub const fn move_hours(&self) -> f32 {
        self.move_hours
    }

    /// Energy spent entering the terrain.
    #[must_use]
    pub const fn energy_cost(&self) -> u8 {
        self.energy_cost
    }

    /// Panorama sprite, if the terrain is drawn at all.
    #[must_use]
    pub const fn asset_ref(&self) -> Option<&'static str> {
        self.asset_ref
    }
}

/// Base move cost: one hour on horseback.
const BASE_MOVE_HOURS: f32 = 1.0;
const BASE_ENERGY_COST: u8 = 8;

const CATALOG: [TerrainInfo; 15] = [
    TerrainInfo::new(TerrainKind::Plains, "plains", BASE_MOVE_HOURS, BASE_ENERGY_COST, None),
    TerrainInfo::new(
        TerrainKind::Mountains,
        "mountains",
        3.0,
        64,
        Some("terrain_mountains.png"),
    ),
    TerrainInfo::standard(TerrainKind::Citadel, "citadel", "terrain_citadel.png"),
    TerrainInfo::new(
        TerrainKind::Forest,
        "forest",
        2.5,
        12,
        Some("terrain_forest.png"),
    ),
    TerrainInfo::standard(TerrainKind::Tower, "tower", "terrain_tower.png"),
    TerrainInfo::standard(TerrainKind::Henge, "henge", "terrain_henge.png"),
    TerrainInfo::standard(TerrainKind::Village, "village", "terrain_village.png"),
    TerrainInfo::new(TerrainKind::Downs, "downs", 1.5, 16, Some("terrain_downs.png")),
    TerrainInfo::standard(TerrainKind::Keep, "keep", "terrain_keep.png"),
    TerrainInfo::standard(TerrainKind::Snowhall, "snowhall", "terrain_snowhall.png"),
    TerrainInfo::standard(TerrainKind::Lake, "lake", "terrain_lake.png"),
    TerrainInfo::new(
        TerrainKind::FrozenWastes,
        "frozen wastes",
        999.0,
        BASE_ENERGY_COST,
        Some("terrain_wastes.png"),
    ),
    TerrainInfo::standard(TerrainKind::Ruin, "ruin", "terrain_ruin.png"),
    TerrainInfo::standard(TerrainKind::Lith, "lith", "terrain_lith.png"),
    TerrainInfo::standard(TerrainKind::Cavern, "cavern", "terrain_cavern.png"),
];

/// Read-only registry of terrain costs.
///
/// Costs are compiled in. Rebalancing means editing the table, never
/// patching entries at runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerrainCatalog;

impl TerrainCatalog {
    /// Looks up the entry for a terrain kind.
    #[must_use]
    pub const fn lookup(kind: TerrainKind) -> &'static TerrainInfo {
        kind.info()
    }

    /// Whether the terrain can never be entered.
    #[must_use]
    pub const fn is_impassable(kind: TerrainKind) -> bool {
        kind.is_impassable()
    }

    /// Iterates every entry in catalog order.
    pub fn iter() -> impl Iterator<Item = &'static TerrainInfo> {
        CATALOG.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{TerrainCatalog, TerrainKind, UnknownTerrainKind};

    #[test]
    fn catalog_order_matches_enum_discriminants() {
        for kind in TerrainKind::ALL {
            assert_eq!(TerrainCatalog::lookup(kind).kind(), kind);
        }
        assert_eq!(TerrainCatalog::iter().count(), TerrainKind::ALL.len());
    }

    #[test]
    fn only_the_frozen_wastes_are_impassable() {
        let impassable: Vec<_> = TerrainKind::ALL
            .into_iter()
            .filter(|kind| TerrainCatalog::is_impassable(*kind))
            .collect();
        assert_eq!(impassable, vec![TerrainKind::FrozenWastes]);
    }

    #[test]
    fn plains_are_never_drawn() {
        assert_eq!(TerrainKind::Plains.info().asset_ref(), None);
        assert!(TerrainKind::ALL
            .into_iter()
            .filter(|kind| *kind != TerrainKind::Plains)
            .all(|kind| kind.info().asset_ref().is_some()));
    }

    #[test]
    fn original_costs_are_preserved() {
        let forest = TerrainKind::Forest.info();
        assert_eq!(forest.move_hours(), 2.5);
        assert_eq!(forest.energy_cost(), 12);
        let mountains = TerrainKind::Mountains.info();
        assert_eq!(mountains.move_hours(), 3.0);
        assert_eq!(mountains.energy_cost(), 64);
        let downs = TerrainKind::Downs.info();
        assert_eq!(downs.move_hours(), 1.5);
        assert_eq!(downs.energy_cost(), 16);
        assert_eq!(TerrainKind::Village.info().move_hours(), 1.0);
        assert_eq!(TerrainKind::Village.info().energy_cost(), 8);
    }

    #[test]
    fn identifiers_resolve_from_world_file_spellings() {
        assert_eq!(
            TerrainKind::from_identifier("FROZEN_WASTES"),
            Ok(TerrainKind::FrozenWastes)
        );
        assert_eq!(
            TerrainKind::from_identifier(" forest "),
            Ok(TerrainKind::Forest)
        );
        assert_eq!(
            TerrainKind::from_identifier("img/terrain_downs.png"),
            Ok(TerrainKind::Downs)
        );
        assert_eq!(
            TerrainKind::from_identifier("terrain_wastes.png"),
            Ok(TerrainKind::FrozenWastes)
        );
    }

    #[test]
    fn every_catalog_entry_resolves_from_its_name() {
        for info in TerrainCatalog::iter() {
            assert_eq!(
                TerrainKind::from_identifier(info.display_name()),
                Ok(info.kind())
            );
        }
        assert_eq!(
            TerrainKind::from_identifier("wastes"),
            Ok(TerrainKind::FrozenWastes)
        );
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(
            TerrainKind::from_identifier("swamp"),
            Err(UnknownTerrainKind("swamp".to_owned()))
        );
    }
}
