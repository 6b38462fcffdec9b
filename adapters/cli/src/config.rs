use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use midnight_core::{Coordinate, GameClockPolicy, TerrainKind, WorldGrid};
use serde::Deserialize;

/// Session settings read from an optional TOML file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) clock: ClockSection,
    pub(crate) movement: MovementSection,
    pub(crate) scenario: ScenarioSection,
}

/// Hours of the day and cheat mode.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ClockSection {
    pub(crate) dawn_hour: f32,
    pub(crate) nightfall_hour: f32,
    pub(crate) cheat_mode: bool,
}

impl Default for ClockSection {
    fn default() -> Self {
        let policy = GameClockPolicy::default();
        Self {
            dawn_hour: policy.dawn_hour(),
            nightfall_hour: policy.nightfall_hour(),
            cheat_mode: policy.cheat_mode(),
        }
    }
}

/// Travel cost multipliers and the terrain beyond the map.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct MovementSection {
    pub(crate) on_foot_penalty_factor: f32,
    pub(crate) intercardinal_penalty_factor: f32,
    pub(crate) world_border_terrain: TerrainKind,
}

impl Default for MovementSection {
    fn default() -> Self {
        let policy = GameClockPolicy::default();
        Self {
            on_foot_penalty_factor: policy.on_foot_penalty_factor(),
            intercardinal_penalty_factor: policy.intercardinal_penalty_factor(),
            world_border_terrain: policy.world_border_terrain(),
        }
    }
}

/// Overrides applied to the default scenario.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ScenarioSection {
    /// Square every lord starts on, as `[row, col]`.
    pub(crate) start: Option<[i32; 2]>,
}

impl Config {
    /// Reads and parses the configuration file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse configuration toml contents")
    }

    /// Builds the clock policy, letting `force_cheat` switch cheat mode on.
    pub(crate) fn policy(&self, force_cheat: bool) -> Result<GameClockPolicy> {
        let policy = GameClockPolicy::new(
            self.clock.dawn_hour,
            self.clock.nightfall_hour,
            self.movement.on_foot_penalty_factor,
            self.movement.intercardinal_penalty_factor,
        )
        .context("inconsistent clock or movement settings")?;
        Ok(policy
            .with_cheat_mode(self.clock.cheat_mode || force_cheat)
            .with_world_border_terrain(self.movement.world_border_terrain))
    }

    /// Starting square shared by every lord, if overridden.
    ///
    /// The square must lie on the map.
    pub(crate) fn start(&self, grid: &WorldGrid) -> Result<Option<Coordinate>> {
        let Some([row, col]) = self.scenario.start else {
            return Ok(None);
        };
        let start = Coordinate::new(row, col);
        if !grid.contains(start) {
            bail!(
                "scenario start ({row}, {col}) lies outside the {}x{} map",
                grid.rows(),
                grid.cols()
            );
        }
        Ok(Some(start))
    }
}
