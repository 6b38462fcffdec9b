use serde::{Deserialize, Serialize};

use crate::{Coordinate, Heading, TerrainKind, DEFAULT_BORDER_TERRAIN};

/// Largest energy reserve a lord can hold.
pub const MAX_ENERGY: u8 = 127;

/// Hour of the day at which every lord starts travelling.
pub const DEFAULT_DAWN_HOUR: f32 = 8.0;

const DEFAULT_NIGHTFALL_HOUR: f32 = 16.0;
const DEFAULT_ON_FOOT_PENALTY: f32 = 2.0;
const DEFAULT_INTERCARDINAL_PENALTY: f32 = 1.4;

/// Unique identifier assigned to a lord.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(u32);

impl ActorId {
    /// Creates a new identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// People a lord belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    /// The Free of the south.
    Free,
    /// Servants of Doomdark.
    Foul,
    /// The Fey of the forests.
    Fey,
    /// Born of one Fey parent.
    HalfFey,
    /// The Targ.
    Targ,
    /// The Wise.
    Wise,
    /// Skulkrin.
    Skulkrin,
    /// Dragons.
    Dragon,
}

/// Lord standing somewhere on the map.
///
/// Position, clock and energy only change together through
/// [`Actor::advance`]; the heading only changes through
/// [`Actor::set_heading`].
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    id: ActorId,
    name: String,
    title: Option<String>,
    heraldry: Option<String>,
    race: Race,
    position: Coordinate,
    heading: Heading,
    mounted: bool,
    energy: u8,
    clock: f32,
    immune_to_wastes_fear: bool,
}

impl Actor {
    /// Creates a mounted lord facing north at dawn with full energy.
    #[must_use]
    pub fn new(id: ActorId, name: impl Into<String>, race: Race, position: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            heraldry: None,
            race,
            position,
            heading: Heading::North,
            mounted: true,
            energy: MAX_ENERGY,
            clock: DEFAULT_DAWN_HOUR,
            immune_to_wastes_fear: false,
        }
    }

    /// Sets the epithet that follows the name, e.g. "the Moonprince".
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the shield asset shown beside the lord's name.
    #[must_use]
    pub fn with_heraldry(mut self, asset: impl Into<String>) -> Self {
        self.heraldry = Some(asset.into());
        self
    }

    /// Sets the starting heading.
    #[must_use]
    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }

    /// Sets whether the lord rides.
    #[must_use]
    pub fn with_mounted(mut self, mounted: bool) -> Self {
        self.mounted = mounted;
        self
    }

    /// Sets the energy reserve, clamped to [`MAX_ENERGY`].
    #[must_use]
    pub fn with_energy(mut self, energy: u8) -> Self {
        self.energy = energy.min(MAX_ENERGY);
        self
    }

    /// Sets the hour of the day on the lord's clock.
    #[must_use]
    pub fn with_clock(mut self, clock: f32) -> Self {
        self.clock = clock;
        self
    }

    /// Marks the lord as immune to the fear of the Frozen Wastes.
    #[must_use]
    pub fn with_immune_to_wastes_fear(mut self, immune: bool) -> Self {
        self.immune_to_wastes_fear = immune;
        self
    }

    /// Moves the lord to a new starting square before the session begins.
    #[must_use]
    pub fn with_position(mut self, position: Coordinate) -> Self {
        self.position = position;
        self
    }

    /// Identifier of the lord.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// Given name of the lord.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Epithet following the name, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Shield asset, if any.
    #[must_use]
    pub fn heraldry(&self) -> Option<&str> {
        self.heraldry.as_deref()
    }

    /// People the lord belongs to.
    #[must_use]
    pub const fn race(&self) -> Race {
        self.race
    }

    /// Square the lord stands on.
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Heading the lord faces.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Whether the lord rides.
    #[must_use]
    pub const fn mounted(&self) -> bool {
        self.mounted
    }

    /// Remaining energy in `0..=127`.
    #[must_use]
    pub const fn energy(&self) -> u8 {
        self.energy
    }

    /// Hour of the day on the lord's clock.
    #[must_use]
    pub const fn clock(&self) -> f32 {
        self.clock
    }

    /// Whether the lord ignores the fear of the Frozen Wastes.
    #[must_use]
    pub const fn immune_to_wastes_fear(&self) -> bool {
        self.immune_to_wastes_fear
    }

    /// Commits a move: position, clock and energy change in one step.
    ///
    /// Energy saturates at zero.
    pub fn advance(&mut self, to: Coordinate, hours: f32, energy_spent: u8) {
        self.position = to;
        self.clock += hours;
        self.energy = self.energy.saturating_sub(energy_spent);
    }

    /// Faces the lord towards a new heading.
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }
}

/// Session-wide rules of the day and of travel.
///
/// Supplied once when a session starts and read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameClockPolicy {
    dawn_hour: f32,
    nightfall_hour: f32,
    cheat_mode: bool,
    on_foot_penalty_factor: f32,
    intercardinal_penalty_factor: f32,
    world_border_terrain: TerrainKind,
}

impl GameClockPolicy {
    /// Creates a policy, rejecting inconsistent values.
    pub fn new(
        dawn_hour: f32,
        nightfall_hour: f32,
        on_foot_penalty_factor: f32,
        intercardinal_penalty_factor: f32,
    ) -> Result<Self, PolicyError> {
        if !(nightfall_hour > dawn_hour) {
            return Err(PolicyError::NightfallBeforeDawn {
                dawn_hour,
                nightfall_hour,
            });
        }
        for (name, factor) in [
            ("on_foot_penalty_factor", on_foot_penalty_factor),
            ("intercardinal_penalty_factor", intercardinal_penalty_factor),
        ] {
            if !(factor > 0.0) || !factor.is_finite() {
                return Err(PolicyError::NonPositivePenalty { name, factor });
            }
        }
        Ok(Self {
            dawn_hour,
            nightfall_hour,
            on_foot_penalty_factor,
            intercardinal_penalty_factor,
            ..Self::default()
        })
    }

    /// Enables or disables cost-free travel.
    #[must_use]
    pub const fn with_cheat_mode(mut self, cheat_mode: bool) -> Self {
        self.cheat_mode = cheat_mode;
        self
    }

    /// Sets the terrain substituted beyond the edge of the map.
    #[must_use]
    pub const fn with_world_border_terrain(mut self, terrain: TerrainKind) -> Self {
        self.world_border_terrain = terrain;
        self
    }

    /// Hour at which the day begins.
    #[must_use]
    pub const fn dawn_hour(&self) -> f32 {
        self.dawn_hour
    }

    /// Hour after which no one may travel.
    #[must_use]
    pub const fn nightfall_hour(&self) -> f32 {
        self.nightfall_hour
    }

    /// Whether moves are free of time and energy.
    #[must_use]
    pub const fn cheat_mode(&self) -> bool {
        self.cheat_mode
    }

    /// Multiplier applied to move hours for lords on foot.
    #[must_use]
    pub const fn on_foot_penalty_factor(&self) -> f32 {
        self.on_foot_penalty_factor
    }

    /// Multiplier applied to move hours on diagonal headings.
    #[must_use]
    pub const fn intercardinal_penalty_factor(&self) -> f32 {
        self.intercardinal_penalty_factor
    }

    /// Terrain substituted beyond the edge of the map.
    #[must_use]
    pub const fn world_border_terrain(&self) -> TerrainKind {
        self.world_border_terrain
    }
}

impl Default for GameClockPolicy {
    fn default() -> Self {
        Self {
            dawn_hour: DEFAULT_DAWN_HOUR,
            nightfall_hour: DEFAULT_NIGHTFALL_HOUR,
            cheat_mode: false,
            on_foot_penalty_factor: DEFAULT_ON_FOOT_PENALTY,
            intercardinal_penalty_factor: DEFAULT_INTERCARDINAL_PENALTY,
            world_border_terrain: DEFAULT_BORDER_TERRAIN,
        }
    }
}

/// Errors raised when a clock policy is inconsistent.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// Night would fall before, or at, dawn.
    #[error("nightfall hour {nightfall_hour} must come after dawn hour {dawn_hour}")]
    NightfallBeforeDawn {
        /// Configured dawn hour.
        dawn_hour: f32,
        /// Configured nightfall hour.
        nightfall_hour: f32,
    },
    /// A cost multiplier is zero, negative or not a number.
    #[error("{name} must be a positive number, got {factor}")]
    NonPositivePenalty {
        /// Name of the offending setting.
        name: &'static str,
        /// Rejected value.
        factor: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::{Actor, ActorId, GameClockPolicy, PolicyError, Race, MAX_ENERGY};
    use crate::{Coordinate, Heading};

    fn luxor() -> Actor {
        Actor::new(ActorId::new(0), "Luxor", Race::Free, Coordinate::new(41, 13))
            .with_title("the Moonprince")
            .with_heading(Heading::NorthEast)
    }

    #[test]
    fn new_lords_start_mounted_at_dawn_with_full_energy() {
        let lord = luxor();
        assert!(lord.mounted());
        assert_eq!(lord.energy(), MAX_ENERGY);
        assert_eq!(lord.clock(), 8.0);
        assert_eq!(lord.title(), Some("the Moonprince"));
        assert_eq!(lord.heading(), Heading::NorthEast);
    }

    #[test]
    fn energy_is_clamped_to_maximum() {
        assert_eq!(luxor().with_energy(200).energy(), MAX_ENERGY);
    }

    #[test]
    fn advance_commits_every_field_together() {
        let mut lord = luxor();
        lord.advance(Coordinate::new(40, 14), 1.4, 8);
        assert_eq!(lord.position(), Coordinate::new(40, 14));
        assert!((lord.clock() - 9.4).abs() < 1e-5);
        assert_eq!(lord.energy(), 119);
    }

    #[test]
    fn advance_saturates_energy_at_zero() {
        let mut lord = luxor().with_energy(4);
        lord.advance(Coordinate::new(40, 14), 1.0, 8);
        assert_eq!(lord.energy(), 0);
    }

    #[test]
    fn default_policy_matches_the_original_day() {
        let policy = GameClockPolicy::default();
        assert_eq!(policy.dawn_hour(), 8.0);
        assert_eq!(policy.nightfall_hour(), 16.0);
        assert!(!policy.cheat_mode());
        assert_eq!(policy.on_foot_penalty_factor(), 2.0);
        assert_eq!(policy.intercardinal_penalty_factor(), 1.4);
    }

    #[test]
    fn policy_rejects_nightfall_before_dawn() {
        assert_eq!(
            GameClockPolicy::new(16.0, 8.0, 2.0, 1.4),
            Err(PolicyError::NightfallBeforeDawn {
                dawn_hour: 16.0,
                nightfall_hour: 8.0
            })
        );
    }

    #[test]
    fn policy_rejects_non_positive_factors() {
        assert!(matches!(
            GameClockPolicy::new(8.0, 16.0, 0.0, 1.4),
            Err(PolicyError::NonPositivePenalty {
                name: "on_foot_penalty_factor",
                ..
            })
        ));
        assert!(matches!(
            GameClockPolicy::new(8.0, 16.0, 2.0, f32::NAN),
            Err(PolicyError::NonPositivePenalty {
                name: "intercardinal_penalty_factor",
                ..
            })
        ));
    }
}
