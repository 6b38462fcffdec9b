use serde::{Deserialize, Serialize};

/// Creature standing on a square of the map.
///
/// Occupants are opaque to movement. The panorama draws the one directly
/// ahead of a lord and narration may name it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupant {
    /// A pack of wolves.
    Wolves,
    /// Dragons.
    Dragons,
    /// Ice trolls from the north.
    IceTrolls,
    /// Skulkrin.
    Skulkrin,
    /// Wild horses, the only creatures that mean no harm.
    WildHorses,
}

impl Occupant {
    /// Every occupant kind.
    pub const ALL: [Occupant; 5] = [
        Occupant::Wolves,
        Occupant::Dragons,
        Occupant::IceTrolls,
        Occupant::Skulkrin,
        Occupant::WildHorses,
    ];

    /// Identifier used by world files.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Wolves => "wolves",
            Self::Dragons => "dragons",
            Self::IceTrolls => "ice_trolls",
            Self::Skulkrin => "skulkrin",
            Self::WildHorses => "wild_horses",
        }
    }

    /// Lower-case name used in narration.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Wolves => "wolves",
            Self::Dragons => "dragons",
            Self::IceTrolls => "ice trolls",
            Self::Skulkrin => "skulkrin",
            Self::WildHorses => "wild horses",
        }
    }

    /// Whether the creature is an enemy of the free.
    #[must_use]
    pub const fn is_hostile(self) -> bool {
        !matches!(self, Self::WildHorses)
    }

    /// Sprite drawn in the panorama foreground.
    #[must_use]
    pub const fn asset_ref(self) -> &'static str {
        match self {
            Self::Wolves => "wolf.png",
            Self::Dragons => "dragon.png",
            Self::IceTrolls => "ice_troll.png",
            Self::Skulkrin => "skulkrin.png",
            Self::WildHorses => "horse.png",
        }
    }

    /// Resolves an occupant from a world-file identifier, ignoring case.
    pub fn from_identifier(identifier: &str) -> Result<Self, UnknownOccupant> {
        let normalized = identifier.trim().to_ascii_lowercase().replace(' ', "_");
        let occupant = match normalized.as_str() {
            "wolves" | "wolf" => Self::Wolves,
            "dragons" | "dragon" => Self::Dragons,
            "ice_trolls" | "ice_troll" => Self::IceTrolls,
            "skulkrin" => Self::Skulkrin,
            "wild_horses" | "horses" | "horse" => Self::WildHorses,
            _ => return Err(UnknownOccupant(identifier.to_owned())),
        };
        Ok(occupant)
    }
}

/// Raised when a world file names a creature that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown occupant '{0}'")]
pub struct UnknownOccupant(pub String);

#[cfg(test)]
mod tests {
    use super::{Occupant, UnknownOccupant};

    #[test]
    fn identifiers_resolve_back_to_their_occupant() {
        for occupant in Occupant::ALL {
            assert_eq!(Occupant::from_identifier(occupant.identifier()), Ok(occupant));
        }
        assert_eq!(Occupant::from_identifier("ICE TROLLS"), Ok(Occupant::IceTrolls));
    }

    #[test]
    fn wild_horses_are_the_only_friendly_creatures() {
        let friendly: Vec<_> = Occupant::ALL
            .into_iter()
            .filter(|occupant| !occupant.is_hostile())
            .collect();
        assert_eq!(friendly, vec![Occupant::WildHorses]);
    }

    #[test]
    fn unknown_creatures_are_rejected() {
        assert_eq!(
            Occupant::from_identifier("orcs"),
            Err(UnknownOccupant("orcs".to_owned()))
        );
    }
}
