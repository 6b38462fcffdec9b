use std::collections::HashSet;

use midnight_core::{Actor, ActorId, Coordinate, Heading, Race};

/// Identifier of Luxor the Moonprince in the default scenario.
pub const LUXOR: ActorId = ActorId::new(0);
/// Identifier of Morkin in the default scenario.
pub const MORKIN: ActorId = ActorId::new(1);
/// Identifier of Corleth the Fey in the default scenario.
pub const CORLETH: ActorId = ActorId::new(2);
/// Identifier of Rorthron the Wise in the default scenario.
pub const RORTHRON: ActorId = ActorId::new(3);

/// Lords a session starts with and the one selected first.
#[derive(Clone, Debug)]
pub struct Scenario {
    lords: Vec<Actor>,
    selected: Option<ActorId>,
}

impl Scenario {
    /// Creates a scenario that selects the first lord listed.
    #[must_use]
    pub fn new(lords: Vec<Actor>) -> Self {
        Self {
            lords,
            selected: None,
        }
    }

    /// Chooses which lord the player controls first.
    #[must_use]
    pub fn with_selected(mut self, actor: ActorId) -> Self {
        self.selected = Some(actor);
        self
    }

    /// Places every lord on the same starting square.
    #[must_use]
    pub fn with_start(self, start: Coordinate) -> Self {
        Self {
            lords: self
                .lords
                .into_iter()
                .map(|lord| lord.with_position(start))
                .collect(),
            selected: self.selected,
        }
    }

    /// Lords in roster order.
    #[must_use]
    pub fn lords(&self) -> &[Actor] {
        &self.lords
    }

    pub(crate) fn into_roster(self) -> Result<(Vec<Actor>, usize), ScenarioError> {
        if self.lords.is_empty() {
            return Err(ScenarioError::EmptyRoster);
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.lords.iter().find(|lord| !seen.insert(lord.id())) {
            return Err(ScenarioError::DuplicateActor(duplicate.id()));
        }
        let selected = match self.selected {
            Some(id) => self
                .lords
                .iter()
                .position(|lord| lord.id() == id)
                .ok_or(ScenarioError::UnknownSelection(id))?,
            None => 0,
        };
        Ok((self.lords, selected))
    }
}

impl Default for Scenario {
    /// The four free lords at the start of the war, Luxor selected.
    fn default() -> Self {
        let lords = vec![
            Actor::new(LUXOR, "Luxor", Race::Free, Coordinate::new(41, 13))
                .with_title("the Moonprince")
                .with_heading(Heading::NorthEast)
                .with_heraldry("shield_luxor.png"),
            Actor::new(MORKIN, "Morkin", Race::HalfFey, Coordinate::new(10, 10))
                .with_immune_to_wastes_fear(true)
                .with_heraldry("shield_morkin.png"),
            Actor::new(CORLETH, "Corleth", Race::Fey, Coordinate::new(10, 10))
                .with_title("the Fey")
                .with_heraldry("shield_corleth.png"),
            Actor::new(RORTHRON, "Rorthron", Race::Wise, Coordinate::new(10, 10))
                .with_title("the Wise")
                .with_heraldry("shield_rorthron.png"),
        ];
        Self::new(lords).with_selected(LUXOR)
    }
}

/// Errors raised when a scenario cannot start a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// The scenario lists no lords.
    #[error("a scenario needs at least one lord")]
    EmptyRoster,
    /// Two lords share an identifier.
    #[error("lord id {} is used more than once", .0.get())]
    DuplicateActor(ActorId),
    /// The initially selected lord is not in the roster.
    #[error("selected lord id {} is not in the roster", .0.get())]
    UnknownSelection(ActorId),
}
