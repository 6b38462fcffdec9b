#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for the Lords of Midnight.
//!
//! A [`World`] owns the map, the roster of lords, the currently selected
//! lord and the clock policy. Adapters mutate it only through [`apply`] or
//! the per-command methods, and read it through [`query`].

mod document;
mod scenario;

use midnight_core::{
    Actor, ActorId, Command, Event, GameClockPolicy, Heading, MoveResult, Rotation, WorldGrid,
};
use midnight_system_movement as movement;

pub use document::{build_grid, TileSpec, WorldBuildError};
pub use scenario::{Scenario, ScenarioError, CORLETH, LUXOR, MORKIN, RORTHRON};

/// Running session: map, lords, selection and rules of the day.
#[derive(Debug)]
pub struct World {
    grid: WorldGrid,
    lords: Vec<Actor>,
    selected: usize,
    policy: GameClockPolicy,
}

impl World {
    /// Starts a session on the provided map with the scenario's lords.
    pub fn new(
        grid: WorldGrid,
        scenario: Scenario,
        policy: GameClockPolicy,
    ) -> Result<Self, ScenarioError> {
        let (lords, selected) = scenario.into_roster()?;
        Ok(Self {
            grid,
            lords,
            selected,
            policy,
        })
    }

    /// Steps the selected lord one square forward.
    pub fn move_forward(&mut self) -> MoveResult {
        let lord = &mut self.lords[self.selected];
        movement::attempt_move(lord, &self.grid, &self.policy)
    }

    /// Turns the selected lord 45 degrees.
    pub fn rotate(&mut self, rotation: Rotation) -> Heading {
        movement::rotate(&mut self.lords[self.selected], rotation)
    }

    /// Faces the selected lord towards an absolute heading.
    pub fn set_heading(&mut self, heading: Heading) {
        self.lords[self.selected].set_heading(heading);
    }

    /// Hands control to another lord.
    pub fn select_actor(&mut self, actor: ActorId) -> Result<(), UnknownActor> {
        let index = self
            .lords
            .iter()
            .position(|lord| lord.id() == actor)
            .ok_or(UnknownActor(actor))?;
        self.selected = index;
        Ok(())
    }

    fn selected_id(&self) -> ActorId {
        self.lords[self.selected].id()
    }
}

/// Raised when a selection names a lord absent from the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no lord with id {} is in the roster", .0.get())]
pub struct UnknownActor(pub ActorId);

/// Applies the provided command to the world, reporting the outcome as events.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    let actor = world.selected_id();
    match command {
        Command::MoveForward => match world.move_forward() {
            Ok(outcome) => out_events.push(Event::ActorMoved {
                actor,
                from: outcome.from,
                to: outcome.to,
                hours: outcome.hours,
                energy_spent: outcome.energy_spent,
            }),
            Err(reason) => out_events.push(Event::MoveRejected { actor, reason }),
        },
        Command::RotateClockwise => {
            let heading = world.rotate(Rotation::Clockwise);
            out_events.push(Event::HeadingChanged { actor, heading });
        }
        Command::RotateCounterClockwise => {
            let heading = world.rotate(Rotation::CounterClockwise);
            out_events.push(Event::HeadingChanged { actor, heading });
        }
        Command::SetHeading { heading } => {
            world.set_heading(heading);
            out_events.push(Event::HeadingChanged { actor, heading });
        }
        Command::SelectActor { actor: requested } => match world.select_actor(requested) {
            Ok(()) => out_events.push(Event::ActorSelected { actor: requested }),
            Err(UnknownActor(actor)) => out_events.push(Event::SelectionRejected { actor }),
        },
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use midnight_core::{Actor, ActorId, GameClockPolicy, WorldGrid};

    /// Provides read-only access to the map.
    #[must_use]
    pub fn grid(world: &World) -> &WorldGrid {
        &world.grid
    }

    /// Rules of the day the session was started with.
    #[must_use]
    pub fn policy(world: &World) -> &GameClockPolicy {
        &world.policy
    }

    /// Lord currently under the player's control.
    #[must_use]
    pub fn selected_actor(world: &World) -> &Actor {
        &world.lords[world.selected]
    }

    /// Looks up a lord by identifier.
    #[must_use]
    pub fn actor(world: &World, id: ActorId) -> Option<&Actor> {
        world.lords.iter().find(|lord| lord.id() == id)
    }

    /// Every lord in roster order.
    #[must_use]
    pub fn actors(world: &World) -> &[Actor] {
        &world.lords
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, query, Scenario, World};
    use midnight_core::{
        Actor, ActorId, Command, Coordinate, Event, GameClockPolicy, Heading, MoveError, Race,
        TerrainKind, WorldGrid, DEFAULT_BORDER_TERRAIN,
    };

    fn two_lords() -> World {
        let grid = WorldGrid::uniform(4, 4, TerrainKind::Plains, DEFAULT_BORDER_TERRAIN);
        let scenario = Scenario::new(vec![
            Actor::new(ActorId::new(7), "Luxor", Race::Free, Coordinate::new(3, 1)),
            Actor::new(ActorId::new(9), "Morkin", Race::HalfFey, Coordinate::new(0, 0)),
        ]);
        World::new(grid, scenario, GameClockPolicy::default()).expect("roster is valid")
    }

    #[test]
    fn first_lord_is_selected_initially() {
        let world = two_lords();
        assert_eq!(query::selected_actor(&world).name(), "Luxor");
    }

    #[test]
    fn commands_act_on_the_selected_lord_only() {
        let mut world = two_lords();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::SelectActor {
                actor: ActorId::new(9),
            },
            &mut events,
        );
        apply(&mut world, Command::RotateClockwise, &mut events);

        assert_eq!(
            events,
            vec![
                Event::ActorSelected {
                    actor: ActorId::new(9)
                },
                Event::HeadingChanged {
                    actor: ActorId::new(9),
                    heading: Heading::NorthEast
                },
            ]
        );
        let luxor = query::actor(&world, ActorId::new(7)).expect("luxor present");
        assert_eq!(luxor.heading(), Heading::North);
    }

    #[test]
    fn unknown_selection_keeps_the_current_lord() {
        let mut world = two_lords();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::SelectActor {
                actor: ActorId::new(3),
            },
            &mut events,
        );
        assert_eq!(
            events,
            vec![Event::SelectionRejected {
                actor: ActorId::new(3)
            }]
        );
        assert_eq!(query::selected_actor(&world).id(), ActorId::new(7));
    }

    #[test]
    fn rejected_moves_are_reported_with_their_reason() {
        let mut world = two_lords();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::SelectActor {
                actor: ActorId::new(9),
            },
            &mut events,
        );
        events.clear();
        apply(&mut world, Command::MoveForward, &mut events);
        assert_eq!(
            events,
            vec![Event::MoveRejected {
                actor: ActorId::new(9),
                reason: MoveError::ImpassableTerrain
            }]
        );
    }
}
