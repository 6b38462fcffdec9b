use midnight_core::{ActorId, Event};
use midnight_rendering::{FrameControl, FrameInput, LordPresentation, Scene};
use midnight_system_panorama as panorama;
use midnight_world::{self as world, query, World};
use tracing::{debug, info};

use crate::keymap::{action_for_key, KeyAction};

/// Couples the world to the presented scene.
#[derive(Debug)]
pub(crate) struct Session {
    world: World,
    events: Vec<Event>,
}

impl Session {
    pub(crate) fn new(world: World) -> Self {
        Self {
            world,
            events: Vec::new(),
        }
    }

    /// Applies the key pressed this frame and refreshes the scene.
    pub(crate) fn handle(&mut self, input: FrameInput, scene: &mut Scene) -> FrameControl {
        let Some(key) = input.key else {
            return FrameControl::Continue;
        };
        let command = match action_for_key(key) {
            KeyAction::Command(command) => command,
            KeyAction::Quit => return FrameControl::Exit,
            KeyAction::Ignored => return FrameControl::Continue,
        };

        self.events.clear();
        world::apply(&mut self.world, command, &mut self.events);
        let status = self.report_events();
        *scene = self.scene(status);
        FrameControl::Continue
    }

    /// Scene for the selected lord, with an optional status line.
    pub(crate) fn scene(&self, status: Option<String>) -> Scene {
        let lord = query::selected_actor(&self.world);
        let grid = query::grid(&self.world);
        Scene::new(
            LordPresentation {
                name_and_title: panorama::describe_lord(lord),
                heraldry: lord.heraldry().map(str::to_owned),
            },
            panorama::project(lord, grid),
            panorama::describe_location(lord, grid),
            panorama::describe_time_and_energy(lord, query::policy(&self.world)),
            status,
        )
    }

    fn report_events(&self) -> Option<String> {
        let mut status = None;
        for event in &self.events {
            match *event {
                Event::ActorMoved {
                    actor,
                    from,
                    to,
                    hours,
                    energy_spent,
                } => {
                    info!(
                        lord = self.name_of(actor),
                        from = ?from,
                        to = ?to,
                        hours,
                        energy_spent,
                        "lord travelled"
                    );
                }
                Event::MoveRejected { actor, reason } => {
                    debug!(lord = self.name_of(actor), %reason, "move refused");
                    status = Some(format!("{} cannot travel: {reason}.", self.name_of(actor)));
                }
                Event::HeadingChanged { actor, heading } => {
                    debug!(lord = self.name_of(actor), heading = heading.name(), "lord turned");
                }
                Event::ActorSelected { actor } => {
                    debug!(lord = self.name_of(actor), "lord selected");
                }
                Event::SelectionRejected { actor } => {
                    debug!(id = actor.get(), "selection refused");
                    status = Some("No lord answers to that call.".to_owned());
                }
            }
        }
        status
    }

    fn name_of(&self, actor: ActorId) -> &str {
        query::actor(&self.world, actor).map_or("someone", |lord| lord.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use midnight_core::{
        Coordinate, GameClockPolicy, TerrainKind, WorldGrid, DEFAULT_BORDER_TERRAIN,
    };
    use midnight_rendering::{FrameControl, FrameInput};
    use midnight_world::{query, Scenario, World};

    fn session() -> Session {
        let grid = WorldGrid::uniform(12, 12, TerrainKind::Forest, DEFAULT_BORDER_TERRAIN);
        let scenario = Scenario::default().with_start(Coordinate::new(8, 6));
        let world =
            World::new(grid, scenario, GameClockPolicy::default()).expect("scenario is valid");
        Session::new(world)
    }

    fn press(session: &mut Session, key: char) -> (FrameControl, Option<String>) {
        let mut scene = session.scene(None);
        let control = session.handle(FrameInput { key: Some(key) }, &mut scene);
        (control, scene.status)
    }

    #[test]
    fn keys_drive_the_selected_lord() {
        let mut session = session();
        let _ = press(&mut session, '1');
        let (control, status) = press(&mut session, 'q');
        assert_eq!(control, FrameControl::Continue);
        assert_eq!(status, None);
        let luxor = query::selected_actor(&session.world);
        assert_eq!(luxor.position(), Coordinate::new(7, 6));
        assert_eq!(luxor.clock(), 10.5);
    }

    #[test]
    fn refused_moves_set_the_status_line() {
        let mut session = session();
        let _ = press(&mut session, '1');
        for _ in 0..3 {
            let _ = press(&mut session, 'q');
        }
        let (_, status) = press(&mut session, 'q');
        assert_eq!(
            status.as_deref(),
            Some("Luxor cannot travel: not enough hours remain in the day.")
        );
    }

    #[test]
    fn scene_follows_the_selection() {
        let mut session = session();
        let _ = press(&mut session, 'v');
        let scene = session.scene(None);
        assert!(scene.lord.name_and_title.starts_with("Morkin"));
        assert!(scene.time_and_energy.starts_with("It is dawn"));
    }

    #[test]
    fn quit_keys_end_the_session() {
        let mut session = session();
        assert_eq!(press(&mut session, 'x').0, FrameControl::Exit);
        assert_eq!(press(&mut session, '?').0, FrameControl::Continue);
    }
}
