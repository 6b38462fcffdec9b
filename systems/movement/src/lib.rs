#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Movement and time engine that steps lords across the map.
//!
//! A move either commits position, clock and energy together or leaves the
//! lord untouched. Rules are checked in a fixed order so that the frozen
//! wastes and nightfall bar travel even when cheating.

use midnight_core::{
    Actor, Coordinate, GameClockPolicy, Heading, MoveError, MoveOutcome, MoveResult, Rotation,
    TerrainCatalog, TerrainKind, WorldGrid,
};

/// Attempts to step the lord one square along their heading.
pub fn attempt_move(actor: &mut Actor, grid: &WorldGrid, policy: &GameClockPolicy) -> MoveResult {
    let from = actor.position();
    let to = destination(actor);
    let terrain = grid.tile_at(to).terrain();

    if TerrainCatalog::is_impassable(terrain) {
        return Err(MoveError::ImpassableTerrain);
    }
    if actor.clock() >= policy.nightfall_hour() {
        return Err(MoveError::TooLateInDay);
    }

    let hours = move_cost(actor, terrain, policy);

    if policy.cheat_mode() {
        actor.advance(to, 0.0, 0);
        return Ok(MoveOutcome {
            from,
            to,
            hours: 0.0,
            energy_spent: 0,
        });
    }

    if actor.clock() + hours > policy.nightfall_hour() {
        return Err(MoveError::InsufficientTime);
    }
    let energy_spent = TerrainCatalog::lookup(terrain).energy_cost();
    if actor.energy() < energy_spent {
        return Err(MoveError::InsufficientEnergy);
    }

    actor.advance(to, hours, energy_spent);
    Ok(MoveOutcome {
        from,
        to,
        hours,
        energy_spent,
    })
}

/// Square directly ahead of the lord.
#[must_use]
pub fn destination(actor: &Actor) -> Coordinate {
    actor.position() + actor.heading().step_offset()
}

/// Hours the lord would spend entering terrain along their current heading.
///
/// Walking multiplies the terrain cost by the on-foot factor and diagonal
/// headings by the intercardinal factor.
#[must_use]
pub fn move_cost(actor: &Actor, terrain: TerrainKind, policy: &GameClockPolicy) -> f32 {
    let mut hours = TerrainCatalog::lookup(terrain).move_hours();
    if !actor.mounted() {
        hours *= policy.on_foot_penalty_factor();
    }
    if !actor.heading().is_cardinal() {
        hours *= policy.intercardinal_penalty_factor();
    }
    hours
}

/// Turns the lord 45 degrees. Always succeeds and costs nothing.
pub fn rotate(actor: &mut Actor, rotation: Rotation) -> Heading {
    let heading = match rotation {
        Rotation::Clockwise => actor.heading().rotate_cw(),
        Rotation::CounterClockwise => actor.heading().rotate_ccw(),
    };
    actor.set_heading(heading);
    heading
}

#[cfg(test)]
mod tests {
    use super::{move_cost, rotate};
    use midnight_core::{
        Actor, ActorId, Coordinate, GameClockPolicy, Heading, Race, Rotation, TerrainKind,
    };

    fn rider(heading: Heading) -> Actor {
        Actor::new(ActorId::new(1), "Morkin", Race::HalfFey, Coordinate::new(5, 5))
            .with_heading(heading)
    }

    #[test]
    fn walking_doubles_the_terrain_cost() {
        let policy = GameClockPolicy::default();
        let walker = rider(Heading::North).with_mounted(false);
        assert_eq!(move_cost(&walker, TerrainKind::Forest, &policy), 5.0);
    }

    #[test]
    fn diagonal_headings_add_forty_percent() {
        let policy = GameClockPolicy::default();
        let cost = move_cost(&rider(Heading::NorthEast), TerrainKind::Plains, &policy);
        assert!((cost - 1.4).abs() < 1e-6, "unexpected diagonal cost {cost}");
    }

    #[test]
    fn penalties_compound() {
        let policy = GameClockPolicy::default();
        let walker = rider(Heading::SouthWest).with_mounted(false);
        let cost = move_cost(&walker, TerrainKind::Downs, &policy);
        assert!((cost - 4.2).abs() < 1e-5, "unexpected compounded cost {cost}");
    }

    #[test]
    fn rotate_replaces_the_heading() {
        let mut lord = rider(Heading::NorthWest);
        assert_eq!(rotate(&mut lord, Rotation::Clockwise), Heading::North);
        assert_eq!(lord.heading(), Heading::North);
        assert_eq!(
            rotate(&mut lord, Rotation::CounterClockwise),
            Heading::NorthWest
        );
    }
}
