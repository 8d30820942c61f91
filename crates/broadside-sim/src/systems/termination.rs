//! End-of-match detection and projectile purge.

use hecs::{Entity, World};

use broadside_core::components::{CannonBall, Health, Hull, PlayerHelm};
use broadside_core::enums::Outcome;
use broadside_core::events::PresentationEvent;

use crate::roster::Roster;

/// Check the roster after the sweep.
///
/// The match ends once at most one ship is left or the player is sunk or
/// gone. Victory requires the player to be the last ship afloat; anything
/// else is defeat.
pub fn evaluate(world: &World) -> Option<Outcome> {
    let ships = {
        let mut q = world.query::<&Hull>();
        q.iter().count()
    };
    let player_afloat = world
        .query::<(&PlayerHelm, &Health)>()
        .iter()
        .next()
        .is_some_and(|(_, (_, health))| !health.is_sunk());

    if ships > 1 && player_afloat {
        return None;
    }
    if player_afloat && ships == 1 {
        Some(Outcome::Victory)
    } else {
        Some(Outcome::Defeat)
    }
}

/// Remove every cannonball still in play, emitting a detach for each.
/// Returns the number of balls removed from the world.
pub fn purge_cannon_balls(
    world: &mut World,
    roster: &mut Roster,
    events: &mut Vec<PresentationEvent>,
) -> usize {
    roster.discard_pending_cannon_balls();
    let balls: Vec<Entity> = world
        .query::<&CannonBall>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in &balls {
        roster.retire_cannon_ball(*entity);
    }
    roster.sweep(world, events).cannon_balls_removed
}
