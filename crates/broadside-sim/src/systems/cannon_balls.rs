//! Cannonball flight.
//!
//! Balls fly along the heading fixed at launch. A ball that leaves the
//! arena is queued for removal without detonating.

use hecs::World;

use broadside_core::components::CannonBall;
use broadside_core::constants::CANNONBALL_BLAST_SIZE;
use broadside_core::events::PresentationEvent;
use broadside_core::types::{Arena, EntityId, Position};

use crate::roster::Roster;

/// Advance one ball by one tick.
pub fn fly(position: &mut Position, ball: &CannonBall) {
    *position = position.advanced(ball.heading_deg, ball.speed);
}

/// Mark a ball as spent and request its blast effect.
///
/// Only the first call has any effect. Returns whether this call detonated
/// the ball.
pub fn detonate(
    id: EntityId,
    position: &Position,
    ball: &mut CannonBall,
    events: &mut Vec<PresentationEvent>,
) -> bool {
    if ball.detonated {
        return false;
    }
    ball.detonated = true;
    events.push(PresentationEvent::EntityDestroyed {
        entity: id,
        position: *position,
        size: CANNONBALL_BLAST_SIZE,
    });
    true
}

/// Move every active ball, retiring those now outside the arena.
pub fn run(world: &mut World, arena: &Arena, roster: &mut Roster) {
    for (entity, (position, ball)) in world.query_mut::<(&mut Position, &CannonBall)>() {
        fly(position, ball);
        if !arena.contains(position.to_vec()) {
            roster.retire_cannon_ball(entity);
        }
    }
}
