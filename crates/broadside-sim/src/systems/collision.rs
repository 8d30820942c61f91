//! Collision and hit resolution.
//!
//! Ramming is resolved first: every unordered pair of distinct ships with
//! overlapping footprints takes the ramming penalty on both hulls. Hits
//! follow: each live cannonball damages at most the first ship, in
//! registration order, whose footprint contains the ball's centre. Firing
//! ships are never hit by their own balls.

use hecs::{Entity, World};
use tracing::debug;

use broadside_core::components::CannonBall;
use broadside_core::constants::RAMMING_DAMAGE;
use broadside_core::events::PresentationEvent;
use broadside_core::geometry::Obb;
use broadside_core::types::{EntityId, Position};

use crate::roster::Roster;
use crate::ship;
use crate::systems::cannon_balls;
use crate::systems::helm::{footprint_of, ships_in_order};

/// A ship as seen by collision tests.
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub id: EntityId,
    pub entity: Entity,
    pub footprint: Obb,
}

/// Ship-vs-ship overlap. A ship never collides with itself.
pub fn ships_collide(a: &Collider, b: &Collider) -> bool {
    if a.id == b.id {
        return false;
    }
    a.footprint.overlaps(&b.footprint)
}

/// Whether a ball centred at `position` hits `ship`.
/// A ball never hits the ship that fired it.
pub fn ball_hits(ball: &CannonBall, position: &Position, ship: &Collider) -> bool {
    if ball.owner == ship.id {
        return false;
    }
    ship.footprint.contains(position.to_vec())
}

/// Active ships with their current footprints, in registration order.
pub fn colliders(world: &World) -> Vec<Collider> {
    ships_in_order(world)
        .into_iter()
        .filter_map(|(id, entity)| {
            footprint_of(world, entity).map(|footprint| Collider {
                id,
                entity,
                footprint,
            })
        })
        .collect()
}

/// Apply the ramming penalty to both ships of every overlapping pair.
pub fn resolve_ramming(
    world: &mut World,
    roster: &mut Roster,
    events: &mut Vec<PresentationEvent>,
) -> usize {
    let ships = colliders(world);
    let mut pairs = Vec::new();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            if ships_collide(a, b) {
                pairs.push((*a, *b));
            }
        }
    }

    for (a, b) in &pairs {
        debug!(a = %a.id, b = %b.id, "ships rammed");
        ship::damage(world, a.entity, RAMMING_DAMAGE, roster, events);
        ship::damage(world, b.entity, RAMMING_DAMAGE, roster, events);
    }
    pairs.len()
}

/// Resolve cannonball hits. Returns the number of hits applied.
pub fn resolve_hits(
    world: &mut World,
    roster: &mut Roster,
    events: &mut Vec<PresentationEvent>,
) -> usize {
    let ships = colliders(world);

    let mut balls: Vec<(EntityId, Entity, Position, CannonBall)> = world
        .query::<(&EntityId, &Position, &CannonBall)>()
        .iter()
        .filter(|(_, (_, _, ball))| !ball.detonated)
        .map(|(entity, (id, position, ball))| (*id, entity, *position, *ball))
        .collect();
    balls.sort_by_key(|(id, ..)| *id);

    let mut hits = 0;
    for (ball_id, ball_entity, position, ball) in balls {
        let Some(target) = ships.iter().find(|s| ball_hits(&ball, &position, s)) else {
            continue;
        };

        debug!(ball = %ball_id, ship = %target.id, damage = ball.damage, "cannonball hit");
        ship::damage(world, target.entity, ball.damage, roster, events);
        if let Ok(live) = world.query_one_mut::<&mut CannonBall>(ball_entity) {
            cannon_balls::detonate(ball_id, &position, live, events);
        }
        roster.retire_cannon_ball(ball_entity);
        hits += 1;
    }
    hits
}
