//! Ship operations shared by the player and enemy variants.
//!
//! Helm, movement and cannon rules are pure functions over components so
//! they can be tested without a world. `damage` is the one world-facing
//! operation: it is where destruction feedback and removal are requested.

use hecs::{Entity, World};
use tracing::{debug, info};

use broadside_core::components::{CannonBall, Cannons, Footprint, Health, Hull};
use broadside_core::constants::*;
use broadside_core::enums::{BoardSide, TurnDirection};
use broadside_core::events::PresentationEvent;
use broadside_core::geometry::Obb;
use broadside_core::types::{Arena, EntityId, Position};

use crate::roster::{CannonBallBlueprint, Roster};

/// Change heading by one turning step.
pub fn turn(hull: &mut Hull, direction: TurnDirection) {
    match direction {
        TurnDirection::Left => hull.heading_deg -= TURN_RATE_DEG,
        TurnDirection::Right => hull.heading_deg += TURN_RATE_DEG,
    }
}

pub fn accelerate(hull: &mut Hull) {
    hull.speed = (hull.speed + SPEED_STEP).clamp(MIN_SPEED, MAX_SPEED);
}

pub fn decelerate(hull: &mut Hull) {
    hull.speed = (hull.speed - SPEED_STEP).clamp(MIN_SPEED, MAX_SPEED);
}

/// Whether a hull centred at `position` fits inside the arena.
pub fn within_bounds(position: &Position, arena: &Arena) -> bool {
    let half_length = HULL_LENGTH / 2.0;
    let half_beam = HULL_BEAM / 2.0;
    position.x >= half_length
        && position.x <= arena.width - half_length
        && position.y >= half_beam
        && position.y <= arena.height - half_beam
}

/// Move one tick along the heading and tick the reload counters down.
///
/// A move that would take the hull past the arena edge is dropped for
/// this tick. Reloads advance either way. Returns whether the ship moved.
pub fn integrate(
    position: &mut Position,
    hull: &Hull,
    cannons: &mut Cannons,
    arena: &Arena,
) -> bool {
    cannons.left_reload = (cannons.left_reload - 1).max(0);
    cannons.right_reload = (cannons.right_reload - 1).max(0);

    let next = position.advanced(hull.heading_deg, hull.speed);
    if within_bounds(&next, arena) {
        *position = next;
        true
    } else {
        false
    }
}

/// Fire one broadside if that battery is loaded.
///
/// The cannonball starts at the hull centre heading 90° off the bow to the
/// chosen side. Returns `None` while the battery is reloading.
pub fn fire(
    owner: EntityId,
    position: &Position,
    hull: &Hull,
    cannons: &mut Cannons,
    side: BoardSide,
) -> Option<CannonBallBlueprint> {
    let reload = cannons.reload_mut(side);
    if *reload > 0 {
        return None;
    }
    *reload = CANNON_RELOAD_TICKS;

    Some(CannonBallBlueprint {
        position: *position,
        ball: CannonBall {
            owner,
            side,
            damage: cannons.damage,
            heading_deg: hull.heading_deg + side.heading_offset(),
            speed: CANNONBALL_SPEED,
            radius: CANNONBALL_RADIUS,
            detonated: false,
        },
    })
}

/// Rotated collision footprint of a ship in arena coordinates.
pub fn footprint_obb(position: &Position, hull: &Hull, footprint: &Footprint) -> Obb {
    Obb::new(
        position.to_vec(),
        footprint.length,
        footprint.beam,
        hull.heading_deg,
    )
}

/// What a single damage application did to a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Still afloat.
    Damaged,
    /// Crossed from afloat to sunk with this hit.
    Sunk,
    /// Was already sunk earlier in the tick.
    AlreadySunk,
}

/// Subtract `amount` from health.
pub fn receive_damage(health: &mut Health, amount: i32) -> DamageOutcome {
    let was_afloat = !health.is_sunk();
    health.current -= amount;
    match (was_afloat, health.is_sunk()) {
        (true, true) => DamageOutcome::Sunk,
        (_, false) => DamageOutcome::Damaged,
        (false, true) => DamageOutcome::AlreadySunk,
    }
}

/// Apply damage to a ship in the world and emit the matching feedback.
///
/// On the hit that sinks the ship this requests its removal and a
/// hull-sized destruction effect. A ship already sunk this tick still
/// absorbs the damage silently.
pub fn damage(
    world: &mut World,
    entity: Entity,
    amount: i32,
    roster: &mut Roster,
    events: &mut Vec<PresentationEvent>,
) -> Option<DamageOutcome> {
    let (id, position, health) = world
        .query_one_mut::<(&EntityId, &Position, &mut Health)>(entity)
        .ok()?;
    let outcome = receive_damage(health, amount);

    match outcome {
        DamageOutcome::Sunk => {
            info!(ship = %id, x = position.x, y = position.y, "ship destroyed");
            events.push(PresentationEvent::EntityDestroyed {
                entity: *id,
                position: *position,
                size: HULL_LENGTH,
            });
            roster.retire_ship(entity);
        }
        DamageOutcome::Damaged => {
            debug!(ship = %id, health = health.current, "ship damaged");
            events.push(PresentationEvent::HealthChanged {
                ship: *id,
                current: health.current,
                max: health.max,
                critical: health.is_critical(),
            });
        }
        DamageOutcome::AlreadySunk => {}
    }
    Some(outcome)
}
