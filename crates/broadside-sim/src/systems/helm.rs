//! Ship update system: helm input, AI policy, then movement.
//!
//! Ships are updated one at a time in registration order. The player's
//! held intents are applied directly; enemies run the policy from
//! broadside-ai against the footprints of the other ships. Each ship's
//! update sees the poses already produced by ships updated before it.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use broadside_core::commands::PlayerIntents;
use broadside_core::components::{AiHelm, Cannons, Footprint, Hull, PlayerHelm};
use broadside_core::enums::{BoardSide, Intent, TurnDirection};
use broadside_core::geometry::Obb;
use broadside_core::types::{Arena, EntityId, Position};

use broadside_ai::policy::{evaluate, PolicyContext};
use broadside_ai::sensors::SensorRig;

use crate::roster::Roster;
use crate::ship;

/// Active ships as `(id, entity)`, ordered by registration.
pub fn ships_in_order(world: &World) -> Vec<(EntityId, Entity)> {
    let mut ships: Vec<(EntityId, Entity)> = world
        .query::<(&EntityId, &Hull)>()
        .iter()
        .map(|(entity, (id, _))| (*id, entity))
        .collect();
    ships.sort_by_key(|(id, _)| *id);
    ships
}

/// Current footprint of a ship, if it is still in the world.
pub fn footprint_of(world: &World, entity: Entity) -> Option<Obb> {
    let position = *world.get::<&Position>(entity).ok()?;
    let hull = *world.get::<&Hull>(entity).ok()?;
    let footprint = *world.get::<&Footprint>(entity).ok()?;
    Some(ship::footprint_obb(&position, &hull, &footprint))
}

/// Run one update for every active ship.
pub fn run(
    world: &mut World,
    roster: &mut Roster,
    rng: &mut ChaCha8Rng,
    intents: &PlayerIntents,
    arena: &Arena,
) {
    let order = ships_in_order(world);
    let player = order
        .iter()
        .map(|(_, entity)| *entity)
        .find(|entity| world.get::<&PlayerHelm>(*entity).is_ok());

    for &(id, entity) in &order {
        if Some(entity) == player {
            apply_intents(world, entity, id, intents, roster);
        } else if world.get::<&AiHelm>(entity).is_ok() {
            run_policy(world, entity, id, &order, player, rng, arena, roster);
        }

        if let Ok((position, hull, cannons)) =
            world.query_one_mut::<(&mut Position, &Hull, &mut Cannons)>(entity)
        {
            ship::integrate(position, hull, cannons, arena);
        }
    }
}

/// Translate the held intent set 1:1 onto ship operations.
fn apply_intents(
    world: &mut World,
    entity: Entity,
    id: EntityId,
    intents: &PlayerIntents,
    roster: &mut Roster,
) {
    let Ok((position, hull, cannons)) =
        world.query_one_mut::<(&Position, &mut Hull, &mut Cannons)>(entity)
    else {
        return;
    };

    for intent in intents.iter() {
        match intent {
            Intent::Accelerate => ship::accelerate(hull),
            Intent::Decelerate => ship::decelerate(hull),
            Intent::TurnLeft => ship::turn(hull, TurnDirection::Left),
            Intent::TurnRight => ship::turn(hull, TurnDirection::Right),
            Intent::FireLeft => fire_board(roster, id, position, hull, cannons, BoardSide::Left),
            Intent::FireRight => {
                fire_board(roster, id, position, hull, cannons, BoardSide::Right)
            }
        }
    }
}

fn fire_board(
    roster: &mut Roster,
    id: EntityId,
    position: &Position,
    hull: &Hull,
    cannons: &mut Cannons,
    side: BoardSide,
) {
    if let Some(ball) = ship::fire(id, position, hull, cannons, side) {
        roster.register_cannon_ball(ball);
    }
}

/// Evaluate targeting and steering for one enemy, then apply them.
#[allow(clippy::too_many_arguments)]
fn run_policy(
    world: &mut World,
    entity: Entity,
    id: EntityId,
    order: &[(EntityId, Entity)],
    player: Option<Entity>,
    rng: &mut ChaCha8Rng,
    arena: &Arena,
    roster: &mut Roster,
) {
    let contacts: Vec<Obb> = order
        .iter()
        .filter(|(other, _)| *other != id)
        .filter_map(|(_, other)| footprint_of(world, *other))
        .collect();
    let player_footprint = player.and_then(|p| footprint_of(world, p));

    let Ok((position, hull, cannons, helm)) =
        world.query_one_mut::<(&Position, &mut Hull, &mut Cannons, &mut AiHelm)>(entity)
    else {
        return;
    };

    let ctx = PolicyContext {
        rig: SensorRig::mounted(position.to_vec(), hull.heading_deg),
        arena: *arena,
        contacts: &contacts,
        player: player_footprint,
        previous: helm.steering,
    };
    let decision = evaluate(&ctx, rng);

    if let Some(side) = decision.fire {
        fire_board(roster, id, position, hull, cannons, side);
    }

    helm.steering = decision.steering;
    if let Some(direction) = decision.steering.turn() {
        ship::turn(hull, direction);
    }
}
