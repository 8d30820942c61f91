//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use broadside_core::components::*;
use broadside_core::enums::*;
use broadside_core::events::PresentationEvent;
use broadside_core::state::*;
use broadside_core::types::{EntityId, Position, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    outcome: Option<Outcome>,
    events: Vec<PresentationEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        outcome,
        ships: build_ships(world),
        cannon_balls: build_cannon_balls(world),
        events,
    }
}

fn build_ships(world: &World) -> Vec<ShipView> {
    let mut ships: Vec<ShipView> = world
        .query::<(
            &EntityId,
            &Position,
            &Hull,
            &Health,
            &Cannons,
            &HullModel,
            Option<&PlayerHelm>,
        )>()
        .iter()
        .map(
            |(_, (id, pos, hull, health, cannons, model, player))| ShipView {
                id: *id,
                kind: if player.is_some() {
                    EntityKind::PlayerShip
                } else {
                    EntityKind::EnemyShip
                },
                model: model.0,
                position: *pos,
                heading: hull.heading_deg,
                speed: hull.speed,
                health: health.current,
                max_health: health.max,
                left_reload: cannons.left_reload,
                right_reload: cannons.right_reload,
            },
        )
        .collect();

    ships.sort_by_key(|s| s.id);
    ships
}

fn build_cannon_balls(world: &World) -> Vec<CannonBallView> {
    let mut balls: Vec<CannonBallView> = world
        .query::<(&EntityId, &Position, &CannonBall)>()
        .iter()
        .map(|(_, (id, pos, ball))| CannonBallView {
            id: *id,
            owner: ball.owner,
            position: *pos,
            heading: ball.heading_deg,
        })
        .collect();

    balls.sort_by_key(|b| b.id);
    balls
}
