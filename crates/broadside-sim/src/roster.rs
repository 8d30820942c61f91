//! Deferred roster of ships and cannonballs.
//!
//! Systems never spawn or despawn while they iterate the world. They queue
//! additions and removals here, and `sweep` applies both at the end of the
//! tick. Identities are handed out when an entity is queued, so a freshly
//! fired cannonball already knows its `EntityId` before it exists.

use std::collections::HashSet;

use hecs::{Entity, World};
use tracing::trace;

use broadside_core::components::*;
use broadside_core::enums::EntityKind;
use broadside_core::events::PresentationEvent;
use broadside_core::types::{EntityId, Position};

/// Which helm a ship is spawned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelmKind {
    Player,
    Ai,
}

/// Everything needed to spawn a ship at sweep time.
#[derive(Debug, Clone, Copy)]
pub struct ShipBlueprint {
    pub position: Position,
    pub hull: Hull,
    pub helm: HelmKind,
    pub model: u8,
}

/// A cannonball waiting to enter the world.
#[derive(Debug, Clone, Copy)]
pub struct CannonBallBlueprint {
    pub position: Position,
    pub ball: CannonBall,
}

/// Pending-add and pending-remove sets for one entity collection.
/// Removals keep queue order; `retiring` only answers membership.
#[derive(Debug)]
struct Pending<T> {
    add: Vec<(EntityId, T)>,
    remove: Vec<Entity>,
    retiring: HashSet<Entity>,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self {
            add: Vec::new(),
            remove: Vec::new(),
            retiring: HashSet::new(),
        }
    }
}

impl<T> Pending<T> {
    fn retire(&mut self, entity: Entity) {
        if self.retiring.insert(entity) {
            self.remove.push(entity);
        }
    }

    fn drain_removals(&mut self) -> Vec<Entity> {
        self.retiring.clear();
        std::mem::take(&mut self.remove)
    }
}

/// Counts applied by one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub ships_added: usize,
    pub ships_removed: usize,
    pub cannon_balls_added: usize,
    pub cannon_balls_removed: usize,
}

/// Deferred add/remove buffers plus the identity counter.
#[derive(Debug, Default)]
pub struct Roster {
    next_id: u32,
    ships: Pending<ShipBlueprint>,
    cannon_balls: Pending<CannonBallBlueprint>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a ship for insertion at the next sweep.
    pub fn register_ship(&mut self, blueprint: ShipBlueprint) -> EntityId {
        let id = self.allocate_id();
        self.ships.add.push((id, blueprint));
        id
    }

    /// Queue a cannonball for insertion at the next sweep.
    pub fn register_cannon_ball(&mut self, blueprint: CannonBallBlueprint) -> EntityId {
        let id = self.allocate_id();
        self.cannon_balls.add.push((id, blueprint));
        id
    }

    /// Queue an active ship for removal. Repeated requests collapse into one.
    pub fn retire_ship(&mut self, entity: Entity) {
        self.ships.retire(entity);
    }

    /// Queue an active cannonball for removal. Repeated requests collapse into one.
    pub fn retire_cannon_ball(&mut self, entity: Entity) {
        self.cannon_balls.retire(entity);
    }

    pub fn is_retiring(&self, entity: Entity) -> bool {
        self.ships.retiring.contains(&entity) || self.cannon_balls.retiring.contains(&entity)
    }

    /// Drop cannonballs that were queued but never entered the world.
    pub fn discard_pending_cannon_balls(&mut self) -> usize {
        let discarded = self.cannon_balls.add.len();
        self.cannon_balls.add.clear();
        discarded
    }

    /// Apply all pending removals, then all pending additions, and clear
    /// the buffers. Emits one Detach/Attach event per entity actually
    /// removed from or inserted into the world.
    pub fn sweep(&mut self, world: &mut World, events: &mut Vec<PresentationEvent>) -> SweepStats {
        let mut stats = SweepStats::default();

        for entity in self.ships.drain_removals() {
            if despawn_with_detach(world, entity, events) {
                stats.ships_removed += 1;
            }
        }
        for entity in self.cannon_balls.drain_removals() {
            if despawn_with_detach(world, entity, events) {
                stats.cannon_balls_removed += 1;
            }
        }

        for (id, blueprint) in self.ships.add.drain(..) {
            spawn_ship(world, id, blueprint);
            let kind = match blueprint.helm {
                HelmKind::Player => EntityKind::PlayerShip,
                HelmKind::Ai => EntityKind::EnemyShip,
            };
            events.push(PresentationEvent::AttachVisual {
                entity: id,
                kind,
                model: blueprint.model,
            });
            stats.ships_added += 1;
        }
        for (id, blueprint) in self.cannon_balls.add.drain(..) {
            world.spawn((id, blueprint.position, blueprint.ball));
            events.push(PresentationEvent::AttachVisual {
                entity: id,
                kind: EntityKind::CannonBall,
                model: 0,
            });
            stats.cannon_balls_added += 1;
        }

        if stats != SweepStats::default() {
            trace!(
                ships_added = stats.ships_added,
                ships_removed = stats.ships_removed,
                cannon_balls_added = stats.cannon_balls_added,
                cannon_balls_removed = stats.cannon_balls_removed,
                "roster sweep"
            );
        }
        stats
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Look up the ECS entity carrying a given identity.
#[cfg(test)]
pub fn entity_of(world: &World, id: EntityId) -> Option<Entity> {
    world
        .query::<&EntityId>()
        .iter()
        .find(|(_, eid)| **eid == id)
        .map(|(entity, _)| entity)
}

fn spawn_ship(world: &mut World, id: EntityId, blueprint: ShipBlueprint) -> Entity {
    let ShipBlueprint {
        position,
        hull,
        helm,
        model,
    } = blueprint;
    let health = Health::full();
    let cannons = Cannons::loaded();
    let footprint = Footprint::default();
    match helm {
        HelmKind::Player => world.spawn((
            id,
            position,
            hull,
            health,
            cannons,
            footprint,
            HullModel(model),
            PlayerHelm,
        )),
        HelmKind::Ai => world.spawn((
            id,
            position,
            hull,
            health,
            cannons,
            footprint,
            HullModel(model),
            AiHelm::default(),
        )),
    }
}

fn despawn_with_detach(
    world: &mut World,
    entity: Entity,
    events: &mut Vec<PresentationEvent>,
) -> bool {
    let id = match world.get::<&EntityId>(entity) {
        Ok(id) => *id,
        Err(_) => return false,
    };
    if world.despawn(entity).is_err() {
        return false;
    }
    events.push(PresentationEvent::DetachVisual { entity: id });
    true
}
