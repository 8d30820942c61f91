//! Events emitted by the simulation for the presentation layer.
//!
//! The simulation never calls into rendering code directly. It records
//! `PresentationEvent`s during a tick and hands them out with the snapshot;
//! a driver routes them to a `Presentation` implementation.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::{EntityId, Position};

/// Outbound notifications for whatever draws the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PresentationEvent {
    /// An entity entered the simulation and needs a visual.
    AttachVisual {
        entity: EntityId,
        kind: EntityKind,
        /// Hull artwork index; 0 for the player and for cannonballs.
        model: u8,
    },
    /// An entity left the simulation; drop its visual.
    DetachVisual { entity: EntityId },
    /// A ship took non-fatal damage. Show its health briefly.
    HealthChanged {
        ship: EntityId,
        current: i32,
        max: i32,
        /// At or below the critical health fraction.
        critical: bool,
    },
    /// Play a destruction effect.
    EntityDestroyed {
        entity: EntityId,
        position: Position,
        size: f64,
    },
    /// The match is over.
    GameEnded { player_won: bool },
}

/// Presentation-side contract. Implementors only react; they never
/// mutate the simulation.
pub trait Presentation {
    fn attach_visual(&mut self, entity: EntityId, kind: EntityKind, model: u8);
    fn detach_visual(&mut self, entity: EntityId);
    fn on_health_changed(&mut self, ship: EntityId, current: i32, max: i32, critical: bool);
    fn on_entity_destroyed(&mut self, entity: EntityId, position: Position, size: f64);
    fn on_game_ended(&mut self, player_won: bool);
}

impl PresentationEvent {
    /// Route this event to the matching `Presentation` method.
    pub fn dispatch<P: Presentation + ?Sized>(&self, presentation: &mut P) {
        match *self {
            PresentationEvent::AttachVisual {
                entity,
                kind,
                model,
            } => presentation.attach_visual(entity, kind, model),
            PresentationEvent::DetachVisual { entity } => presentation.detach_visual(entity),
            PresentationEvent::HealthChanged {
                ship,
                current,
                max,
                critical,
            } => presentation.on_health_changed(ship, current, max, critical),
            PresentationEvent::EntityDestroyed {
                entity,
                position,
                size,
            } => presentation.on_entity_destroyed(entity, position, size),
            PresentationEvent::GameEnded { player_won } => presentation.on_game_ended(player_won),
        }
    }
}

/// Dispatch a batch of events in order.
pub fn dispatch_all<P: Presentation + ?Sized>(events: &[PresentationEvent], presentation: &mut P) {
    for event in events {
        event.dispatch(presentation);
    }
}
