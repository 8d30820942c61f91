//! Game state snapshot: the complete visible state handed to the driver each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::PresentationEvent;
use crate::types::{EntityId, Position, SimTime};

/// Complete game state produced after each `advance()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Set once the match has ended.
    pub outcome: Option<Outcome>,
    pub ships: Vec<ShipView>,
    pub cannon_balls: Vec<CannonBallView>,
    /// Presentation events produced since the previous snapshot, in order.
    pub events: Vec<PresentationEvent>,
}

/// A ship as the presentation layer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub model: u8,
    /// Hull centre.
    pub position: Position,
    /// Degrees.
    pub heading: f64,
    pub speed: f64,
    pub health: i32,
    pub max_health: i32,
    pub left_reload: i32,
    pub right_reload: i32,
}

/// A cannonball in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CannonBallView {
    pub id: EntityId,
    pub owner: EntityId,
    pub position: Position,
    /// Degrees.
    pub heading: f64,
}

impl GameStateSnapshot {
    /// The player's ship, if still afloat.
    pub fn player(&self) -> Option<&ShipView> {
        self.ships.iter().find(|s| s.kind == EntityKind::PlayerShip)
    }

    pub fn ship(&self, id: EntityId) -> Option<&ShipView> {
        self.ships.iter().find(|s| s.id == id)
    }
}
