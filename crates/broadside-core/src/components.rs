//! ECS components for hecs entities.
//!
//! Components are plain data structs. Ship and cannonball behaviour
//! lives in the simulation crate, not here.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{BoardSide, Steering};
use crate::types::EntityId;

/// Heading and speed of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    /// Degrees, unbounded. Only ever fed through trig functions.
    pub heading_deg: f64,
    /// Units per tick, kept within `[MIN_SPEED, MAX_SPEED]`.
    pub speed: f64,
}

/// Ship health. `current` starts at `max` and never rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Broadside batteries with independent per-board reload counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cannons {
    /// Ticks until the port battery may fire again (0 = ready).
    pub left_reload: i32,
    /// Ticks until the starboard battery may fire again (0 = ready).
    pub right_reload: i32,
    /// Damage per cannonball.
    pub damage: i32,
}

/// Collision footprint: a rectangle centred on the hull, rotated with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub length: f64,
    pub beam: f64,
}

/// Marks the ship steered by player intents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerHelm;

/// Marks an AI-steered ship and carries its current steering decision.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AiHelm {
    pub steering: Steering,
}

/// Artwork index for the presentation layer (0 = player hull).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullModel(pub u8);

/// A cannonball in flight. Heading and speed are fixed at launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CannonBall {
    /// Firing ship. Only used to exclude self-hits; the ball outlives it.
    pub owner: EntityId,
    pub side: BoardSide,
    pub damage: i32,
    pub heading_deg: f64,
    pub speed: f64,
    pub radius: f64,
    /// One-shot guard: a ball resolves at most one hit.
    pub detonated: bool,
}

impl Hull {
    pub fn new(heading_deg: f64) -> Self {
        Self {
            heading_deg,
            speed: INITIAL_SPEED,
        }
    }
}

impl Health {
    pub fn full() -> Self {
        Self {
            current: SHIP_MAX_HEALTH,
            max: SHIP_MAX_HEALTH,
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.current <= 0
    }

    pub fn is_critical(&self) -> bool {
        f64::from(self.current) / f64::from(self.max) <= HEALTH_CRITICAL_FRACTION
    }
}

impl Cannons {
    pub fn loaded() -> Self {
        Self {
            left_reload: 0,
            right_reload: 0,
            damage: CANNONBALL_DAMAGE,
        }
    }

    pub fn reload(&self, side: BoardSide) -> i32 {
        match side {
            BoardSide::Left => self.left_reload,
            BoardSide::Right => self.right_reload,
        }
    }

    pub fn reload_mut(&mut self, side: BoardSide) -> &mut i32 {
        match side {
            BoardSide::Left => &mut self.left_reload,
            BoardSide::Right => &mut self.right_reload,
        }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            length: FOOTPRINT_LENGTH,
            beam: FOOTPRINT_BEAM,
        }
    }
}
