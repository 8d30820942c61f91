//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Ship board. Cannonballs leave perpendicular to the heading,
/// to port (left, -90°) or starboard (right, +90°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSide {
    Left,
    Right,
}

/// Discrete steering decision, recomputed every tick for AI ships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Steering {
    TurnLeft,
    #[default]
    Straight,
    TurnRight,
}

/// Turn direction for a single helm command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    Left,
    Right,
}

/// One discrete player action, held for as long as it is in the intent set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Accelerate,
    Decelerate,
    TurnLeft,
    TurnRight,
    FireLeft,
    FireRight,
}

/// What kind of thing a simulation entity is, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    PlayerShip,
    EnemyShip,
    CannonBall,
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player ship is the only ship left.
    Victory,
    /// Every other end state.
    Defeat,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Configurable; world not populated yet.
    #[default]
    Setup,
    /// Ticks are dispatched.
    Running,
    /// Ticks are withheld; state is kept as-is.
    Paused,
    /// Terminal. The outcome is recorded on the engine.
    Ended,
}

impl BoardSide {
    /// Heading offset of a cannonball fired from this board.
    pub fn heading_offset(self) -> f64 {
        match self {
            BoardSide::Left => -90.0,
            BoardSide::Right => 90.0,
        }
    }
}

impl Steering {
    /// The turn this decision applies, if any.
    pub fn turn(self) -> Option<TurnDirection> {
        match self {
            Steering::TurnLeft => Some(TurnDirection::Left),
            Steering::Straight => None,
            Steering::TurnRight => Some(TurnDirection::Right),
        }
    }
}

impl Intent {
    /// Every intent, in the order they are applied within a tick.
    pub const ALL: [Intent; 6] = [
        Intent::Accelerate,
        Intent::Decelerate,
        Intent::TurnLeft,
        Intent::TurnRight,
        Intent::FireLeft,
        Intent::FireRight,
    ];
}

impl Outcome {
    pub fn player_won(self) -> bool {
        self == Outcome::Victory
    }
}
