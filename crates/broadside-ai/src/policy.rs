//! Reactive enemy policy.
//!
//! Pure functions that compute one tick's steering decision and broadside
//! for a single enemy from its sensor rig and the footprints around it.
//! No ECS dependency; operates on plain data.

use rand::Rng;

use broadside_core::constants::{
    RANDOM_STEER_LEFT_BELOW, RANDOM_STEER_RANGE, RANDOM_STEER_RIGHT_ABOVE,
};
use broadside_core::enums::{BoardSide, Steering};
use broadside_core::geometry::Obb;
use broadside_core::types::Arena;

use crate::sensors::SensorRig;

/// Input to the policy for a single enemy.
pub struct PolicyContext<'a> {
    pub rig: SensorRig,
    pub arena: Arena,
    /// Footprints of every other active ship, in registration order.
    pub contacts: &'a [Obb],
    /// Player footprint, when the player is still afloat.
    pub player: Option<Obb>,
    /// Decision carried over from the previous tick.
    pub previous: Steering,
}

/// Output of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDecision {
    pub steering: Steering,
    /// Board to fire, if the player is on a firing line.
    pub fire: Option<BoardSide>,
}

/// Evaluate both sub-policies for one enemy.
pub fn evaluate<R: Rng + ?Sized>(ctx: &PolicyContext<'_>, rng: &mut R) -> PolicyDecision {
    PolicyDecision {
        fire: choose_target(&ctx.rig, ctx.player.as_ref()),
        steering: choose_steering(ctx, rng),
    }
}

/// Fire the port battery if the player is on the port line, otherwise the
/// starboard battery if it is on the starboard line.
pub fn choose_target(rig: &SensorRig, player: Option<&Obb>) -> Option<BoardSide> {
    let player = player?;
    if rig.board_detects(BoardSide::Left, player) {
        Some(BoardSide::Left)
    } else if rig.board_detects(BoardSide::Right, player) {
        Some(BoardSide::Right)
    } else {
        None
    }
}

/// Collision avoidance first, boundary avoidance after.
///
/// A contact seen by a wedge settles the decision immediately and skips the
/// boundary check. When every contact was examined and none was seen, one
/// random draw replaces the decision and the boundary check may still
/// override it. With no contacts at all the previous decision stands,
/// subject to the same boundary check.
pub fn choose_steering<R: Rng + ?Sized>(ctx: &PolicyContext<'_>, rng: &mut R) -> Steering {
    for contact in ctx.contacts {
        let left = ctx.rig.wedge_detects(BoardSide::Left, contact);
        let right = ctx.rig.wedge_detects(BoardSide::Right, contact);
        match (left, right) {
            (true, true) => return Steering::Straight,
            (true, false) => return Steering::TurnRight,
            (false, true) => return Steering::TurnLeft,
            (false, false) => {}
        }
    }

    let mut steering = if ctx.contacts.is_empty() {
        ctx.previous
    } else {
        random_steering(rng)
    };

    if ctx.rig.wedge_outside(BoardSide::Left, &ctx.arena) {
        steering = Steering::TurnRight;
    } else if ctx.rig.wedge_outside(BoardSide::Right, &ctx.arena) {
        steering = Steering::TurnLeft;
    }
    steering
}

/// Weighted random fallback, biased towards holding course.
pub fn random_steering<R: Rng + ?Sized>(rng: &mut R) -> Steering {
    steering_for_draw(rng.gen_range(0..RANDOM_STEER_RANGE))
}

/// Map a draw from `[0, RANDOM_STEER_RANGE)` onto a decision. The exact
/// cut-off values themselves fall through to `Straight`.
pub fn steering_for_draw(draw: u32) -> Steering {
    if 0 < draw && draw < RANDOM_STEER_LEFT_BELOW {
        Steering::TurnLeft
    } else if RANDOM_STEER_RIGHT_ABOVE < draw && draw < RANDOM_STEER_RANGE {
        Steering::TurnRight
    } else {
        Steering::Straight
    }
}
