//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components. Spawns and
//! despawns go through the `Roster` and land at the end-of-tick sweep.

pub mod cannon_balls;
pub mod collision;
pub mod helm;
pub mod snapshot;
pub mod termination;
