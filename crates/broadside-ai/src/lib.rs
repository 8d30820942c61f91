//! Enemy AI for BROADSIDE.
//!
//! Implements the sensor rig rigidly attached to every enemy hull and the
//! reactive policy that turns sensor readings into a steering decision and
//! an optional broadside.

pub mod policy;
pub mod sensors;

pub use broadside_core as core;

#[cfg(test)]
mod tests;
