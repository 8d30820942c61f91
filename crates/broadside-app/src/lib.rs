//! BROADSIDE headless driver.
//!
//! Wires the simulation engine to a fixed-rate game loop thread, a console
//! input reader and a logging presentation.

pub mod config;
pub mod console;
pub mod error;
pub mod game_loop;
pub mod presentation;
pub mod state;

pub use broadside_core as core;
