//! Driver settings read from the environment (not gameplay tuning).
//!
//! Every variable is optional; unset keys fall back to `AppConfig::default()`.

use std::env;
use std::str::FromStr;

use broadside_core::types::Arena;
use broadside_sim::engine::SimConfig;

use crate::error::AppError;

pub const ARENA_WIDTH_VAR: &str = "BROADSIDE_ARENA_WIDTH";
pub const ARENA_HEIGHT_VAR: &str = "BROADSIDE_ARENA_HEIGHT";
pub const ENEMY_COUNT_VAR: &str = "BROADSIDE_ENEMY_COUNT";
pub const SEED_VAR: &str = "BROADSIDE_SEED";
/// Tick limit for the loop; 0 runs until the match ends.
pub const MAX_TICKS_VAR: &str = "BROADSIDE_MAX_TICKS";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub max_ticks: u64,
}

impl AppConfig {
    /// Read the process environment. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let arena = Arena::new(
            parse_or(&lookup, ARENA_WIDTH_VAR, defaults.sim.arena.width)?,
            parse_or(&lookup, ARENA_HEIGHT_VAR, defaults.sim.arena.height)?,
        );
        let sim = SimConfig {
            seed: parse_or(&lookup, SEED_VAR, defaults.sim.seed)?,
            arena,
            enemy_count: parse_or(&lookup, ENEMY_COUNT_VAR, defaults.sim.enemy_count)?,
        };
        sim.validate()?;

        Ok(Self {
            sim,
            max_ticks: parse_or(&lookup, MAX_TICKS_VAR, defaults.max_ticks)?,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, AppError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidEnv { key, value }),
    }
}
