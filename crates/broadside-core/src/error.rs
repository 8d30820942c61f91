//! Configuration errors. These are the only failures the simulation reports;
//! everything that goes wrong mid-run is a silent policy no-op.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena dimensions must be finite and positive, got {width}x{height}")]
    InvalidArena { width: f64, height: f64 },

    #[error("arena {width}x{height} cannot host the spawn layout (needs at least {min_width}x{min_height})")]
    ArenaTooSmall {
        width: f64,
        height: f64,
        min_width: f64,
        min_height: f64,
    },

    #[error("enemy count must be between {min} and {max}, got {0}", min = crate::constants::MIN_ENEMY_COUNT, max = crate::constants::MAX_ENEMY_COUNT)]
    InvalidEnemyCount(u8),

    #[error("configuration is only allowed before the match starts")]
    AlreadyStarted,
}
