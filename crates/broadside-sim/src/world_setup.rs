//! Spawn factories for setting up the arena.
//!
//! The player starts at the bottom of the arena facing east; enemies start
//! in a row near the top facing down the screen, spaced a fixed distance
//! apart and centred on the arena.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use broadside_core::components::Hull;
use broadside_core::constants::*;
use broadside_core::error::ConfigError;
use broadside_core::types::{Arena, EntityId, Position};

use crate::roster::{HelmKind, Roster, ShipBlueprint};

/// Check that `enemy_count` is legal and that its spawn row fits the arena.
pub fn check_layout(arena: &Arena, enemy_count: u8) -> Result<(), ConfigError> {
    if !(MIN_ENEMY_COUNT..=MAX_ENEMY_COUNT).contains(&enemy_count) {
        return Err(ConfigError::InvalidEnemyCount(enemy_count));
    }
    let min_width = f64::from(enemy_count) * ENEMY_SPAWN_SPACING;
    if arena.width < min_width || arena.height < MIN_ARENA_HEIGHT {
        return Err(ConfigError::ArenaTooSmall {
            width: arena.width,
            height: arena.height,
            min_width,
            min_height: MIN_ARENA_HEIGHT,
        });
    }
    Ok(())
}

/// Player spawn point, bottom centre.
pub fn player_spawn(arena: &Arena) -> Position {
    Position::new(
        arena.width / 2.0 - PLAYER_SPAWN_OFFSET_X,
        arena.height - PLAYER_SPAWN_OFFSET_Y,
    )
}

/// Spawn point of enemy `index` out of `count`.
pub fn enemy_spawn(arena: &Arena, index: u8, count: u8) -> Position {
    let row_start = arena.width / 2.0 - f64::from(count) * ENEMY_SPAWN_SPACING / 2.0;
    Position::new(
        row_start + f64::from(index) * ENEMY_SPAWN_SPACING + HULL_LENGTH / 2.0,
        ENEMY_SPAWN_Y,
    )
}

/// Queue the player and `enemy_count` enemies. Returns the player's id.
///
/// Ships enter the world at the next roster sweep. Each enemy draws its
/// hull model from `rng`.
pub fn populate(
    roster: &mut Roster,
    rng: &mut ChaCha8Rng,
    arena: &Arena,
    enemy_count: u8,
) -> EntityId {
    let player = roster.register_ship(ShipBlueprint {
        position: player_spawn(arena),
        hull: Hull::new(0.0),
        helm: HelmKind::Player,
        model: 0,
    });

    for index in 0..enemy_count {
        roster.register_ship(ShipBlueprint {
            position: enemy_spawn(arena, index, enemy_count),
            hull: Hull::new(ENEMY_SPAWN_HEADING),
            helm: HelmKind::Ai,
            model: rng.gen_range(1..=ENEMY_HULL_MODELS),
        });
    }
    player
}
