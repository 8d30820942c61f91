//! Simulation constants and game-balance parameters.
//!
//! Distances are arena units, angles are degrees, durations are ticks
//! unless a name says otherwise.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Default arena width.
pub const DEFAULT_ARENA_WIDTH: f64 = 1280.0;

/// Default arena height.
pub const DEFAULT_ARENA_HEIGHT: f64 = 720.0;

/// Smallest arena height that fits the player row and the enemy row.
pub const MIN_ARENA_HEIGHT: f64 = 300.0;

// --- Roster ---

/// Fewest enemy ships a match can be configured with.
pub const MIN_ENEMY_COUNT: u8 = 1;

/// Most enemy ships a match can be configured with.
pub const MAX_ENEMY_COUNT: u8 = 5;

/// Default number of enemy ships.
pub const DEFAULT_ENEMY_COUNT: u8 = 3;

/// Horizontal distance between neighbouring enemy spawn points.
pub const ENEMY_SPAWN_SPACING: f64 = 200.0;

/// Y coordinate of the enemy spawn row (hull centre).
pub const ENEMY_SPAWN_Y: f64 = 125.0;

/// Initial heading of enemy ships (facing down the screen).
pub const ENEMY_SPAWN_HEADING: f64 = 90.0;

/// Player spawn offset left of the arena's horizontal centre.
pub const PLAYER_SPAWN_OFFSET_X: f64 = 50.0;

/// Player spawn offset above the bottom edge.
pub const PLAYER_SPAWN_OFFSET_Y: f64 = 75.0;

/// Number of distinct enemy hull models.
pub const ENEMY_HULL_MODELS: u8 = 5;

// --- Ship hull ---

/// Visual hull length (along the heading).
pub const HULL_LENGTH: f64 = 100.0;

/// Visual hull beam (across the heading).
pub const HULL_BEAM: f64 = 50.0;

/// Collision footprint length, centred within the hull.
pub const FOOTPRINT_LENGTH: f64 = 0.7 * HULL_LENGTH;

/// Collision footprint beam, centred within the hull.
pub const FOOTPRINT_BEAM: f64 = 0.4 * HULL_BEAM;

/// Starting and maximum health of every ship.
pub const SHIP_MAX_HEALTH: i32 = 100;

/// Fraction of max health at or below which health feedback is flagged critical.
pub const HEALTH_CRITICAL_FRACTION: f64 = 0.25;

// --- Ship handling ---

/// Heading change per turn command.
pub const TURN_RATE_DEG: f64 = 3.0;

/// Slowest allowed speed (units per tick).
pub const MIN_SPEED: f64 = 0.0;

/// Fastest allowed speed (units per tick).
pub const MAX_SPEED: f64 = 3.0;

/// Speed every ship starts with.
pub const INITIAL_SPEED: f64 = 1.0;

/// Speed change per accelerate/decelerate command.
pub const SPEED_STEP: f64 = 0.5;

// --- Cannons ---

/// Ticks a board's cannons need between shots.
pub const CANNON_RELOAD_TICKS: i32 = 30;

/// Damage dealt by one cannonball.
pub const CANNONBALL_DAMAGE: i32 = 10;

/// Cannonball speed (units per tick).
pub const CANNONBALL_SPEED: f64 = 10.0;

/// Cannonball collision radius.
pub const CANNONBALL_RADIUS: f64 = 8.0;

/// Size hint for the cannonball detonation effect.
pub const CANNONBALL_BLAST_SIZE: f64 = 30.0;

/// Damage both ships take when their footprints touch. Always lethal.
pub const RAMMING_DAMAGE: i32 = 1000;

// --- Enemy sensors ---

/// How far ahead of the hull centre a steering wedge reaches.
pub const SENSOR_WEDGE_REACH: f64 = HULL_LENGTH / 2.0 + 100.0;

/// How far to its side a steering wedge spreads at its far edge.
pub const SENSOR_WEDGE_SPREAD: f64 = 100.0;

/// Length of each board (targeting) sensor line.
pub const BOARD_SENSOR_LENGTH: f64 = 400.0;

// --- Random steering fallback ---

/// Exclusive upper bound of the uniform draw.
pub const RANDOM_STEER_RANGE: u32 = 2000;

/// Draws strictly between 0 and this value steer left.
pub const RANDOM_STEER_LEFT_BELOW: u32 = RANDOM_STEER_RANGE / 4;

/// Draws strictly above this value steer right.
pub const RANDOM_STEER_RIGHT_ABOVE: u32 = RANDOM_STEER_RANGE * 3 / 4;
