//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no presentation dependency), enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use broadside_core::commands::{PlayerCommand, PlayerIntents};
use broadside_core::constants::DEFAULT_ENEMY_COUNT;
use broadside_core::enums::{GamePhase, Outcome};
use broadside_core::error::ConfigError;
use broadside_core::events::PresentationEvent;
use broadside_core::state::GameStateSnapshot;
use broadside_core::types::{Arena, EntityId, SimTime};

use crate::roster::Roster;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Play area, fixed for the lifetime of the engine.
    pub arena: Arena,
    /// Number of enemy ships, 1 to 5.
    pub enemy_count: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: Arena::default(),
            enemy_count: DEFAULT_ENEMY_COUNT,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arena.validate()?;
        world_setup::check_layout(&self.arena, self.enemy_count)
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    outcome: Option<Outcome>,
    config: SimConfig,
    rng: ChaCha8Rng,
    intents: PlayerIntents,
    roster: Roster,
    player: Option<EntityId>,
    events: Vec<PresentationEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine in the setup phase.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            seed = config.seed,
            width = config.arena.width,
            height = config.arena.height,
            enemies = config.enemy_count,
            "simulation configured"
        );
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            outcome: None,
            config,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            intents: PlayerIntents::none(),
            roster: Roster::new(),
            player: None,
            events: Vec::new(),
        })
    }

    /// Handle a single player command.
    pub fn handle_command(&mut self, command: PlayerCommand) -> Result<(), ConfigError> {
        match command {
            PlayerCommand::Configure { enemy_count } => self.configure(enemy_count)?,
            PlayerCommand::Start => self.start(),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Resume => self.resume(),
            PlayerCommand::SetIntents { intents } => self.set_player_intents(intents),
        }
        Ok(())
    }

    /// Change the enemy count. Only legal during setup.
    pub fn configure(&mut self, enemy_count: u8) -> Result<(), ConfigError> {
        if self.phase != GamePhase::Setup {
            return Err(ConfigError::AlreadyStarted);
        }
        world_setup::check_layout(&self.config.arena, enemy_count)?;
        self.config.enemy_count = enemy_count;
        debug!(enemies = enemy_count, "enemy count configured");
        Ok(())
    }

    /// Populate the arena and begin running. Ignored outside setup.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Setup {
            return;
        }
        let player = world_setup::populate(
            &mut self.roster,
            &mut self.rng,
            &self.config.arena,
            self.config.enemy_count,
        );
        self.roster.sweep(&mut self.world, &mut self.events);
        self.player = Some(player);
        self.phase = GamePhase::Running;
        info!(
            enemies = self.config.enemy_count,
            seed = self.config.seed,
            "simulation started"
        );
    }

    /// Stop dispatching ticks, keeping all state.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
            info!(tick = self.time.tick, "simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
            info!(tick = self.time.tick, "simulation resumed");
        }
    }

    /// Replace the held intent set. Sampled at the start of every tick.
    pub fn set_player_intents(&mut self, intents: PlayerIntents) {
        self.intents = intents;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Outside the running phase nothing moves and the snapshot only
    /// carries pending events.
    pub fn advance(&mut self) -> GameStateSnapshot {
        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
            self.check_termination();
        }
        self.snapshot()
    }

    /// Current state, draining the presentation events recorded so far.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, self.outcome, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Final outcome, once the match has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Identity of the player's ship, assigned at start.
    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Queue an extra ship and bring it into the world immediately (for tests).
    #[cfg(test)]
    pub fn spawn_test_ship(&mut self, blueprint: crate::roster::ShipBlueprint) -> EntityId {
        let id = self.roster.register_ship(blueprint);
        self.roster.sweep(&mut self.world, &mut self.events);
        id
    }

    /// Run all systems in order for one tick.
    fn run_systems(&mut self) {
        let arena = self.config.arena;

        // 1. Ships: helm, AI policy, movement.
        systems::helm::run(
            &mut self.world,
            &mut self.roster,
            &mut self.rng,
            &self.intents,
            &arena,
        );

        // 2. Cannonball flight.
        systems::cannon_balls::run(&mut self.world, &arena, &mut self.roster);

        // 3. Ramming, then 4. cannonball hits.
        systems::collision::resolve_ramming(&mut self.world, &mut self.roster, &mut self.events);
        systems::collision::resolve_hits(&mut self.world, &mut self.roster, &mut self.events);

        // 5. Apply deferred additions and removals.
        self.roster.sweep(&mut self.world, &mut self.events);
    }

    /// End the match if the roster calls for it.
    fn check_termination(&mut self) {
        let Some(outcome) = systems::termination::evaluate(&self.world) else {
            return;
        };
        let purged = systems::termination::purge_cannon_balls(
            &mut self.world,
            &mut self.roster,
            &mut self.events,
        );
        self.phase = GamePhase::Ended;
        self.outcome = Some(outcome);
        self.events.push(PresentationEvent::GameEnded {
            player_won: outcome.player_won(),
        });
        info!(
            tick = self.time.tick,
            ?outcome,
            purged_cannon_balls = purged,
            "game ended"
        );
    }
}
