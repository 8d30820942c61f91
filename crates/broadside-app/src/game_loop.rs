//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built on the caller's thread so configuration errors surface
//! before anything is spawned, then moved into the loop. Commands arrive via
//! an `mpsc` channel. Each tick's presentation events are dispatched to a
//! `Presentation`, and the snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use broadside_core::constants::TICK_RATE;
use broadside_core::enums::{GamePhase, Outcome};
use broadside_core::events::{dispatch_all, Presentation};
use broadside_sim::engine::SimulationEngine;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::presentation::LogPresentation;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Running game loop: the command sender plus the thread handle.
pub struct GameLoopHandle {
    cmd_tx: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<Option<Outcome>>,
}

impl GameLoopHandle {
    pub fn sender(&self) -> mpsc::Sender<GameLoopCommand> {
        self.cmd_tx.clone()
    }

    /// Wait for the loop to stop. Returns the outcome if the match ended.
    pub fn join(self) -> Result<Option<Outcome>, AppError> {
        drop(self.cmd_tx);
        self.thread.join().map_err(|_| AppError::GameLoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: &AppConfig,
    latest_snapshot: SharedSnapshot,
) -> Result<GameLoopHandle, AppError> {
    let engine = SimulationEngine::new(config.sim)?;
    let max_ticks = config.max_ticks;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("broadside-game-loop".into())
        .spawn(move || {
            let mut presentation = LogPresentation::new();
            run_game_loop(
                engine,
                cmd_rx,
                &latest_snapshot,
                &mut presentation,
                max_ticks,
            )
        })
        .map_err(|source| AppError::Spawn {
            name: "game loop",
            source,
        })?;

    Ok(GameLoopHandle { cmd_tx, thread })
}

/// The game loop. Runs until the match ends, the tick limit is reached
/// (`max_ticks` 0 = no limit), a Shutdown command, or channel disconnect.
pub fn run_game_loop<P: Presentation>(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    presentation: &mut P,
    max_ticks: u64,
) -> Option<Outcome> {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    if let Err(error) = engine.handle_command(cmd) {
                        warn!(%error, "command rejected");
                    }
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "shutdown requested");
                    return engine.outcome();
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return engine.outcome(),
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.advance();

        // 3. Hand this tick's events to the presentation
        dispatch_all(&snapshot.events, presentation);

        // 4. Store latest snapshot for polling
        let tick = snapshot.time.tick;
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if engine.phase() == GamePhase::Ended {
            return engine.outcome();
        }
        if max_ticks > 0 && tick >= max_ticks {
            info!(tick, "tick limit reached");
            return engine.outcome();
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::commands::PlayerCommand;
    use broadside_core::enums::EntityKind;
    use broadside_core::types::{EntityId, Position};
    use broadside_sim::engine::SimConfig;

    use crate::state::shared_snapshot;

    #[derive(Default)]
    struct Counter {
        attached: usize,
        detached: usize,
        ended: Option<bool>,
    }

    impl Presentation for Counter {
        fn attach_visual(&mut self, _entity: EntityId, _kind: EntityKind, _model: u8) {
            self.attached += 1;
        }
        fn detach_visual(&mut self, _entity: EntityId) {
            self.detached += 1;
        }
        fn on_health_changed(&mut self, _ship: EntityId, _current: i32, _max: i32, _critical: bool) {}
        fn on_entity_destroyed(&mut self, _entity: EntityId, _position: Position, _size: f64) {}
        fn on_game_ended(&mut self, player_won: bool) {
            self.ended = Some(player_won);
        }
    }

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig {
            enemy_count: 1,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();

        let latest = shared_snapshot();
        let mut counter = Counter::default();
        let outcome = run_game_loop(engine(), rx, &latest, &mut counter, 5);

        assert_eq!(outcome, None);
        assert_eq!(counter.attached, 2, "player and one enemy attached");
        assert_eq!(counter.ended, None);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 5);
        drop(tx);
    }

    #[test]
    fn test_shutdown_before_first_tick() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let latest = shared_snapshot();
        let mut counter = Counter::default();
        let outcome = run_game_loop(engine(), rx, &latest, &mut counter, 0);

        assert_eq!(outcome, None);
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_rejected_command_does_not_stop_loop() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Configure {
            enemy_count: 9,
        }))
        .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();

        let latest = shared_snapshot();
        let mut counter = Counter::default();
        run_game_loop(engine(), rx, &latest, &mut counter, 2);

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert_eq!(snapshot.ships.len(), 2);
        drop(tx);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
