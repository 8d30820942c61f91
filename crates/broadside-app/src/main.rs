use std::process::ExitCode;

use broadside_app::config::AppConfig;
use broadside_app::console;
use broadside_app::error::AppError;
use broadside_app::game_loop;
use broadside_app::state::{shared_snapshot, GameLoopCommand};
use broadside_core::commands::PlayerCommand;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    tracing::info!(
        width = config.sim.arena.width,
        height = config.sim.arena.height,
        enemies = config.sim.enemy_count,
        seed = config.sim.seed,
        max_ticks = config.max_ticks,
        "starting broadside"
    );

    let latest = shared_snapshot();
    let handle = game_loop::spawn_game_loop(&config, latest)?;

    let cmd_tx = handle.sender();
    // The loop may already be gone if it failed; join reports that below.
    let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start));
    console::spawn_stdin_reader(cmd_tx)?;

    match handle.join()? {
        Some(outcome) => tracing::info!(?outcome, "match over"),
        None => tracing::info!("stopped before the match ended"),
    }
    Ok(())
}

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "fatal");
            ExitCode::FAILURE
        }
    }
}
