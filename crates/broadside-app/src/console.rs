//! Console input: one line of key letters per intent change.
//!
//! `w`/`s` accelerate and decelerate, `a`/`d` turn, `q`/`e` fire the left
//! and right batteries. A line of these letters replaces the held intent
//! set; an empty line releases everything. `p` pauses, `r` resumes and `x`
//! quits.

use std::io::BufRead;
use std::sync::mpsc;
use std::thread::JoinHandle;

use thiserror::Error;
use tracing::{debug, warn};

use broadside_core::commands::{PlayerCommand, PlayerIntents};
use broadside_core::enums::Intent;

use crate::error::AppError;
use crate::state::GameLoopCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown key {0:?}")]
    UnknownKey(char),
}

/// What a console line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Intents(PlayerIntents),
    Pause,
    Resume,
    Quit,
}

pub fn key_intent(key: char) -> Option<Intent> {
    match key.to_ascii_lowercase() {
        'w' => Some(Intent::Accelerate),
        's' => Some(Intent::Decelerate),
        'a' => Some(Intent::TurnLeft),
        'd' => Some(Intent::TurnRight),
        'q' => Some(Intent::FireLeft),
        'e' => Some(Intent::FireRight),
        _ => None,
    }
}

pub fn parse_line(line: &str) -> Result<ConsoleInput, InputError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "p" => return Ok(ConsoleInput::Pause),
        "r" => return Ok(ConsoleInput::Resume),
        "x" => return Ok(ConsoleInput::Quit),
        _ => {}
    }

    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| key_intent(c).ok_or(InputError::UnknownKey(c)))
        .collect::<Result<PlayerIntents, _>>()
        .map(ConsoleInput::Intents)
}

impl ConsoleInput {
    pub fn into_command(self) -> GameLoopCommand {
        match self {
            ConsoleInput::Intents(intents) => {
                GameLoopCommand::PlayerCommand(PlayerCommand::SetIntents { intents })
            }
            ConsoleInput::Pause => GameLoopCommand::PlayerCommand(PlayerCommand::Pause),
            ConsoleInput::Resume => GameLoopCommand::PlayerCommand(PlayerCommand::Resume),
            ConsoleInput::Quit => GameLoopCommand::Shutdown,
        }
    }
}

/// Forward lines from `input` to the game loop until quit, EOF, or the
/// loop hangs up.
pub fn forward_lines<R: BufRead>(input: R, cmd_tx: &mpsc::Sender<GameLoopCommand>) {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        let input = match parse_line(&line) {
            Ok(input) => input,
            Err(error) => {
                warn!(%error, "ignored console input");
                continue;
            }
        };
        debug!(?input, "console input");

        let quit = input == ConsoleInput::Quit;
        if cmd_tx.send(input.into_command()).is_err() || quit {
            break;
        }
    }
}

/// Read stdin on its own thread.
pub fn spawn_stdin_reader(
    cmd_tx: mpsc::Sender<GameLoopCommand>,
) -> Result<JoinHandle<()>, AppError> {
    std::thread::Builder::new()
        .name("broadside-console".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            forward_lines(stdin.lock(), &cmd_tx);
        })
        .map_err(|source| AppError::Spawn {
            name: "console",
            source,
        })
}
