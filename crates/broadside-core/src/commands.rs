//! Player commands sent from the presentation layer to the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::Intent;

/// The set of intents currently held by the player.
/// Sampled once per tick; every held intent applies in that tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIntents {
    pub accelerate: bool,
    pub decelerate: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire_left: bool,
    pub fire_right: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Setup ---
    /// Choose the number of enemy ships. Only valid before `Start`.
    Configure { enemy_count: u8 },
    /// Populate the arena and begin dispatching ticks.
    Start,

    // --- Simulation control ---
    /// Withhold ticks, keeping all state.
    Pause,
    /// Resume dispatching ticks.
    Resume,

    // --- Helm ---
    /// Replace the held intent set.
    SetIntents { intents: PlayerIntents },
}

impl PlayerIntents {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, intent: Intent) -> bool {
        match intent {
            Intent::Accelerate => self.accelerate,
            Intent::Decelerate => self.decelerate,
            Intent::TurnLeft => self.turn_left,
            Intent::TurnRight => self.turn_right,
            Intent::FireLeft => self.fire_left,
            Intent::FireRight => self.fire_right,
        }
    }

    pub fn insert(&mut self, intent: Intent) {
        *self.flag_mut(intent) = true;
    }

    pub fn remove(&mut self, intent: Intent) {
        *self.flag_mut(intent) = false;
    }

    pub fn is_empty(&self) -> bool {
        Intent::ALL.iter().all(|i| !self.contains(*i))
    }

    /// Held intents in application order.
    pub fn iter(&self) -> impl Iterator<Item = Intent> + '_ {
        Intent::ALL.into_iter().filter(|i| self.contains(*i))
    }

    fn flag_mut(&mut self, intent: Intent) -> &mut bool {
        match intent {
            Intent::Accelerate => &mut self.accelerate,
            Intent::Decelerate => &mut self.decelerate,
            Intent::TurnLeft => &mut self.turn_left,
            Intent::TurnRight => &mut self.turn_right,
            Intent::FireLeft => &mut self.fire_left,
            Intent::FireRight => &mut self.fire_right,
        }
    }
}

impl FromIterator<Intent> for PlayerIntents {
    fn from_iter<T: IntoIterator<Item = Intent>>(iter: T) -> Self {
        let mut intents = Self::default();
        for intent in iter {
            intents.insert(intent);
        }
        intents
    }
}
