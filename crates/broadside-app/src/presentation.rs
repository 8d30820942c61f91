//! Headless presentation: every outbound event becomes a log line.

use tracing::{debug, info};

use broadside_core::enums::EntityKind;
use broadside_core::events::Presentation;
use broadside_core::types::{EntityId, Position};

/// Logs presentation events and keeps a count of live visuals.
#[derive(Debug, Default)]
pub struct LogPresentation {
    visuals: usize,
}

impl LogPresentation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presentation for LogPresentation {
    fn attach_visual(&mut self, entity: EntityId, kind: EntityKind, model: u8) {
        self.visuals += 1;
        debug!(%entity, ?kind, model, "attach visual");
    }

    fn detach_visual(&mut self, entity: EntityId) {
        self.visuals = self.visuals.saturating_sub(1);
        debug!(%entity, "detach visual");
    }

    fn on_health_changed(&mut self, ship: EntityId, current: i32, max: i32, critical: bool) {
        if critical {
            info!(%ship, current, max, "hull critical");
        } else {
            debug!(%ship, current, max, "hull damaged");
        }
    }

    fn on_entity_destroyed(&mut self, entity: EntityId, position: Position, size: f64) {
        debug!(%entity, x = position.x, y = position.y, size, "explosion");
    }

    fn on_game_ended(&mut self, player_won: bool) {
        if player_won {
            info!(visuals = self.visuals, "victory: every enemy ship is sunk");
        } else {
            info!(visuals = self.visuals, "defeat: the player ship is lost");
        }
    }
}
