//! Session snapshot functionality for stop-and-resume play
//!
//! The full session state serializes to JSON, so a session can be written
//! to disk and picked up again later. The logger's transient capture
//! buffer is not part of the snapshot.

use crate::game::state::GameState;
use crate::{GumshoeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A saved session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The complete session state at save time
    pub game_state: GameState,

    /// Number of commands applied before the snapshot was taken
    pub commands_run: u32,
}

impl GameSnapshot {
    /// Create a snapshot from a session state
    pub fn new(game_state: GameState, commands_run: u32) -> Self {
        GameSnapshot {
            game_state,
            commands_run,
        }
    }

    /// Write the snapshot to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GumshoeError::SerializationError(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<GameSnapshot> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| GumshoeError::InvalidSnapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::VerbosityLevel;

    #[test]
    fn test_snapshot_json_roundtrip() {
        let mut game = GameState::new("Alice");
        game.logger.set_verbosity(VerbosityLevel::Silent);
        game.grab("drone");
        game.rest();

        let snapshot = GameSnapshot::new(game, 2);
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.commands_run, 2);
        assert_eq!(restored.game_state.overall_points(), 10);
        assert_eq!(restored.game_state.undo_log.len(), 2);
        assert_eq!(
            restored.game_state.logger.verbosity(),
            VerbosityLevel::Silent
        );
    }
}
