//! Main session state structure

use crate::core::Detective;
use crate::game::GameLogger;
use crate::undo::{Move, UndoLog, UndoOutcome, UndoPolicy};
use crate::world::EvidenceMap;
use serde::{Deserialize, Serialize};

/// Complete session state
///
/// The central structure holding everything a single investigation owns:
/// the detective and their score, the evidence table, the undo log, and the
/// logger. Created at session start, dropped at session end; nothing here is
/// process-global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The player character and their running score
    pub detective: Detective,

    /// Immutable evidence-location table
    pub world: EvidenceMap,

    /// Log of reversible moves (most recent at end)
    pub undo_log: UndoLog,

    /// How grab/drop reversals interact with the log
    pub undo_policy: UndoPolicy,

    /// Centralized logger for session events
    pub logger: GameLogger,
}

impl GameState {
    /// Create a new session with the standard scene
    pub fn new(detective_name: impl Into<String>) -> Self {
        GameState {
            detective: Detective::new(detective_name),
            world: EvidenceMap::standard(),
            undo_log: UndoLog::new(),
            undo_policy: UndoPolicy::default(),
            logger: GameLogger::new(),
        }
    }

    /// Create a session with an explicit undo policy
    pub fn with_undo_policy(detective_name: impl Into<String>, policy: UndoPolicy) -> Self {
        let mut state = GameState::new(detective_name);
        state.undo_policy = policy;
        state
    }

    /// Current overall points
    pub fn overall_points(&self) -> i32 {
        self.detective.points
    }

    /// Explicit score override
    pub fn set_overall_points(&mut self, points: i32) {
        self.detective.points = points;
    }

    /// Undo the most recent reversible move
    ///
    /// Pops the last move from the undo log and reverts its score effect.
    /// An empty log is a reported no-op, not an error.
    pub fn undo(&mut self) -> UndoOutcome {
        self.logger.normal("Undoing last action");

        let Some(mv) = self.undo_log.pop() else {
            let outcome = UndoOutcome::Nothing;
            self.logger.normal(&outcome.to_string());
            return outcome;
        };

        let outcome = match mv {
            Move::Grab { item } => {
                match self.undo_policy {
                    UndoPolicy::Rewind => {
                        self.detective.lose_points(item.score_value());
                    }
                    // Relog runs the reversal as a full forward drop,
                    // re-recorded so a later undo will grab the item back.
                    UndoPolicy::Relog => {
                        self.drop_item(item.as_str());
                    }
                }
                UndoOutcome::UndidGrab { item }
            }
            Move::Drop { item } => {
                match self.undo_policy {
                    UndoPolicy::Rewind => {
                        self.detective.gain_points(item.score_value());
                    }
                    UndoPolicy::Relog => {
                        self.grab(item.as_str());
                    }
                }
                UndoOutcome::UndidDrop { item }
            }
            // A rest reversal subtracts the recorded points directly and is
            // never re-logged under either policy.
            Move::Rest { points } => {
                self.detective.lose_points(points);
                UndoOutcome::UndidRest { points }
            }
        };

        self.logger.normal(&outcome.to_string());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undo::REST_POINTS;

    #[test]
    fn test_session_creation() {
        let game = GameState::new("Alice");

        assert_eq!(game.detective.name, "Alice");
        assert_eq!(game.overall_points(), 0);
        assert_eq!(game.undo_log.len(), 0);
        assert_eq!(game.undo_policy, UndoPolicy::Rewind);
        assert_eq!(game.world.clues_at("shed"), Some(1));
    }

    #[test]
    fn test_overall_points_override() {
        let mut game = GameState::new("Alice");

        game.set_overall_points(42);
        assert_eq!(game.overall_points(), 42);
    }

    #[test]
    fn test_undo_empty_log() {
        let mut game = GameState::new("Alice");

        assert_eq!(game.undo(), UndoOutcome::Nothing);
        assert_eq!(game.overall_points(), 0);

        // Still a no-op on repeat
        assert_eq!(game.undo(), UndoOutcome::Nothing);
    }

    #[test]
    fn test_undo_grab_rewind() {
        let mut game = GameState::new("Alice");
        game.logger.set_verbosity(crate::game::VerbosityLevel::Silent);

        game.grab("drone");
        assert_eq!(game.overall_points(), 5);

        let outcome = game.undo();
        assert_eq!(game.overall_points(), 0);
        assert!(matches!(outcome, UndoOutcome::UndidGrab { .. }));

        // Rewind removes the record permanently
        assert!(game.undo_log.is_empty());
    }

    #[test]
    fn test_undo_grab_relog_toggles() {
        let mut game = GameState::with_undo_policy("Alice", UndoPolicy::Relog);
        game.logger.set_verbosity(crate::game::VerbosityLevel::Silent);

        game.grab("drone");
        assert_eq!(game.overall_points(), 5);

        // Undo pushes a Drop record in place of the popped Grab
        game.undo();
        assert_eq!(game.overall_points(), 0);
        assert_eq!(game.undo_log.len(), 1);
        assert!(matches!(game.undo_log.peek(), Some(Move::Drop { .. })));

        // A second undo toggles back
        game.undo();
        assert_eq!(game.overall_points(), 5);
        assert!(matches!(game.undo_log.peek(), Some(Move::Grab { .. })));
    }

    #[test]
    fn test_undo_rest_never_relogged() {
        let mut game = GameState::with_undo_policy("Alice", UndoPolicy::Relog);
        game.logger.set_verbosity(crate::game::VerbosityLevel::Silent);

        game.rest();
        assert_eq!(game.overall_points(), REST_POINTS);

        let outcome = game.undo();
        assert_eq!(outcome, UndoOutcome::UndidRest { points: REST_POINTS });
        assert_eq!(game.overall_points(), 0);
        assert!(game.undo_log.is_empty());
    }
}
