//! Undo log for reversible detective moves
//!
//! This module provides a log of score-mutating moves that can be popped
//! and reversed, most recent first. Each record carries the data needed to
//! invert the score change it corresponds to.

use crate::core::ItemName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points awarded for resting (and reclaimed when a rest is undone)
pub const REST_POINTS: i32 = 5;

/// Reversible moves that can be logged and undone
///
/// Every record pushed corresponds to exactly one score mutation already
/// applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// An item was grabbed, adding its score value
    Grab { item: ItemName },

    /// An item was dropped, subtracting its score value
    Drop { item: ItemName },

    /// The detective rested, adding a fixed number of points
    Rest { points: i32 },
}

/// How the session treats a reversed grab or drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UndoPolicy {
    /// Undo permanently unwinds history; the reversal is not re-logged
    #[default]
    Rewind,

    /// The reversal is itself recorded as a new forward move, so repeated
    /// undo calls toggle between grab and drop instead of unwinding
    Relog,
}

/// What an undo call actually reversed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The log was empty; nothing happened
    Nothing,

    /// A grab was reversed by dropping the item
    UndidGrab { item: ItemName },

    /// A drop was reversed by grabbing the item back
    UndidDrop { item: ItemName },

    /// A rest was reversed by subtracting its points
    UndidRest { points: i32 },
}

impl fmt::Display for UndoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoOutcome::Nothing => write!(f, "No actions to undo"),
            UndoOutcome::UndidGrab { item } => {
                write!(f, "Prior action undone: dropped {item}")
            }
            UndoOutcome::UndidDrop { item } => {
                write!(f, "Prior action undone: grabbed {item}")
            }
            UndoOutcome::UndidRest { points } => {
                write!(f, "Prior action undone: subtracted {points} points")
            }
        }
    }
}

/// Undo log for tracking and reversing moves
///
/// An ordered sequence with the most recent move at the end, append-only
/// except for `pop`, which feeds the session's undo operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndoLog {
    /// Stack of moves (most recent at end)
    moves: Vec<Move>,

    /// Is logging enabled? (disabled for replay benchmarks)
    enabled: bool,
}

impl UndoLog {
    pub fn new() -> Self {
        UndoLog {
            moves: Vec::new(),
            enabled: true,
        }
    }

    /// Create a disabled undo log (for benchmarking)
    pub fn disabled() -> Self {
        UndoLog {
            moves: Vec::new(),
            enabled: false,
        }
    }

    /// Log a move
    pub fn log(&mut self, mv: Move) {
        if self.enabled {
            self.moves.push(mv);
        }
    }

    /// Record a grab; the caller has already applied the score gain
    pub fn record_grab(&mut self, item: ItemName) {
        self.log(Move::Grab { item });
    }

    /// Record a drop; the caller has already applied the score loss
    pub fn record_drop(&mut self, item: ItemName) {
        self.log(Move::Drop { item });
    }

    /// Record a rest; the caller has already added `REST_POINTS`
    pub fn record_rest(&mut self) {
        self.log(Move::Rest {
            points: REST_POINTS,
        });
    }

    /// Get the most recent move without removing it
    pub fn peek(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Pop and return the most recent move
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Get number of moves in the log
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Clear the entire log
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Get all moves (for debugging/serialization)
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_log() {
        let mut log = UndoLog::new();
        assert_eq!(log.len(), 0);

        let mv = Move::Grab {
            item: ItemName::from("drone"),
        };

        log.log(mv.clone());
        assert_eq!(log.len(), 1);

        let popped = log.pop().unwrap();
        assert!(matches!(popped, Move::Grab { .. }));
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_record_helpers() {
        let mut log = UndoLog::new();

        log.record_grab(ItemName::from("bat"));
        log.record_drop(ItemName::from("bat"));
        log.record_rest();

        let moves = log.moves();
        assert!(matches!(moves[0], Move::Grab { .. }));
        assert!(matches!(moves[1], Move::Drop { .. }));
        assert!(matches!(
            moves[2],
            Move::Rest {
                points: REST_POINTS
            }
        ));
    }

    #[test]
    fn test_pop_is_most_recent_first() {
        let mut log = UndoLog::new();

        log.record_grab(ItemName::from("drone"));
        log.record_grab(ItemName::from("bat"));

        match log.pop().unwrap() {
            Move::Grab { item } => assert_eq!(item.as_str(), "bat"),
            other => panic!("unexpected move: {other:?}"),
        }
        match log.pop().unwrap() {
            Move::Grab { item } => assert_eq!(item.as_str(), "drone"),
            other => panic!("unexpected move: {other:?}"),
        }
        assert!(log.pop().is_none());
    }

    #[test]
    fn test_disabled_log() {
        let mut log = UndoLog::disabled();

        log.record_grab(ItemName::from("drone"));

        assert_eq!(log.len(), 0); // Nothing logged when disabled
    }
}
