//! Scripted detective actions
//!
//! Each action mutates the session synchronously, reports a status line
//! through the logger, and, for the reversible subset (grab, drop, rest),
//! records into the undo log. Actions are total: invalid input is a
//! reported no-op, never an error.

use crate::core::ItemName;
use crate::game::GameState;
use crate::undo::REST_POINTS;
use crate::world::{Coordinates, Direction};

/// Point cost of using an item
pub const USE_COST: i32 = 1;

/// Points gained for shrinking under the gate
pub const SHRINK_POINTS: i32 = 3;

/// Points gained for growing to reach the tree branch
pub const GROW_POINTS: i32 = 5;

impl GameState {
    /// Grab an item, gaining points equal to its score value. Reversible.
    ///
    /// Returns the delta applied.
    pub fn grab(&mut self, item: &str) -> i32 {
        let item = ItemName::from(item);
        let delta = item.score_value();
        self.detective.gain_points(delta);
        self.logger.normal(&format!("Grabbing {item}"));
        self.logger
            .verbose(&format!("+{delta} points (now {})", self.detective.points));
        self.undo_log.record_grab(item);
        delta
    }

    /// Drop an item, forfeiting its score value. Reversible.
    ///
    /// Returns a description of what was dropped.
    pub fn drop_item(&mut self, item: &str) -> String {
        let item = ItemName::from(item);
        let delta = item.score_value();
        self.detective.lose_points(delta);
        self.logger.normal(&format!("Dropping {item}"));
        self.logger
            .verbose(&format!("-{delta} points (now {})", self.detective.points));
        let description = format!("Dropped {item}");
        self.undo_log.record_drop(item);
        description
    }

    /// Examine an area for clues. Score is unchanged.
    ///
    /// Returns the clue count for a known area, None otherwise.
    pub fn examine(&mut self, area: &str) -> Option<u32> {
        self.logger.normal(&format!("Examining {area}"));
        let clues = self.world.clues_at(area);
        match clues {
            Some(count) => self
                .logger
                .normal(&format!("You found {count} clue(s) in the {area}.")),
            None => self.logger.normal("No clues in this area."),
        }
        clues
    }

    /// Use an item at the cost of one point. Not reversible.
    ///
    /// Returns the delta applied.
    pub fn use_item(&mut self, item: &str) -> i32 {
        self.detective.lose_points(USE_COST);
        self.logger.normal(&format!(
            "Used {item}. Points down by {USE_COST} (now {}).",
            self.detective.points
        ));
        -USE_COST
    }

    /// Walk in a compass direction. Score never changes.
    ///
    /// Returns whether the direction was valid; an invalid direction is a
    /// reported no-op.
    pub fn walk(&mut self, direction: &str) -> bool {
        match Direction::parse(direction) {
            Some(dir) => {
                self.logger.normal(&format!("Walking {dir}"));
                true
            }
            None => {
                self.logger.normal("Invalid direction");
                false
            }
        }
    }

    /// Fly the drone to scan coordinates. Score never changes.
    ///
    /// Returns whether the coordinates were valid; any negative component
    /// is a reported no-op.
    pub fn fly(&mut self, x: i32, y: i32) -> bool {
        let target = Coordinates::new(x, y);
        if target.is_valid() {
            self.logger.normal(&format!(
                "Flying to {target} to deploy the drone and scan the area"
            ));
            true
        } else {
            self.logger.normal("Invalid coordinates");
            false
        }
    }

    /// Rest for a fixed point bonus. Reversible.
    ///
    /// Returns the delta applied.
    pub fn rest(&mut self) -> i32 {
        self.detective.gain_points(REST_POINTS);
        self.logger.normal("Resting");
        self.logger
            .normal(&format!("You gained {REST_POINTS} points for resting."));
        self.undo_log.record_rest();
        REST_POINTS
    }

    /// Shrink to slip under the gate into the yard. Not reversible.
    ///
    /// Returns the points gained.
    pub fn shrink(&mut self) -> i32 {
        self.detective.gain_points(SHRINK_POINTS);
        self.logger
            .normal("Shrinking to slip under the gate into the yard.");
        self.logger.verbose(&format!(
            "+{SHRINK_POINTS} points (now {})",
            self.detective.points
        ));
        SHRINK_POINTS
    }

    /// Grow to reach the tree branch. Not reversible.
    ///
    /// Returns the points gained.
    pub fn grow(&mut self) -> i32 {
        self.detective.gain_points(GROW_POINTS);
        self.logger
            .normal("Growing to reach the tree branch overhead.");
        self.logger.verbose(&format!(
            "+{GROW_POINTS} points (now {})",
            self.detective.points
        ));
        GROW_POINTS
    }
}
