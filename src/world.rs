//! World data: directions, scan coordinates, and the evidence-location table

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass direction the detective can walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Parse a direction name, case-insensitively
    ///
    /// Anything other than the four compass directions is rejected.
    pub fn parse(s: &str) -> Option<Direction> {
        if s.eq_ignore_ascii_case("north") {
            Some(Direction::North)
        } else if s.eq_ignore_ascii_case("south") {
            Some(Direction::South)
        } else if s.eq_ignore_ascii_case("east") {
            Some(Direction::East)
        } else if s.eq_ignore_ascii_case("west") {
            Some(Direction::West)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        write!(f, "{name}")
    }
}

/// Scan coordinates for the drone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinates { x, y }
    }

    /// Valid when both components are non-negative
    pub fn is_valid(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed evidence-location table: area name to clue count
///
/// Constructed once at session start and never mutated afterwards.
/// Lookup is a literal, case-sensitive match on the area name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceMap {
    locations: FxHashMap<String, u32>,
}

impl EvidenceMap {
    /// The standard backyard-mystery scene
    pub fn standard() -> Self {
        let mut locations = FxHashMap::default();
        locations.insert("house".to_string(), 2);
        locations.insert("backyard".to_string(), 2);
        locations.insert("shed".to_string(), 1);
        locations.insert("tree".to_string(), 1);
        locations.insert("pet house".to_string(), 1);
        EvidenceMap { locations }
    }

    /// Clue count for an area, or None if the area holds no evidence
    pub fn clues_at(&self, area: &str) -> Option<u32> {
        self.locations.get(area).copied()
    }

    /// Number of areas holding evidence
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
