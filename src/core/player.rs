//! Detective representation

use serde::{Deserialize, Serialize};

/// The player character: a detective with a running point total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detective {
    /// Detective name
    pub name: String,

    /// Cumulative points earned across the investigation
    pub points: i32,
}

impl Detective {
    pub fn new(name: impl Into<String>) -> Self {
        Detective {
            name: name.into(),
            points: 0,
        }
    }

    pub fn gain_points(&mut self, amount: i32) {
        self.points += amount;
    }

    pub fn lose_points(&mut self, amount: i32) {
        self.points -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detective_creation() {
        let detective = Detective::new("Alice");

        assert_eq!(detective.name, "Alice");
        assert_eq!(detective.points, 0);
    }

    #[test]
    fn test_points() {
        let mut detective = Detective::new("Bob");

        detective.gain_points(5);
        assert_eq!(detective.points, 5);

        detective.lose_points(8);
        // Points can go negative; no floor is enforced
        assert_eq!(detective.points, -3);
    }
}
