//! Strongly-typed wrappers for game concepts
//!
//! Instead of passing bare Strings around, distinct concepts get distinct
//! types that cannot be mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item name (distinct from other string types)
///
/// Examples: "magnifying glass", "drone", "bat"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(s: impl Into<String>) -> Self {
        ItemName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Points awarded for grabbing this item and forfeited for dropping it:
    /// the number of characters in its name.
    pub fn score_value(&self) -> i32 {
        self.0.chars().count() as i32
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemName {
    fn from(s: String) -> Self {
        ItemName(s)
    }
}

impl From<&str> for ItemName {
    fn from(s: &str) -> Self {
        ItemName(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_value() {
        assert_eq!(ItemName::from("drone").score_value(), 5);
        assert_eq!(ItemName::from("bat").score_value(), 3);
        assert_eq!(ItemName::from("magnifying glass").score_value(), 16);
        assert_eq!(ItemName::from("").score_value(), 0);
    }

    #[test]
    fn test_display() {
        let item = ItemName::new("magnifying glass");
        assert_eq!(item.to_string(), "magnifying glass");
        assert_eq!(item.as_str(), "magnifying glass");
    }
}
