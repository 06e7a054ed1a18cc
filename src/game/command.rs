//! Player commands and literal-token parsing
//!
//! The command surface is a fixed verb set. Parsing is nothing more than
//! matching the first whitespace token and taking the rest of the line as
//! the argument; there is no grammar.

use crate::{GumshoeError, Result};

/// A single player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick up an item, gaining its score value
    Grab(String),
    /// Put down an item, forfeiting its score value
    Drop(String),
    /// Search an area for clues
    Examine(String),
    /// Use an item at the cost of one point
    Use(String),
    /// Walk in a compass direction
    Walk(String),
    /// Fly the drone to scan coordinates
    Fly(i32, i32),
    /// Take a break for a fixed point bonus
    Rest,
    /// Shrink to slip under the gate
    Shrink,
    /// Grow to reach high places
    Grow,
    /// Reverse the most recent reversible move
    Undo,
    /// Report overall points
    Points,
    /// End an interactive session
    Quit,
}

impl Command {
    /// Parse a command line
    ///
    /// The first token selects the verb; everything after it is the
    /// argument. Items and areas may be multi-word ("magnifying glass",
    /// "pet house").
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let require_arg = |what: &str| -> Result<String> {
            if rest.is_empty() {
                Err(GumshoeError::InvalidCommand(format!(
                    "'{verb}' needs {what}"
                )))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "grab" => Ok(Command::Grab(require_arg("an item")?)),
            "drop" => Ok(Command::Drop(require_arg("an item")?)),
            "examine" => Ok(Command::Examine(require_arg("an area")?)),
            "use" => Ok(Command::Use(require_arg("an item")?)),
            "walk" => Ok(Command::Walk(require_arg("a direction")?)),
            "fly" => {
                let mut parts = rest.split_whitespace();
                let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
                    return Err(GumshoeError::InvalidCommand(
                        "'fly' needs exactly two coordinates".to_string(),
                    ));
                };
                let x = x.parse().map_err(|_| {
                    GumshoeError::InvalidCommand(format!("bad coordinate '{x}'"))
                })?;
                let y = y.parse().map_err(|_| {
                    GumshoeError::InvalidCommand(format!("bad coordinate '{y}'"))
                })?;
                Ok(Command::Fly(x, y))
            }
            "rest" => Ok(Command::Rest),
            "shrink" => Ok(Command::Shrink),
            "grow" => Ok(Command::Grow),
            "undo" => Ok(Command::Undo),
            "points" | "score" => Ok(Command::Points),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(GumshoeError::InvalidCommand(format!(
                "unknown verb '{verb}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(Command::parse("rest").unwrap(), Command::Rest);
        assert_eq!(Command::parse("shrink").unwrap(), Command::Shrink);
        assert_eq!(Command::parse("grow").unwrap(), Command::Grow);
        assert_eq!(Command::parse("undo").unwrap(), Command::Undo);
        assert_eq!(Command::parse("points").unwrap(), Command::Points);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_multiword_argument() {
        assert_eq!(
            Command::parse("grab magnifying glass").unwrap(),
            Command::Grab("magnifying glass".to_string())
        );
        assert_eq!(
            Command::parse("examine pet house").unwrap(),
            Command::Examine("pet house".to_string())
        );
    }

    #[test]
    fn test_parse_fly_coordinates() {
        assert_eq!(Command::parse("fly 5 5").unwrap(), Command::Fly(5, 5));
        assert_eq!(Command::parse("fly -1 0").unwrap(), Command::Fly(-1, 0));

        assert!(Command::parse("fly").is_err());
        assert!(Command::parse("fly 5").is_err());
        assert!(Command::parse("fly 5 5 5").is_err());
        assert!(Command::parse("fly here there").is_err());
    }

    #[test]
    fn test_parse_missing_argument() {
        assert!(Command::parse("grab").is_err());
        assert!(Command::parse("walk").is_err());
        assert!(Command::parse("examine  ").is_err());
    }

    #[test]
    fn test_parse_unknown_verb() {
        let err = Command::parse("teleport home").unwrap_err();
        assert!(matches!(err, crate::GumshoeError::InvalidCommand(_)));
    }

    #[test]
    fn test_parse_verb_is_case_insensitive() {
        assert_eq!(
            Command::parse("GRAB drone").unwrap(),
            Command::Grab("drone".to_string())
        );
    }
}
