//! Session runner
//!
//! Applies command scripts or an interactive command stream to a session
//! and reports a summary when done.

/// Macro for conditional logging that avoids allocation when the feature
/// is disabled
///
/// When the verbose-logging feature is off, this becomes a no-op at compile
/// time, eliminating the format! allocations on the per-command path.
macro_rules! log_if_verbose {
    ($self:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self.game.logger.verbose(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$self; // Suppress unused variable warning
        }
    };
}

use crate::game::command::Command;
use crate::game::GameState;
use crate::{GumshoeError, Result};
use std::io::BufRead;

/// Verbosity level for session output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during the session
    Silent = 0,
    /// Minimal - only the narration and final score
    Minimal = 1,
    /// Normal - every action's status line (default)
    #[default]
    Normal = 2,
    /// Verbose - status lines plus per-command score deltas
    Verbose = 3,
}

/// Result of running a session to completion
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Number of commands applied
    pub commands_run: u32,
    /// Final overall points
    pub final_points: i32,
}

/// Session runner
///
/// Borrows the session state mutably and feeds commands to it, either from
/// a fixed script or line-by-line from a reader.
pub struct Session<'a> {
    /// The session state
    pub game: &'a mut GameState,
    /// Commands applied so far
    commands_run: u32,
}

impl<'a> Session<'a> {
    pub fn new(game: &'a mut GameState) -> Self {
        Session {
            game,
            commands_run: 0,
        }
    }

    /// Apply a single command to the session
    pub fn apply(&mut self, command: &Command) {
        self.commands_run += 1;
        log_if_verbose!(self, "command {}: {:?}", self.commands_run, command);

        match command {
            Command::Grab(item) => {
                self.game.grab(item);
            }
            Command::Drop(item) => {
                self.game.drop_item(item);
            }
            Command::Examine(area) => {
                self.game.examine(area);
            }
            Command::Use(item) => {
                self.game.use_item(item);
            }
            Command::Walk(direction) => {
                self.game.walk(direction);
            }
            Command::Fly(x, y) => {
                self.game.fly(*x, *y);
            }
            Command::Rest => {
                self.game.rest();
            }
            Command::Shrink => {
                self.game.shrink();
            }
            Command::Grow => {
                self.game.grow();
            }
            Command::Undo => {
                self.game.undo();
            }
            Command::Points => {
                let points = self.game.overall_points();
                self.game.logger.minimal(&format!("Overall points: {points}"));
            }
            // Quit is handled by the interactive loop; in a script it is inert
            Command::Quit => {}
        }
    }

    /// Run a fixed command script to completion
    pub fn run_script(&mut self, script: &[Command]) -> SessionSummary {
        for command in script {
            self.apply(command);
        }
        self.summary()
    }

    /// Run interactively, reading one command per line until Quit or EOF
    ///
    /// Parse errors are reported and skipped; the session keeps going.
    pub fn run_interactive(&mut self, input: impl BufRead) -> Result<SessionSummary> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Command::parse(line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(&command),
                Err(GumshoeError::InvalidCommand(reason)) => {
                    self.game.logger.minimal(&format!("Unknown command: {reason}"));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(self.summary())
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            commands_run: self.commands_run,
            final_points: self.game.overall_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet_session_state() -> GameState {
        let mut game = GameState::new("Test");
        game.logger.set_verbosity(VerbosityLevel::Silent);
        game
    }

    #[test]
    fn test_run_script() {
        let mut game = quiet_session_state();
        let script = vec![
            Command::Grab("drone".to_string()),
            Command::Rest,
            Command::Undo,
        ];

        let summary = Session::new(&mut game).run_script(&script);

        assert_eq!(summary.commands_run, 3);
        assert_eq!(summary.final_points, 5);
    }

    #[test]
    fn test_interactive_skips_bad_lines() {
        let mut game = quiet_session_state();
        let input = Cursor::new("grab drone\n\nteleport home\nexamine backyard\nquit\nrest\n");

        let summary = Session::new(&mut game).run_interactive(input).unwrap();

        // grab + examine; the bad line is skipped, quit stops before rest
        assert_eq!(summary.commands_run, 2);
        assert_eq!(summary.final_points, 5);
    }

    #[test]
    fn test_interactive_ends_at_eof() {
        let mut game = quiet_session_state();
        let input = Cursor::new("rest\nrest\n");

        let summary = Session::new(&mut game).run_interactive(input).unwrap();

        assert_eq!(summary.commands_run, 2);
        assert_eq!(summary.final_points, 10);
    }
}
