//! Session state, actions, and the command-driven runner

pub mod actions;
pub mod command;
pub mod logger;
pub mod script;
pub mod session;
pub mod snapshot;
pub mod state;

pub use actions::{GROW_POINTS, SHRINK_POINTS, USE_COST};
pub use command::Command;
pub use logger::{GameLogger, LogEntry, OutputFormat, OutputMode};
pub use session::{Session, SessionSummary, VerbosityLevel};
pub use snapshot::GameSnapshot;
pub use state::GameState;
