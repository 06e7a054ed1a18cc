//! Centralized session logger
//!
//! Every action reports its status line through this logger rather than
//! printing directly, so output can be silenced by verbosity or captured
//! in memory for deterministic log assertions in tests.

use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Output format for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Machine-readable JSON output (one object per line)
    Json,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Verbosity level of this log entry
    pub level: VerbosityLevel,
    /// Log message
    pub message: String,
}

/// Guard type that provides read-only access to captured log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    /// Get an iterator over log entries
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    /// Get the number of log entries
    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Session logger with verbosity filtering and optional capture
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_format: OutputFormat,
    output_mode: OutputMode,

    /// Captured log entries
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        GameLogger {
            verbosity: VerbosityLevel::default(),
            output_format: OutputFormat::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    /// Create a logger with specified verbosity
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_format: OutputFormat::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    /// Set output mode (Stdout, Memory, or Both)
    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Get current output mode
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Enable log capture to the in-memory buffer (suppresses stdout)
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    /// Disable log capture
    pub fn disable_capture(&mut self) {
        self.output_mode = OutputMode::Stdout;
    }

    /// Check if log capture is enabled
    pub fn is_capturing(&self) -> bool {
        matches!(self.output_mode, OutputMode::Memory | OutputMode::Both)
    }

    /// Flush buffered logs to stdout, respecting verbosity, then clear
    pub fn flush_buffer(&mut self) {
        let buffer = self.log_buffer.borrow();
        for entry in buffer.iter() {
            if entry.level <= self.verbosity {
                self.log_to_stdout(entry.level, &entry.message);
            }
        }
        drop(buffer);
        self.clear_logs();
    }

    /// Get access to captured log entries
    ///
    /// Returns a guard that derefs to `[LogEntry]`:
    ///
    /// # Example
    /// ```ignore
    /// let count = logger.logs().iter()
    ///     .filter(|log| log.message.contains("clue"))
    ///     .count();
    /// ```
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    /// Clear the log buffer
    pub fn clear_logs(&mut self) {
        self.log_buffer.borrow_mut().clear();
    }

    /// Set output format (Text or JSON)
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    /// Get current output format
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Get current verbosity level
    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    /// Set verbosity level
    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    #[inline]
    fn log_to_stdout(&self, level: VerbosityLevel, message: &str) {
        match self.output_format {
            OutputFormat::Text => {
                if level == VerbosityLevel::Minimal {
                    println!("{}", message);
                } else {
                    println!("  {}", message);
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({ "level": level, "message": message })
                );
            }
        }
    }

    #[inline]
    fn log(&self, level: VerbosityLevel, message: &str) {
        let should_capture = matches!(self.output_mode, OutputMode::Memory | OutputMode::Both);
        let should_output = matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both);

        // Early exit if the message won't be used
        if level > self.verbosity && !should_capture {
            return;
        }

        if should_capture {
            self.log_buffer.borrow_mut().push(LogEntry {
                level,
                message: message.to_string(),
            });
        }

        if should_output && level <= self.verbosity {
            self.log_to_stdout(level, message);
        }
    }

    /// Log at Minimal level
    #[inline]
    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, message);
    }

    /// Log at Normal level
    #[inline]
    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message);
    }

    /// Log at Verbose level
    #[inline]
    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, message);
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}

impl Clone for GameLogger {
    fn clone(&self) -> Self {
        GameLogger {
            verbosity: self.verbosity,
            output_format: self.output_format,
            output_mode: self.output_mode,
            log_buffer: RefCell::new(Vec::new()),
        }
    }
}

// Snapshots carry the logger configuration but not the transient buffer.
impl Serialize for GameLogger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("GameLogger", 3)?;
        state.serialize_field("verbosity", &self.verbosity)?;
        state.serialize_field("output_format", &self.output_format)?;
        state.serialize_field("output_mode", &self.output_mode)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for GameLogger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct GameLoggerData {
            verbosity: VerbosityLevel,
            output_format: OutputFormat,
            output_mode: OutputMode,
        }

        let data = GameLoggerData::deserialize(deserializer)?;
        Ok(GameLogger {
            verbosity: data.verbosity,
            output_format: data.output_format,
            output_mode: data.output_mode,
            log_buffer: RefCell::new(Vec::new()),
        })
    }
}
