//! Error types for Gumshoe

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GumshoeError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, GumshoeError>;
