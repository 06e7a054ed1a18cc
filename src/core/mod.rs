//! Core game types

pub mod types;
pub mod player;

pub use types::ItemName;
pub use player::Detective;
