//! Gumshoe - text-driven detective investigation engine
//!
//! A small simulation of a backyard mystery: a detective grabs and drops
//! items, examines areas for clues, and accumulates points. Built around a
//! log of reversible moves that can be popped and reversed most-recent-first.

pub mod core;
pub mod game;
pub mod world;
pub mod undo;
pub mod error;

pub use error::{GumshoeError, Result};
