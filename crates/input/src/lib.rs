//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the engine's [`crate::types::Command`]
//! set. There is no key-repeat handling here: each key press is one command,
//! and anything that does not map to a command is dropped.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_key, should_quit};
