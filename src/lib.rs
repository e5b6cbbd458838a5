//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core,input,term,types}` and
//! hosts the pieces the terminal binary needs on top of them: run
//! configuration, the JSON-lines event log and the game-over latch.

pub mod config;
pub mod event_log;
pub mod game_over;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::RunConfig;
pub use event_log::EventLog;
pub use game_over::GameOverLatch;
