//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and the state machine that ties them
//! together. It has **no dependencies** on terminals, input devices or I/O:
//!
//! - **Deterministic**: the same seed deals the same pieces
//! - **Value snapshots**: each accepted command produces a new [`GameState`]
//! - **Host-driven timing**: gravity advances only when the host calls
//!   [`GravityScheduler::on_frame`]
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 locked terrain and line clearing
//! - [`pieces`]: shape matrices, clockwise rotation, spawning, wall kicks
//! - [`collision`]: the legality check everything else builds on
//! - [`scoring`]: line/drop points, leveling, gravity intervals
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: the snapshot value
//! - [`engine`]: command handling and notifications
//! - [`observer`]: subscription trait for state-change listeners
//! - [`gravity`]: frame-driven gravity scheduler
//! - [`commentary`]: score-bucketed end-of-game lines
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on every draw
//! - **Simple wall kicks**: after rotating, offsets 0, +1, -1, +2, -2 are tried
//! - **Immediate lock**: a piece locks the first gravity step it cannot fall
//! - **Scoring**: 100/300/500/800 times level, 2 points per hard-dropped row
//! - **Leveling**: one level per 10 lines, starting at level 1
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Engine, GravityScheduler, FrameOutcome};
//! use blockfall_types::Command;
//!
//! let mut engine = Engine::new(12345);
//! let mut gravity = GravityScheduler::new();
//! let handle = gravity.start();
//!
//! engine.apply(Command::MoveRight);
//! engine.apply(Command::Rotate);
//!
//! // First frame sets the timing baseline; 801ms later gravity fires.
//! gravity.on_frame(handle, 0, &mut engine);
//! assert_eq!(gravity.on_frame(handle, 801, &mut engine), FrameOutcome::Ticked);
//!
//! engine.apply(Command::HardDrop);
//! assert!(engine.state().score > 0);
//! ```

pub mod collision;
pub mod commentary;
pub mod engine;
pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod observer;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use engine::Engine;
pub use game_state::GameState;
pub use gravity::{FrameHandle, FrameOutcome, GravityScheduler, MonotonicClock, SchedulerPhase};
pub use grid::{Grid, LineClear};
pub use observer::{EngineObserver, SubscriptionId};
pub use pieces::{canonical_shape, rotate, spawn, try_rotate, Piece, Shape};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{gravity_interval_ms, hard_drop_score, level_for_lines, line_clear_score};
