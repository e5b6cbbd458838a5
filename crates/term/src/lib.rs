//! Terminal "game renderer" module.
//!
//! Renders `GameState` snapshots into a simple framebuffer which is then
//! flushed to the terminal with `crossterm`. There is no widget layer: the
//! board is drawn cell by cell, two columns per board cell to keep squares
//! roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
