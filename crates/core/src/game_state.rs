//! Game state value.
//!
//! A `GameState` is an immutable snapshot: the engine builds a new one for
//! every accepted command and hands observers a shared reference to it.

use crate::grid::Grid;
use crate::pieces::{spawn, Piece};
use crate::types::PieceKind;

/// Complete game state
///
/// Invariants kept by the engine:
/// - `active` is None exactly when `game_over` is set
/// - `level == lines / 10 + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub grid: Grid,
    pub active: Option<Piece>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    pub paused: bool,
}

impl GameState {
    /// Fresh game: empty grid, `first` spawned as the active piece
    pub fn fresh(first: PieceKind, next: PieceKind) -> Self {
        Self::on_grid(Grid::new(), first, next)
    }

    /// Game starting on an existing grid (for puzzles and tests)
    ///
    /// If `first` cannot spawn the state starts out game over.
    pub fn on_grid(grid: Grid, first: PieceKind, next: PieceKind) -> Self {
        let active = spawn(&grid, first);
        Self {
            grid,
            active,
            next,
            score: 0,
            level: 1,
            lines: 0,
            game_over: active.is_none(),
            paused: false,
        }
    }

    /// Whether player commands can currently act on the game
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Check if the active piece could move by `(dx, dy)`
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        match self.active {
            Some(piece) => !piece.shifted(dx, dy).collides_with(&self.grid),
            None => false,
        }
    }

    /// Row the active piece would land on if hard dropped
    pub fn landing_y(&self) -> Option<i8> {
        let piece = self.active?;
        let mut landed = piece;
        while !landed.shifted(0, 1).collides_with(&self.grid) {
            landed = landed.shifted(0, 1);
        }
        Some(landed.position.y)
    }
}
