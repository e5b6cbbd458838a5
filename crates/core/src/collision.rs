//! Collision resolver.

use crate::grid::Grid;
use crate::pieces::Shape;
use crate::types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` placed at `position` is illegal on `grid`.
///
/// An occupied cell collides when its column is outside the board, its row is
/// below the bottom, or it lands on a locked cell. Rows above the board only
/// check the column bound.
pub fn collides(shape: &Shape, position: Position, grid: &Grid) -> bool {
    shape.cells().iter().any(|&(dx, dy)| {
        let x = position.x as i16 + dx as i16;
        let y = position.y as i16 + dy as i16;

        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return true;
        }

        y >= 0 && grid.is_locked(x as i8, y as i8)
    })
}
