//! Grid module - the locked terrain of the board
//!
//! The grid is a 10x20 matrix of cells stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! The grid is `Copy`: lock and line clear produce a new value instead of
//! editing the one held by the live game state.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

/// Result of removing full rows from a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClear {
    pub grid: Grid,
    pub cleared: u32,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a locked block (false when out of bounds)
    pub fn is_locked(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell { locked: true, .. }))
    }

    /// Check if a row is completely locked
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.locked))
            .unwrap_or(false)
    }

    /// Borrow one row, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy of this grid with `kind` locked at every listed coordinate.
    ///
    /// Coordinates above the board (negative y) are dropped silently; they
    /// only occur when a piece locks while still partly off the top.
    pub fn with_locked(&self, coords: &[(i8, i8)], kind: PieceKind) -> Grid {
        let mut next = *self;
        for &(x, y) in coords {
            if y >= 0 {
                next.set(x, y, Cell::locked(kind));
            }
        }
        next
    }

    /// Remove every full row, returning the compacted grid and the row count.
    ///
    /// Surviving rows keep their relative order; empty rows are inserted at the
    /// top so the height never changes. Uses a bottom-up two-pointer pass.
    pub fn clear_full_rows(&self) -> LineClear {
        let mut grid = *self;
        let mut cleared = 0;
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * WIDTH;
                    grid.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
                }
            }
        }

        grid.cells[..write_y * WIDTH].fill(Cell::EMPTY);

        LineClear { grid, cleared }
    }

    /// Indices of full rows, top to bottom
    pub fn full_rows(&self) -> ArrayVec<usize, HEIGHT> {
        (0..HEIGHT).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Create from a 2D vector (row-major, top row first)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        if rows.len() != HEIGHT || rows.iter().any(|row| row.len() != WIDTH) {
            return None;
        }
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            grid.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        Some(grid)
    }

    /// Convert to a 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
