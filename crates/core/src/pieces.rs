//! Pieces module - tetromino shape matrices, rotation and spawning
//!
//! Shapes are square 0/1 matrices (side 2-4). Rotation is a plain 90° clockwise
//! matrix transform; placement after rotation uses a simple horizontal wall
//! kick (`WALL_KICK_OFFSETS`) instead of SRS kick tables.

use arrayvec::ArrayVec;

use crate::collision::collides;
use crate::grid::Grid;
use crate::types::{PieceKind, Position, BOARD_WIDTH, SPAWN_Y, WALL_KICK_OFFSETS};

/// Largest shape side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupied cells of one shape, as `(x, y)` pairs
pub type ShapeCells = ArrayVec<(i8, i8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square occupancy matrix of a piece.
///
/// Only the top-left `size x size` block of `rows` is meaningful; the rest is
/// kept zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from a square matrix of 0/1 values.
    ///
    /// Returns None if the matrix is not square, is larger than 4x4, or holds a
    /// value other than 0 or 1.
    pub fn from_rows(matrix: &[&[u8]]) -> Option<Self> {
        let size = matrix.len();
        if size == 0 || size > MAX_SHAPE_SIZE {
            return None;
        }
        let mut rows = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in matrix.iter().enumerate() {
            if row.len() != size {
                return None;
            }
            for (x, &value) in row.iter().enumerate() {
                if value > 1 {
                    return None;
                }
                rows[y][x] = value;
            }
        }
        Some(Self {
            size: size as u8,
            rows,
        })
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.rows[y][x] != 0
    }

    /// Offsets of occupied cells, row by row
    pub fn cells(&self) -> ShapeCells {
        let n = self.size();
        let mut out = ShapeCells::new();
        for y in 0..n {
            for x in 0..n {
                if self.rows[y][x] != 0 {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// The matrix as nested vectors (for display and assertions)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let n = self.size();
        self.rows[..n].iter().map(|row| row[..n].to_vec()).collect()
    }

    /// Rotate 90° clockwise: `out[i][j] = in[N-1-j][i]`
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let mut rows = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, out_row) in rows.iter_mut().enumerate().take(n) {
            for (j, value) in out_row.iter_mut().enumerate().take(n) {
                *value = self.rows[n - 1 - j][i];
            }
        }
        Self {
            size: self.size,
            rows,
        }
    }
}

/// 90° clockwise rotation of a shape matrix
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotated_cw()
}

const fn pad(rows: [[u8; 4]; 4], size: u8) -> Shape {
    Shape { size, rows }
}

const I_SHAPE: Shape = pad([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]], 4);
const J_SHAPE: Shape = pad([[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0; 4]], 3);
const L_SHAPE: Shape = pad([[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0; 4]], 3);
const O_SHAPE: Shape = pad([[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]], 2);
const S_SHAPE: Shape = pad([[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0; 4]], 3);
const T_SHAPE: Shape = pad([[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0; 4]], 3);
const Z_SHAPE: Shape = pad([[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0; 4]], 3);

/// Spawn orientation of a piece kind
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl Piece {
    /// Board coordinates of every occupied cell
    pub fn board_cells(&self) -> ShapeCells {
        self.shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.position.x + dx, self.position.y + dy))
            .collect()
    }

    /// Same piece shifted by `(dx, dy)`; legality is not checked
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..*self
        }
    }

    /// Whether the piece collides with `grid` at its current position
    pub fn collides_with(&self, grid: &Grid) -> bool {
        collides(&self.shape, self.position, grid)
    }
}

/// Horizontally centered spawn position for a shape
pub fn spawn_position(shape: &Shape) -> Position {
    let x = (BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8;
    Position::new(x, SPAWN_Y)
}

/// Spawn a piece of `kind` on `grid`.
///
/// The piece is placed at row -1, but legality is probed one row lower (row
/// 0). A None result means the stack has reached the spawn area: game over.
pub fn spawn(grid: &Grid, kind: PieceKind) -> Option<Piece> {
    let shape = canonical_shape(kind);
    let position = spawn_position(&shape);

    if collides(&shape, Position::new(position.x, 0), grid) {
        return None;
    }

    Some(Piece {
        kind,
        shape,
        position,
    })
}

/// Try to rotate a piece with horizontal wall kicks.
/// Returns the placed piece and the accepted x offset, or None if all kicks fail.
pub fn try_rotate(piece: &Piece, grid: &Grid) -> Option<(Piece, i8)> {
    let shape = rotate(&piece.shape);

    WALL_KICK_OFFSETS.iter().find_map(|&dx| {
        let position = piece.position.offset(dx, 0);
        if collides(&shape, position, grid) {
            None
        } else {
            Some((
                Piece {
                    shape,
                    position,
                    ..*piece
                },
                dx,
            ))
        }
    })
}
