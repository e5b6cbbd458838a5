//! Piece tests - shapes, rotation, spawning

use blockfall::core::{canonical_shape, rotate, spawn, try_rotate, Grid, Piece, Shape};
use blockfall::types::{Cell, PieceKind, Position};

#[test]
fn test_canonical_shapes() {
    let expect: [(PieceKind, Vec<Vec<u8>>); 7] = [
        (
            PieceKind::I,
            vec![
                vec![0, 0, 0, 0],
                vec![1, 1, 1, 1],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ],
        ),
        (PieceKind::J, vec![vec![1, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]),
        (PieceKind::L, vec![vec![0, 0, 1], vec![1, 1, 1], vec![0, 0, 0]]),
        (PieceKind::O, vec![vec![1, 1], vec![1, 1]]),
        (PieceKind::S, vec![vec![0, 1, 1], vec![1, 1, 0], vec![0, 0, 0]]),
        (PieceKind::T, vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 0, 0]]),
        (PieceKind::Z, vec![vec![1, 1, 0], vec![0, 1, 1], vec![0, 0, 0]]),
    ];
    for (kind, rows) in expect {
        assert_eq!(canonical_shape(kind).to_rows(), rows, "{:?}", kind);
        assert_eq!(canonical_shape(kind).cells().len(), 4);
    }
}

#[test]
fn test_rotate_t_clockwise() {
    let t = canonical_shape(PieceKind::T);
    assert_eq!(
        rotate(&t).to_rows(),
        vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]
    );
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let shape = canonical_shape(kind);
        let back = rotate(&rotate(&rotate(&rotate(&shape))));
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotate_arbitrary_matrix() {
    let shape = Shape::from_rows(&[&[1, 1], &[0, 1]]).unwrap();
    assert_eq!(rotate(&shape).to_rows(), vec![vec![0, 1], vec![1, 1]]);
    assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
}

#[test]
fn test_spawn_positions() {
    let grid = Grid::new();
    assert_eq!(spawn(&grid, PieceKind::I).unwrap().position, Position::new(3, -1));
    assert_eq!(spawn(&grid, PieceKind::O).unwrap().position, Position::new(4, -1));
    assert_eq!(spawn(&grid, PieceKind::T).unwrap().position, Position::new(4, -1));
}

#[test]
fn test_spawn_probes_one_row_lower() {
    // T at row -1 only touches rows -1 and 0; probed at row 0 it reaches row 1.
    let mut grid = Grid::new();
    grid.set(5, 1, Cell::locked(PieceKind::O));
    assert!(spawn(&grid, PieceKind::T).is_none());

    let mut clear_below = Grid::new();
    clear_below.set(5, 2, Cell::locked(PieceKind::O));
    assert!(spawn(&clear_below, PieceKind::T).is_some());
}

#[test]
fn test_try_rotate_blocked_everywhere() {
    // Vertical I in a one-wide shaft cannot lie down.
    let mut grid = Grid::new();
    for y in 0..20 {
        for x in 0..10 {
            if x != 5 {
                grid.set(x, y, Cell::locked(PieceKind::Z));
            }
        }
    }
    let piece = Piece {
        kind: PieceKind::I,
        shape: rotate(&canonical_shape(PieceKind::I)),
        position: Position::new(3, 8),
    };
    assert!(!piece.collides_with(&grid));
    assert!(try_rotate(&piece, &grid).is_none());
}

#[test]
fn test_o_rotation_keeps_position() {
    let grid = Grid::new();
    let o = spawn(&grid, PieceKind::O).unwrap();
    let (rotated, dx) = try_rotate(&o, &grid).unwrap();
    assert_eq!(dx, 0);
    assert_eq!(rotated, o);
}
