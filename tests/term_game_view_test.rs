use blockfall::core::{Engine, GameState, Grid};
use blockfall::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use blockfall::types::{Cell, Command, PieceKind};

fn find_text(fb: &FrameBuffer, text: &str) -> Option<(u16, u16)> {
    let needle: Vec<char> = text.chars().collect();
    for y in 0..fb.height() {
        let row: Vec<char> = fb.row_text(y).chars().collect();
        if let Some(x) = row.windows(needle.len()).position(|w| w == needle.as_slice()) {
            return Some((x as u16, y));
        }
    }
    None
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::fresh(PieceKind::T, PieceKind::O);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&state, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut grid = Grid::new();
    grid.set(0, 19, Cell::locked(PieceKind::I));
    let mut state = GameState::fresh(PieceKind::T, PieceKind::O);
    state.grid = grid;
    state.active = None;

    let fb = GameView::default().render(&state, Viewport::new(22, 22));
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_next_preview_uses_canonical_shape() {
    let state = GameState::fresh(PieceKind::T, PieceKind::I);
    let fb = GameView::default().render(&state, Viewport::new(60, 24));

    let (next_x, next_y) = find_text(&fb, "NEXT").unwrap();
    // I preview: second matrix row, four cells, two columns each.
    let preview: String = (0..8)
        .map(|dx| fb.get(next_x + dx, next_y + 2).unwrap().ch)
        .collect();
    assert_eq!(preview, "████████");
}

#[test]
fn term_view_only_moved_cells_differ_between_frames() {
    let mut engine = Engine::new(11);
    engine.start();
    let view = GameView::default().with_ghost(false);
    let vp = Viewport::new(22, 22);

    let before = view.render(engine.state(), vp);
    engine.apply(Command::SoftDrop);
    let after = view.render(engine.state(), vp);

    let changed = before
        .cells()
        .iter()
        .zip(after.cells())
        .filter(|(a, b)| a != b)
        .count();
    assert!(changed > 0 && changed <= 16);

    let mut out = Vec::new();
    encode_diff_into(&before, &after, &mut out).unwrap();
    assert!(!out.is_empty());

    let mut reused = FrameBuffer::new(1, 1);
    view.render_into(engine.state(), None, vp, &mut reused);
    assert_eq!(reused, after);
}
