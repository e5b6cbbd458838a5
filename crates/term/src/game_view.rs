//! GameView: maps a `GameState` snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{canonical_shape, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the falling-block game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            show_ghost: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            show_ghost: true,
        }
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `commentary` is shown under the final score once the game is over.
    pub fn render_into(
        &self,
        state: &GameState,
        commentary: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(SCREEN_BG, SCREEN_BG).cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_px_w + 2) / 2,
            y: viewport.height.saturating_sub(board_px_h + 2) / 2,
            w: board_px_w + 2,
            h: board_px_h + 2,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(fb, frame, border);

        for (y, row) in state.grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell.kind {
                    Some(kind) => self.draw_board_cell(fb, frame, x as i8, y as i8, kind),
                    None => self.draw_empty_cell(fb, frame, x as i8, y as i8),
                }
            }
        }

        if let Some(active) = state.active {
            if self.show_ghost && !state.game_over {
                if let Some(landing_y) = state.landing_y() {
                    let ghost = CellStyle::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
                    let drop = landing_y - active.position.y;
                    for (x, y) in active.board_cells() {
                        self.fill_board_cell(fb, frame, x, y + drop, '░', ghost);
                    }
                }
            }
            for (x, y) in active.board_cells() {
                self.draw_board_cell(fb, frame, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, state, viewport, frame);

        if state.game_over {
            self.draw_game_over(fb, state, commentary, viewport, frame);
        } else if state.paused {
            let mid_y = frame.y + frame.h / 2;
            draw_centered(fb, frame.x, frame.w, mid_y, "PAUSED", overlay_style());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        self.render_with_commentary(state, None, viewport)
    }

    pub fn render_with_commentary(
        &self,
        state: &GameState,
        commentary: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, commentary, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_board_cell(fb, frame, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), BOARD_BG).bold();
        self.fill_board_cell(fb, frame, x, y, '█', style);
    }

    /// Paint one board cell; cells outside the visible board are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + (x as u16) * self.cell_w;
        let py = frame.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        let stats = [
            ("SCORE", state.score),
            ("LEVEL", state.level),
            ("LINES", state.lines),
        ];
        for (name, number) in stats {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let preview = canonical_shape(state.next);
        let style = CellStyle::new(piece_color(state.next), SCREEN_BG).bold();
        for (dx, dy) in preview.cells() {
            let px = panel_x.saturating_add(dx as u16 * self.cell_w);
            let py = y.saturating_add(dy as u16 * self.cell_h);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        commentary: Option<&str>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let mid_y = frame.y + frame.h / 2;
        let style = overlay_style();
        let title_y = mid_y.saturating_sub(1);
        draw_centered(fb, frame.x, frame.w, title_y, "GAME OVER", style);

        let score = format!("SCORE {}", state.score);
        draw_centered(fb, frame.x, frame.w, mid_y, &score, style);

        if let Some(line) = commentary {
            let line_style = CellStyle::new(Rgb::new(240, 220, 120), SCREEN_BG);
            let line_y = mid_y.saturating_add(2);
            draw_centered(fb, 0, viewport.width, line_y, line, line_style);
        }
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold()
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Draw text centered in the span `[x, x + w)`.
fn draw_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let cx = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(cx, y, text, style);
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::types::Cell;

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_border_and_panel() {
        let state = GameState::fresh(PieceKind::T, PieceKind::I);
        let fb = GameView::default().render(&state, Viewport::new(60, 24));

        // 10 cells * 2 columns + border, centered horizontally.
        let frame_x = (60 - 22) / 2;
        assert_eq!(fb.get(frame_x, 1).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(frame_x + 21, 22).map(|c| c.ch), Some('┘'));

        let text = screen_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("LEVEL"));
        assert!(text.contains("LINES"));
        assert!(text.contains("NEXT"));
    }

    #[test]
    fn active_piece_above_board_is_clipped() {
        // O spawns at y = -1: only its lower row is visible, on board row 0.
        let state = GameState::fresh(PieceKind::O, PieceKind::O);
        let view = GameView::default().with_ghost(false);
        let fb = view.render(&state, Viewport::new(22, 22));

        let row0 = fb.row_text(1);
        assert_eq!(row0.chars().filter(|&c| c == '█').count(), 4);
        let row1 = fb.row_text(2);
        assert_eq!(row1.chars().filter(|&c| c == '█').count(), 0);
    }

    #[test]
    fn locked_cells_are_drawn() {
        let mut grid = Grid::new();
        grid.set(0, 19, Cell::locked(PieceKind::Z));
        let state = GameState::on_grid(grid, PieceKind::O, PieceKind::O);
        let fb = GameView::default().render(&state, Viewport::new(22, 22));

        let cell = fb.get(1, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::Z));
    }

    #[test]
    fn ghost_marks_landing_row() {
        let state = GameState::fresh(PieceKind::O, PieceKind::O);
        let fb = GameView::default().render(&state, Viewport::new(22, 22));
        assert!(fb.row_text(20).contains('░'));
    }

    #[test]
    fn paused_overlay() {
        let mut state = GameState::fresh(PieceKind::T, PieceKind::I);
        state.paused = true;
        let fb = GameView::default().render(&state, Viewport::new(40, 24));
        assert!(screen_text(&fb).contains("PAUSED"));
    }

    #[test]
    fn game_over_overlay_shows_score_and_commentary() {
        let mut state = GameState::fresh(PieceKind::T, PieceKind::I);
        state.game_over = true;
        state.score = 1200;
        let fb = GameView::default().render_with_commentary(
            &state,
            Some("Not bad at all"),
            Viewport::new(60, 24),
        );

        let text = screen_text(&fb);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("SCORE 1200"));
        assert!(text.contains("Not bad at all"));
        assert!(!text.contains("PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = GameState::fresh(PieceKind::I, PieceKind::I);
        let fb = GameView::default().render(&state, Viewport::new(5, 3));
        assert_eq!(fb.cells().len(), 15);
    }
}
