//! Pure view: paints a [`GameState`] into a [`FrameBuffer`].
//!
//! No terminal I/O happens here. The view reads the game state through its
//! accessors and never mutates it, so rendering can be driven (and tested)
//! with nothing but an in-memory buffer.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Position, BOARD_SIZE};

/// Terminal dimensions the view should lay itself out in.
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

mod styles {
    use super::{CellStyle, Rgb};

    const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
    const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

    pub const EMPTY: CellStyle = CellStyle {
        fg: Rgb::new(90, 90, 100),
        bg: BOARD_BG,
        bold: false,
        dim: true,
    };
    pub const BORDER: CellStyle = CellStyle {
        fg: Rgb::new(200, 200, 200),
        bg: SCREEN_BG,
        bold: false,
        dim: false,
    };
    pub const HEAD: CellStyle = CellStyle {
        fg: Rgb::new(120, 235, 120),
        bg: BOARD_BG,
        bold: true,
        dim: false,
    };
    pub const BODY: CellStyle = CellStyle {
        fg: Rgb::new(80, 190, 100),
        bg: BOARD_BG,
        bold: false,
        dim: false,
    };
    pub const FOOD: CellStyle = CellStyle {
        fg: Rgb::new(230, 90, 90),
        bg: BOARD_BG,
        bold: true,
        dim: false,
    };
    pub const LABEL: CellStyle = CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: SCREEN_BG,
        bold: true,
        dim: false,
    };
    pub const VALUE: CellStyle = CellStyle {
        fg: Rgb::new(200, 200, 200),
        bg: SCREEN_BG,
        bold: false,
        dim: false,
    };
    pub const HINT: CellStyle = CellStyle {
        fg: Rgb::new(140, 140, 150),
        bg: SCREEN_BG,
        bold: false,
        dim: true,
    };
    pub const OVERLAY: CellStyle = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: SCREEN_BG,
        bold: true,
        dim: false,
    };
    pub const STATE_WAITING: CellStyle = CellStyle {
        fg: Rgb::new(160, 160, 170),
        bg: SCREEN_BG,
        bold: false,
        dim: false,
    };
    pub const STATE_PLAYING: CellStyle = CellStyle {
        fg: Rgb::new(120, 235, 120),
        bg: SCREEN_BG,
        bold: false,
        dim: false,
    };
    pub const STATE_PAUSED: CellStyle = CellStyle {
        fg: Rgb::new(240, 220, 80),
        bg: SCREEN_BG,
        bold: false,
        dim: false,
    };
    pub const STATE_OVER: CellStyle = CellStyle {
        fg: Rgb::new(230, 90, 90),
        bg: SCREEN_BG,
        bold: false,
        dim: false,
    };
}

/// Renders the board, side panel, and status overlays.
///
/// Each board cell maps to a block of `cell_w` x `cell_h` terminal cells;
/// the 2x1 default compensates for the usual terminal glyph aspect ratio.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Paint `state` into `fb`, resizing it to `viewport` first.
    ///
    /// Reuses the buffer's allocation; after it has grown to the viewport
    /// size once, repeated calls do not allocate.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame_w = (BOARD_SIZE as u16) * self.cell_w + 2;
        let frame_h = (BOARD_SIZE as u16) * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        for y in 0..BOARD_SIZE as u16 {
            for x in 0..BOARD_SIZE as u16 {
                self.fill_cell(fb, start_x, start_y, x, y, '\u{b7}', styles::EMPTY);
            }
        }

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Food first so the head wins the cell if the two ever coincide
        // (the board-filled ending leaves the last food under the head).
        self.fill_board_cell(fb, start_x, start_y, state.food(), '\u{25cf}', styles::FOOD);
        for (i, &segment) in state.snake().iter().enumerate() {
            let style = if i == 0 { styles::HEAD } else { styles::BODY };
            self.fill_board_cell(fb, start_x, start_y, segment, '\u{2588}', style);
        }

        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);
        draw_overlay(fb, state, start_x, start_y, frame_w, frame_h);
    }

    /// Convenience wrapper that allocates a fresh buffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Position,
        ch: char,
        style: CellStyle,
    ) {
        if !cell.in_bounds() {
            return;
        }
        self.fill_cell(fb, start_x, start_y, cell.x as u16, cell.y as u16, ch, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", styles::LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.score(), styles::VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", styles::LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.speed_ms(), styles::VALUE);
        fb.put_str(panel_x + u32_width(state.speed_ms()) + 1, y, "MS", styles::HINT);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", styles::LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.snake().len() as u32, styles::VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", styles::LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, status_label(state.status()), status_style(state.status()));

        if panel_w >= 20 {
            y = y.saturating_add(2);
            for (key, action) in [
                ("ARROWS", "STEER"),
                ("SPACE", "START/PAUSE"),
                ("R", "RESET"),
                ("Q", "QUIT"),
            ] {
                fb.put_str(panel_x, y, key, styles::VALUE);
                fb.put_str(panel_x + 8, y, action, styles::HINT);
                y = y.saturating_add(1);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;
    fb.put_char(x, y, '\u{250c}', styles::BORDER);
    fb.put_char(right, y, '\u{2510}', styles::BORDER);
    fb.put_char(x, bottom, '\u{2514}', styles::BORDER);
    fb.put_char(right, bottom, '\u{2518}', styles::BORDER);
    for cx in x + 1..right {
        fb.put_char(cx, y, '\u{2500}', styles::BORDER);
        fb.put_char(cx, bottom, '\u{2500}', styles::BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '\u{2502}', styles::BORDER);
        fb.put_char(right, cy, '\u{2502}', styles::BORDER);
    }
}

fn draw_overlay(
    fb: &mut FrameBuffer,
    state: &GameState,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
) {
    let banner = match state.status() {
        GameStatus::Waiting => "PRESS SPACE TO START",
        GameStatus::Paused => "PAUSED",
        GameStatus::GameOver => "GAME OVER",
        GameStatus::Playing => return,
    };
    let mid_y = start_y.saturating_add(frame_h / 2);
    put_centered(fb, start_x, mid_y, frame_w, banner);

    if state.status() == GameStatus::GameOver {
        let text_w = "FINAL SCORE ".len() as u16 + u32_width(state.score());
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        let y = mid_y.saturating_add(1);
        fb.put_str(x, y, "FINAL SCORE ", styles::OVERLAY);
        fb.put_u32(x + "FINAL SCORE ".len() as u16, y, state.score(), styles::OVERLAY);
    }
}

fn put_centered(fb: &mut FrameBuffer, start_x: u16, y: u16, frame_w: u16, text: &str) {
    let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
    fb.put_str(x, y, text, styles::OVERLAY);
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Waiting => "WAITING",
        GameStatus::Playing => "PLAYING",
        GameStatus::Paused => "PAUSED",
        GameStatus::GameOver => "GAME OVER",
    }
}

fn status_style(status: GameStatus) -> CellStyle {
    match status {
        GameStatus::Waiting => styles::STATE_WAITING,
        GameStatus::Playing => styles::STATE_PLAYING,
        GameStatus::Paused => styles::STATE_PAUSED,
        GameStatus::GameOver => styles::STATE_OVER,
    }
}

fn u32_width(mut value: u32) -> u16 {
    let mut w = 1;
    while value >= 10 {
        value /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_width() {
        assert_eq!(u32_width(0), 1);
        assert_eq!(u32_width(9), 1);
        assert_eq!(u32_width(10), 2);
        assert_eq!(u32_width(150), 3);
        assert_eq!(u32_width(u32::MAX), 10);
    }

    #[test]
    fn test_status_labels_cover_all_states() {
        assert_eq!(status_label(GameStatus::Waiting), "WAITING");
        assert_eq!(status_label(GameStatus::Playing), "PLAYING");
        assert_eq!(status_label(GameStatus::Paused), "PAUSED");
        assert_eq!(status_label(GameStatus::GameOver), "GAME OVER");
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        // Everything must clip instead of panicking when the terminal is
        // smaller than the board.
        let view = GameView::default();
        let state = GameState::default();
        let fb = view.render(&state, Viewport::new(10, 4));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 4);
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let view = GameView::default();
        let state = GameState::default();
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&state, Viewport::new(80, 24), &mut fb);
        assert_eq!(fb.width(), 80);
        view.render_into(&state, Viewport::new(80, 24), &mut fb);
        assert_eq!(fb.height(), 24);
    }
}
