//! In-memory frame buffer.
//!
//! A [`FrameBuffer`] is a 2D grid of styled characters that the
//! [`GameView`](crate::game_view::GameView) paints into and the
//! [`TerminalRenderer`](crate::renderer::TerminalRenderer) diffs and flushes.
//! Keeping this layer pure (no I/O) lets the view be unit-tested by
//! inspecting cells.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual style of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// A width x height grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, reusing the existing allocation when possible.
    ///
    /// Cell contents after a resize are unspecified; callers are expected to
    /// repaint the whole frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        let len = width as usize * height as usize;
        self.cells.resize(len, Cell::default());
        self.width = width;
        self.height = height;
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// One row of cells as a slice. `y` must be in range.
    pub fn row(&self, y: u16) -> &[Cell] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Fill every cell with `cell`.
    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `text` left to right starting at (x, y), clipping at the right
    /// edge. Does not wrap.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx = cx.saturating_add(1);
        }
    }

    /// Write `value` in decimal starting at (x, y) without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        // u32::MAX has 10 digits.
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for i in (0..len).rev() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, digits[i] as char, style);
            cx = cx.saturating_add(1);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(fb.get(2, 0).map(|c| c.ch), Some('a'));
        assert_eq!(fb.get(3, 0).map(|c| c.ch), Some('b'));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_put_u32_writes_decimal_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        fb.put_u32(0, 0, 0, CellStyle::default());
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('0'));

        fb.put_u32(2, 0, 1250, CellStyle::default());
        let text: String = (2..6).filter_map(|x| fb.get(x, 0)).map(|c| c.ch).collect();
        assert_eq!(text, "1250");
    }

    #[test]
    fn test_put_u32_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_u32(1, 0, 987, CellStyle::default());
        assert_eq!(fb.get(1, 0).map(|c| c.ch), Some('9'));
        assert_eq!(fb.get(2, 0).map(|c| c.ch), Some('8'));
    }

    #[test]
    fn test_row_returns_full_width_slice() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(1, 1, 'x', CellStyle::default());
        assert_eq!(fb.row(0).len(), 3);
        assert_eq!(fb.row(1)[1].ch, 'x');
    }

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'x', CellStyle::default());
        fb.fill_rect(1, 1, 4, 4, 'y', CellStyle::default());
        assert_eq!(fb.get(5, 5), None);
        assert_eq!(fb.get(1, 1).map(|c| c.ch), Some('y'));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_resize_changes_dimensions() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!(fb.width(), 5);
        assert_eq!(fb.height(), 3);
        assert_eq!(fb.row(2).len(), 5);
    }
}
