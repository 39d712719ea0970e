//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(242, 242, 242);
    pub const DARK_BLUE: Rgb = Rgb::new(0, 55, 218);
    pub const YELLOW: Rgb = Rgb::new(249, 241, 165);
    pub const DARK_YELLOW: Rgb = Rgb::new(193, 156, 0);
    pub const DARK_GREEN: Rgb = Rgb::new(19, 161, 14);
    pub const DARK_RED: Rgb = Rgb::new(197, 15, 31);
    pub const GRAY: Rgb = Rgb::new(204, 204, 204);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground/background pair of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }

    /// Swap foreground and background.
    pub const fn inverted(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::YELLOW,
            bg: Rgb::DARK_BLUE,
        }
    }
}

/// A single terminal cell.
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

/// 2D framebuffer of styled character cells.
///
/// Writes outside the buffer are dropped; callers that need a bounds error
/// validate their geometry before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Characters of row `y` as a string (empty when out of range).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// `len` characters of row `y` starting at column `x`.
    pub fn text_at(&self, x: u16, y: u16, len: u16) -> String {
        (x..x.saturating_add(len))
            .filter_map(|cx| self.get(cx, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abcdef", CellStyle::default());
        assert_eq!(fb.row_text(0), "  ab");
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'x', CellStyle::default());
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
        assert_eq!(fb.get(5, 5), None);
    }

    #[test]
    fn inverted_swaps_colors() {
        let s = CellStyle::new(Rgb::YELLOW, Rgb::DARK_BLUE).inverted();
        assert_eq!(s.fg, Rgb::DARK_BLUE);
        assert_eq!(s.bg, Rgb::YELLOW);
    }

    #[test]
    fn text_at_reads_a_window() {
        let mut fb = FrameBuffer::new(6, 2);
        fb.put_str(0, 1, "hello!", CellStyle::default());
        assert_eq!(fb.text_at(1, 1, 3), "ell");
        assert_eq!(fb.row_text(9), "");
    }
}
