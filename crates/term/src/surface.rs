//! The drawing sink every panel and border primitive writes to.
//!
//! A `Surface` is a fixed-size grid of styled cells. The in-memory
//! [`FrameBuffer`] is a surface whose `flush` does nothing, which is what tests
//! draw into. [`TerminalSurface`] keeps a framebuffer and pushes the cells that
//! changed since the last flush to the real terminal.

use anyhow::Result;

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::renderer::TerminalRenderer;

pub trait Surface {
    /// Grid size in cells (width, height).
    fn size(&self) -> (u16, u16);

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle);

    fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let (w, _) = self.size();
        let mut cx = x;
        for ch in s.chars() {
            if cx >= w {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Fill the whole grid with blanks in `style`.
    fn clear(&mut self, style: CellStyle);

    fn set_title(&mut self, _title: &str) {}

    /// Make everything written so far visible.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width(), self.height())
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        FrameBuffer::put_char(self, x, y, ch, style);
    }

    fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        FrameBuffer::put_str(self, x, y, s, style);
    }

    fn clear(&mut self, style: CellStyle) {
        FrameBuffer::clear(self, style.into_cell(' '));
    }
}

/// A framebuffer presented to the terminal on every flush.
pub struct TerminalSurface {
    fb: FrameBuffer,
    renderer: TerminalRenderer,
}

impl TerminalSurface {
    /// Enter the alternate screen and allocate a `width x height` grid.
    pub fn enter(width: u16, height: u16) -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            fb: FrameBuffer::new(width, height),
            renderer,
        })
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Force the next flush to repaint every cell.
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        (self.fb.width(), self.fb.height())
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.fb.put_char(x, y, ch, style);
    }

    fn clear(&mut self, style: CellStyle) {
        self.fb.clear(Cell { ch: ' ', style });
    }

    fn set_title(&mut self, title: &str) {
        self.renderer.set_title(title);
    }

    fn flush(&mut self) -> Result<()> {
        self.renderer.present(&self.fb)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = self.renderer.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Rgb;

    fn draw_through_trait(s: &mut dyn Surface) {
        s.clear(CellStyle::new(Rgb::WHITE, Rgb::BLACK));
        s.put_str(1, 0, "abc", CellStyle::default());
        s.flush().unwrap();
    }

    #[test]
    fn framebuffer_is_a_surface() {
        let mut fb = FrameBuffer::new(5, 1);
        draw_through_trait(&mut fb);
        assert_eq!(fb.row_text(0), " abc ");
        assert_eq!(fb.get(0, 0).unwrap().style.bg, Rgb::BLACK);
        assert_eq!(fb.get(1, 0).unwrap().style, CellStyle::default());
    }
}
