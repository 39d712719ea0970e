//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first present (and any present after `invalidate`) repaints the whole
//! grid; later presents only emit the runs of cells that changed, which keeps
//! incremental panel updates and character-paced reveals flicker free.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    pending_title: Option<String>,
    active: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            pending_title: None,
            active: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.active = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Set the window title on the next present.
    pub fn set_title(&mut self, title: &str) {
        self.pending_title = Some(title.to_string());
    }

    /// Present a framebuffer, emitting only what changed since the last present.
    ///
    /// The previous frame is kept by copying into an owned buffer
    /// (`clone_from` reuses its allocation), so the caller keeps drawing
    /// incrementally into the same framebuffer.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        if let Some(title) = self.pending_title.take() {
            self.buf.queue(terminal::SetTitle(title))?;
        }

        match self.last.as_mut() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }

        // Park the cursor at the home position like every other draw call.
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    let mut any = false;

    for_each_changed_run(prev, next, |x, y, len| {
        any = true;
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if any {
        out.queue(ResetColor)?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            let len = x - start;
            f(start, y, len)?;
        }
    }

    Ok(())
}
