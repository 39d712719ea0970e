//! A rectangular text panel with wrapping, scrolling, selection and an
//! optional scrollbar.
//!
//! A panel owns its text and the wrapped lines derived from it. It does not
//! own the screen: every operation that changes what is visible takes a
//! [`RenderCx`] and repaints the panel's region through it.
//!
//! # Invariants
//!
//! - `scroll_offset <= max(0, lines - height)`
//! - a scrollbar exists only when the text does not fit and `height >= 3`;
//!   lines are then wrapped one column narrower so the last column is free
//! - `selected_line` is a row of the viewport, never past the last line

use std::ops::RangeInclusive;
use std::time::Duration;

use tui_panels_term::{CellStyle, Rgb, Surface};
use tui_panels_types::{Interactivity, Rect, DEFAULT_REVEAL_DELAY_MS};

use crate::focus::{FocusRegistry, Highlight};
use crate::layout;
use crate::pacing::RevealPacer;

const SCROLL_UP_GLYPH: char = '▲';
const SCROLL_DOWN_GLYPH: char = '▼';
const THUMB_GLYPH: char = '█';
const TRACK_GLYPH: char = '░';

/// Stable handle of a panel owned by a [`crate::Gui`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(usize);

impl PanelId {
    /// The log line every `Gui` creates first.
    pub const LOG: PanelId = PanelId(0);

    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Resolved colors of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelColors {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Background of the selected line while another panel holds focus
    pub inactive: Rgb,
}

impl PanelColors {
    pub fn normal(&self) -> CellStyle {
        CellStyle::new(self.foreground, self.background)
    }
}

/// Everything a panel needs to paint itself.
pub struct RenderCx<'a> {
    pub surface: &'a mut dyn Surface,
    pub pacer: &'a mut dyn RevealPacer,
    pub focus: FocusRegistry,
}

impl RenderCx<'_> {
    fn present(&mut self) {
        if let Err(e) = self.surface.flush() {
            tracing::warn!(error = %e, "failed to present frame");
        }
    }
}

/// How a render call positions the viewport and whether it animates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Reset the scroll offset before painting
    pub auto_scroll: bool,
    /// With `auto_scroll`: jump to the last page instead of the first
    pub scroll_to_bottom: bool,
    /// Reveal lines character by character
    pub animated: bool,
    /// Pause after each revealed character
    pub delay: Duration,
    /// Lines to reveal when animated; `None` reveals every visible line
    pub range: Option<RangeInclusive<usize>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            auto_scroll: false,
            scroll_to_bottom: true,
            animated: false,
            delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            range: None,
        }
    }
}

impl RenderOptions {
    /// Repaint at the current offset.
    pub fn repaint() -> Self {
        Self::default()
    }

    pub fn scroll_to_top() -> Self {
        Self {
            auto_scroll: true,
            scroll_to_bottom: false,
            ..Self::default()
        }
    }

    fn reveals(&self, line: usize) -> bool {
        self.animated && self.range.as_ref().map_or(true, |r| r.contains(&line))
    }
}

/// Options of [`Panel::append_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOptions {
    /// Blank lines between the existing text and the new text
    pub leading_blank_lines: usize,
    /// Insert before the existing text instead of after it
    pub prepend: bool,
    pub auto_scroll: bool,
    pub animated: bool,
    pub delay: Duration,
}

impl Default for AppendOptions {
    fn default() -> Self {
        Self {
            leading_blank_lines: 0,
            prepend: false,
            auto_scroll: true,
            animated: false,
            delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    id: PanelId,
    left: u16,
    /// Screen row of the first line (log row already accounted for)
    top: u16,
    width: u16,
    height: u16,
    interactivity: Interactivity,
    colors: PanelColors,
    full_text: String,
    formatted: Vec<String>,
    scroll_offset: usize,
    selected_line: Option<usize>,
    has_scrollbar: bool,
}

impl Panel {
    /// A blank panel covering `screen` (screen coordinates). Nothing is drawn
    /// until the first [`Panel::set_text`].
    pub fn new(
        id: PanelId,
        screen: Rect,
        interactivity: Interactivity,
        colors: PanelColors,
    ) -> Self {
        Self {
            id,
            left: screen.left,
            top: screen.top,
            width: screen.width,
            height: screen.height,
            interactivity,
            colors,
            full_text: String::new(),
            formatted: layout::wrap("", screen.width as usize),
            scroll_offset: 0,
            selected_line: interactivity.has_selection().then_some(0),
            has_scrollbar: false,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Region in screen coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    pub fn interactivity(&self) -> Interactivity {
        self.interactivity
    }

    pub fn colors(&self) -> PanelColors {
        self.colors
    }

    /// Change the colors and repaint.
    pub fn set_colors(&mut self, colors: PanelColors, cx: &mut RenderCx<'_>) {
        self.colors = colors;
        self.render(cx, RenderOptions::repaint());
    }

    pub fn text(&self) -> &str {
        &self.full_text
    }

    pub fn formatted_lines(&self) -> &[String] {
        &self.formatted
    }

    /// Wrapped line `index` without its padding.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.formatted.get(index).map(|l| l.trim_end())
    }

    pub fn line_count(&self) -> usize {
        self.formatted.len()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn selected_line(&self) -> Option<usize> {
        self.selected_line
    }

    pub fn has_scrollbar(&self) -> bool {
        self.has_scrollbar
    }

    /// The selected line without its padding.
    pub fn selected_text(&self) -> Option<&str> {
        let row = self.selected_line?;
        self.formatted
            .get(self.scroll_offset + row)
            .map(|l| l.trim_end())
    }

    fn text_width(&self) -> usize {
        self.width as usize - usize::from(self.has_scrollbar)
    }

    fn max_offset(&self) -> usize {
        self.formatted.len().saturating_sub(self.height as usize)
    }

    fn needs_scrollbar(&self, lines: usize) -> bool {
        lines > self.height as usize && self.height >= 3
    }

    /// Replace the text, rewrap and repaint.
    pub fn set_text(&mut self, text: impl Into<String>, cx: &mut RenderCx<'_>) {
        self.full_text = text.into();
        let width = self.width as usize;

        let mut lines = layout::wrap(&self.full_text, width);
        self.has_scrollbar = self.needs_scrollbar(lines.len());
        if self.has_scrollbar {
            lines = layout::wrap(&self.full_text, width - 1);
        }

        if lines.len() < self.formatted.len() {
            if let Some(row) = self.selected_line {
                self.selected_line = Some(row.min(lines.len().saturating_sub(1)));
            }
            // Wipe the rows the shorter text no longer covers.
            let blank = " ".repeat(width);
            for line in &mut self.formatted {
                line.clone_from(&blank);
            }
            self.render(cx, RenderOptions::scroll_to_top());
        }

        self.formatted = lines;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
        tracing::debug!(
            panel = self.id.0,
            lines = self.formatted.len(),
            scrollbar = self.has_scrollbar,
            "text set"
        );
        self.render(cx, RenderOptions::repaint());
    }

    /// Add text after (or before) the existing text and repaint, optionally
    /// revealing the new lines one character at a time.
    pub fn append_text(&mut self, text: &str, opts: AppendOptions, cx: &mut RenderCx<'_>) {
        let breaks = "\n".repeat(opts.leading_blank_lines);
        let addition = if opts.prepend {
            format!("{text}{breaks}")
        } else {
            format!("{breaks}{text}")
        };

        // An empty panel only holds a placeholder line, which the addition replaces.
        let existing = if self.full_text.is_empty() {
            0
        } else {
            self.formatted.len()
        };
        let mut new_lines = layout::wrap_with(&addition, self.text_width(), false);
        if !self.has_scrollbar && self.needs_scrollbar(new_lines.len() + existing) {
            let narrow = self.width as usize - 1;
            new_lines = layout::wrap_with(&addition, narrow, false);
            self.formatted = layout::wrap_with(&self.full_text, narrow, false);
            self.has_scrollbar = true;
        }

        let added = new_lines.len();
        tracing::debug!(panel = self.id.0, added, prepend = opts.prepend, "text appended");
        let range = if self.full_text.is_empty() {
            self.full_text = addition;
            self.formatted = new_lines;
            0..=added - 1
        } else if opts.prepend {
            self.full_text = format!("{addition}\n{}", self.full_text);
            new_lines.append(&mut self.formatted);
            self.formatted = new_lines;
            0..=added - 1
        } else {
            let start = self.formatted.len();
            self.full_text.push('\n');
            self.full_text.push_str(&addition);
            self.formatted.append(&mut new_lines);
            start..=start + added - 1
        };

        self.render(
            cx,
            RenderOptions {
                auto_scroll: opts.auto_scroll,
                scroll_to_bottom: !opts.prepend,
                animated: opts.animated,
                delay: opts.delay,
                range: Some(range),
            },
        );
    }

    /// Move the selection up one row, scrolling when it is already on top.
    pub fn previous_line(&mut self, cx: &mut RenderCx<'_>) {
        match self.selected_line {
            Some(row) if row > 0 => self.selected_line = Some(row - 1),
            _ => {
                self.scroll_by(-1);
            }
        }
        self.render(cx, RenderOptions::repaint());
    }

    /// Move the selection down one row, scrolling when it is already at the
    /// bottom of the viewport. Does nothing on the last line.
    pub fn next_line(&mut self, cx: &mut RenderCx<'_>) {
        let last = self.formatted.len().saturating_sub(1);
        match self.selected_line {
            Some(row) => {
                if self.scroll_offset + row >= last {
                    return;
                }
                if row + 1 < self.height as usize {
                    self.selected_line = Some(row + 1);
                } else {
                    self.scroll_by(1);
                }
            }
            None => {
                self.scroll_by(1);
            }
        }
        self.render(cx, RenderOptions::repaint());
    }

    pub fn scroll_up(&mut self, cx: &mut RenderCx<'_>) {
        if self.scroll_by(-1) {
            self.render(cx, RenderOptions::repaint());
        }
    }

    pub fn scroll_down(&mut self, cx: &mut RenderCx<'_>) {
        if self.scroll_by(1) {
            self.render(cx, RenderOptions::repaint());
        }
    }

    /// Shift the viewport by one line, clamped. Returns whether the text
    /// overflows the panel at all.
    fn scroll_by(&mut self, delta: isize) -> bool {
        if self.formatted.len() <= self.height as usize {
            return false;
        }
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(delta)
            .min(self.max_offset());
        tracing::debug!(panel = self.id.0, offset = self.scroll_offset, "scrolled");
        true
    }

    /// Paint the panel: visible lines, selection highlight and scrollbar.
    pub fn render(&mut self, cx: &mut RenderCx<'_>, opts: RenderOptions) {
        let len = self.formatted.len();
        let height = self.height as usize;

        if opts.auto_scroll {
            self.scroll_offset = if opts.scroll_to_bottom {
                self.max_offset()
            } else {
                0
            };
        }

        let normal = self.colors.normal();
        let bar_x = self.left + self.width - 1;
        let thumb = if self.has_scrollbar {
            let row = scrollbar_thumb(self.scroll_offset, len, height);
            cx.surface.put_char(bar_x, self.top + row as u16, THUMB_GLYPH, normal);
            Some(row)
        } else {
            None
        };

        let blank = " ".repeat(self.text_width());
        let visible = height.min(len.saturating_sub(self.scroll_offset));
        for row in 0..visible {
            let line = self.scroll_offset + row;
            let y = self.top + row as u16;
            let style = self.row_style(row, cx.focus);

            if opts.reveals(line) {
                cx.surface.put_str(self.left, y, &blank, style);
            } else {
                cx.surface.put_str(self.left, y, &self.formatted[line], style);
            }

            if self.has_scrollbar {
                let glyph = if row == 0 && self.scroll_offset > 0 {
                    Some(SCROLL_UP_GLYPH)
                } else if row == height - 1 && self.scroll_offset + height < len {
                    Some(SCROLL_DOWN_GLYPH)
                } else if thumb != Some(row) {
                    Some(TRACK_GLYPH)
                } else {
                    None
                };
                if let Some(glyph) = glyph {
                    cx.surface.put_char(bar_x, y, glyph, normal);
                }
            }
        }

        if opts.animated {
            self.reveal(cx, &opts, visible);
        }

        cx.present();
    }

    fn reveal(&self, cx: &mut RenderCx<'_>, opts: &RenderOptions, visible: usize) {
        for row in 0..visible {
            let line = self.scroll_offset + row;
            if !opts.reveals(line) {
                if opts.range.as_ref().is_some_and(|r| line > *r.end()) {
                    break;
                }
                continue;
            }

            let y = self.top + row as u16;
            let style = self.row_style(row, cx.focus);
            for (x, ch) in (self.left..).zip(self.formatted[line].trim_end().chars()) {
                cx.surface.put_char(x, y, ch, style);
                cx.present();
                cx.pacer.pause(opts.delay);
            }
        }
    }

    fn row_style(&self, row: usize, focus: FocusRegistry) -> CellStyle {
        if self.selected_line != Some(row) {
            return self.colors.normal();
        }
        match focus.highlight_for(self.id) {
            Highlight::None => self.colors.normal(),
            Highlight::Active => self.colors.normal().inverted(),
            Highlight::Inactive => CellStyle::new(self.colors.foreground, self.colors.inactive),
        }
    }
}

/// Viewport row of the scrollbar thumb.
///
/// Pinned to the second row at the top and the second-to-last row at the
/// bottom, proportional in between.
pub fn scrollbar_thumb(offset: usize, total: usize, height: usize) -> usize {
    if offset == 0 {
        1
    } else if offset + height >= total {
        height - 2
    } else {
        1 + (height - 2) * (offset + height / 2) / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::InstantPacer;
    use tui_panels_term::FrameBuffer;

    const COLORS: PanelColors = PanelColors {
        background: Rgb::DARK_BLUE,
        foreground: Rgb::YELLOW,
        inactive: Rgb::DARK_YELLOW,
    };

    struct Harness {
        fb: FrameBuffer,
        pacer: InstantPacer,
        focus: FocusRegistry,
    }

    impl Harness {
        fn new(w: u16, h: u16) -> Self {
            Self {
                fb: FrameBuffer::new(w, h),
                pacer: InstantPacer::default(),
                focus: FocusRegistry::new(),
            }
        }

        fn cx(&mut self) -> RenderCx<'_> {
            RenderCx {
                surface: &mut self.fb,
                pacer: &mut self.pacer,
                focus: self.focus,
            }
        }
    }

    fn panel(w: u16, h: u16, interactivity: Interactivity) -> Panel {
        Panel::new(
            PanelId::from_index(1),
            Rect::new(0, 0, w, h),
            interactivity,
            COLORS,
        )
    }

    #[test]
    fn four_lines_in_three_rows_get_a_scrollbar() {
        let mut h = Harness::new(10, 3);
        let mut p = panel(10, 3, Interactivity::ScrollAndSelect);
        p.set_text("Hello\nWorld\nFoo\nBar", &mut h.cx());

        assert!(p.has_scrollbar());
        assert_eq!(p.line_count(), 4);
        assert!(p.formatted_lines().iter().all(|l| l.chars().count() == 9));
        assert_eq!(p.selected_line(), Some(0));
        assert_eq!(h.fb.row_text(0), "Hello    ░");
        assert_eq!(h.fb.get(9, 1).unwrap().ch, '█');
        assert_eq!(h.fb.get(9, 2).unwrap().ch, '▼');

        for _ in 0..3 {
            p.next_line(&mut h.cx());
        }
        assert_eq!(p.selected_line(), Some(2));
        assert_eq!(p.scroll_offset(), 1);
        assert_eq!(p.selected_text(), Some("Bar"));
        assert_eq!(h.fb.row_text(0), "World    ▲");
        assert_eq!(h.fb.get(9, 2).unwrap().ch, '░');

        // Already on the last line.
        p.next_line(&mut h.cx());
        assert_eq!(p.selected_line(), Some(2));
        assert_eq!(p.scroll_offset(), 1);
    }

    #[test]
    fn previous_line_scrolls_when_selection_is_on_top() {
        let mut h = Harness::new(10, 3);
        let mut p = panel(10, 3, Interactivity::ScrollAndSelect);
        p.set_text("a\nb\nc\nd\ne", &mut h.cx());
        p.scroll_down(&mut h.cx());
        p.scroll_down(&mut h.cx());
        assert_eq!(p.scroll_offset(), 2);

        p.previous_line(&mut h.cx());
        assert_eq!(p.selected_line(), Some(0));
        assert_eq!(p.scroll_offset(), 1);
        assert_eq!(p.selected_text(), Some("b"));
    }

    #[test]
    fn scrolling_is_clamped_and_ignored_when_text_fits() {
        let mut h = Harness::new(8, 3);
        let mut p = panel(8, 3, Interactivity::ScrollOnly);
        p.set_text("one\ntwo", &mut h.cx());
        p.scroll_down(&mut h.cx());
        assert_eq!(p.scroll_offset(), 0);

        p.set_text("1\n2\n3\n4", &mut h.cx());
        for _ in 0..5 {
            p.scroll_down(&mut h.cx());
        }
        assert_eq!(p.scroll_offset(), 1);
        for _ in 0..5 {
            p.scroll_up(&mut h.cx());
        }
        assert_eq!(p.scroll_offset(), 0);
        assert_eq!(p.selected_line(), None);
    }

    #[test]
    fn short_panels_never_show_a_scrollbar() {
        let mut h = Harness::new(6, 2);
        let mut p = panel(6, 2, Interactivity::ScrollOnly);
        p.set_text("a\nb\nc\nd", &mut h.cx());
        assert!(!p.has_scrollbar());
        assert_eq!(h.fb.row_text(0), "a     ");
        p.next_line(&mut h.cx());
        assert_eq!(p.scroll_offset(), 1);
    }

    #[test]
    fn shorter_text_blanks_the_old_rows_and_clamps_selection() {
        let mut h = Harness::new(6, 4);
        let mut p = panel(6, 4, Interactivity::ScrollAndSelect);
        p.set_text("a\nb\nc", &mut h.cx());
        p.next_line(&mut h.cx());
        p.next_line(&mut h.cx());
        assert_eq!(p.selected_line(), Some(2));

        p.set_text("x", &mut h.cx());
        assert_eq!(p.selected_line(), Some(0));
        assert_eq!(h.fb.row_text(0), "x     ");
        assert_eq!(h.fb.row_text(1), "      ");
        assert_eq!(h.fb.row_text(2), "      ");
    }

    #[test]
    fn selected_row_is_inverted_when_focused_and_dimmed_otherwise() {
        let mut h = Harness::new(6, 2);
        let mut p = panel(6, 2, Interactivity::ScrollAndSelect);

        p.set_text("a\nb", &mut h.cx());
        assert_eq!(h.fb.get(0, 0).unwrap().style, COLORS.normal());

        h.focus.set(p.id());
        p.render(&mut h.cx(), RenderOptions::repaint());
        assert_eq!(h.fb.get(0, 0).unwrap().style, COLORS.normal().inverted());
        assert_eq!(h.fb.get(0, 1).unwrap().style, COLORS.normal());

        h.focus.set(PanelId::from_index(7));
        p.render(&mut h.cx(), RenderOptions::repaint());
        assert_eq!(
            h.fb.get(0, 0).unwrap().style,
            CellStyle::new(Rgb::YELLOW, Rgb::DARK_YELLOW)
        );
    }

    #[test]
    fn append_scrolls_to_the_bottom() {
        let mut h = Harness::new(10, 3);
        let mut p = panel(10, 3, Interactivity::ScrollOnly);
        p.set_text("one", &mut h.cx());
        p.append_text("two\nthree\nfour", AppendOptions::default(), &mut h.cx());

        assert_eq!(p.text(), "one\ntwo\nthree\nfour");
        assert!(p.has_scrollbar());
        assert_eq!(p.scroll_offset(), 1);
        assert_eq!(h.fb.row_text(2), "four     ░");
    }

    #[test]
    fn prepend_with_blank_lines_reveals_each_character() {
        let mut h = Harness::new(12, 6);
        let mut p = panel(12, 6, Interactivity::ScrollAndSelect);
        p.set_text("old", &mut h.cx());

        let opts = AppendOptions {
            leading_blank_lines: 2,
            prepend: true,
            auto_scroll: false,
            animated: true,
            delay: Duration::from_millis(10),
        };
        p.append_text("new", opts, &mut h.cx());

        assert_eq!(p.text(), "new\n\n\nold");
        let lines: Vec<&str> = p.formatted_lines().iter().map(|l| l.trim_end()).collect();
        assert_eq!(lines, vec!["new", "", "", "old"]);
        assert_eq!(h.fb.row_text(0).trim_end(), "new");
        assert_eq!(h.fb.row_text(3).trim_end(), "old");
        assert_eq!(h.pacer.skipped, 3);
    }

    #[test]
    fn append_to_empty_panel_replaces_the_placeholder_line() {
        let mut h = Harness::new(8, 3);
        let mut p = panel(8, 3, Interactivity::None);
        p.append_text("hi", AppendOptions::default(), &mut h.cx());
        assert_eq!(p.text(), "hi");
        assert_eq!(p.line_count(), 1);
    }

    #[test]
    fn append_wraps_existing_text_narrower_once_a_scrollbar_appears() {
        let mut h = Harness::new(5, 3);
        let mut p = panel(5, 3, Interactivity::ScrollOnly);
        p.set_text("abcde", &mut h.cx());
        assert_eq!(p.formatted_lines(), &["abcde".to_string()]);

        p.append_text("f\ng\nh", AppendOptions::default(), &mut h.cx());
        assert!(p.has_scrollbar());
        let lines: Vec<&str> = p.formatted_lines().iter().map(|l| l.as_str()).collect();
        assert_eq!(lines, vec!["abcd", "e   ", "f   ", "g   ", "h   "]);
    }

    #[test]
    fn append_that_exactly_fits_an_empty_panel_has_no_scrollbar() {
        let mut h = Harness::new(10, 3);
        let mut p = panel(10, 3, Interactivity::ScrollOnly);
        p.set_text("", &mut h.cx());
        p.append_text("a\nb\nc", AppendOptions::default(), &mut h.cx());

        assert_eq!(p.line_count(), 3);
        assert!(!p.has_scrollbar());
        assert!(p.formatted_lines().iter().all(|l| l.chars().count() == 10));
        assert_eq!(h.fb.row_text(0), "a         ");
    }

    #[test]
    fn animated_render_paints_rows_outside_the_reveal_range_at_once() {
        let mut h = Harness::new(8, 3);
        let mut p = panel(8, 3, Interactivity::None);
        p.set_text("top\nmid\nend", &mut h.cx());
        h.fb.clear(tui_panels_term::Cell::default());

        p.render(
            &mut h.cx(),
            RenderOptions {
                animated: true,
                range: Some(1..=1),
                ..RenderOptions::repaint()
            },
        );

        assert_eq!(h.fb.row_text(0), "top     ");
        assert_eq!(h.fb.row_text(1), "mid     ");
        assert_eq!(h.fb.row_text(2), "end     ");
        assert_eq!(h.pacer.skipped, 3);
    }

    #[test]
    fn thumb_never_moves_up_while_scrolling_down() {
        for (total, height) in [(4, 3), (10, 3), (20, 5), (57, 12), (200, 48)] {
            let mut last = 0;
            for offset in 0..=total - height {
                let thumb = scrollbar_thumb(offset, total, height);
                assert!(thumb >= last, "total {total} height {height} offset {offset}");
                assert!((1..=height - 2).contains(&thumb));
                last = thumb;
            }
            assert_eq!(last, height - 2);
        }
    }

    #[test]
    fn thumb_is_pinned_at_both_ends() {
        assert_eq!(scrollbar_thumb(0, 20, 5), 1);
        assert_eq!(scrollbar_thumb(15, 20, 5), 3);
        assert_eq!(scrollbar_thumb(5, 20, 5), 1 + 3 * 7 / 20);
    }
}
