//! Ordered collections of panels sharing one interactivity mode.
//!
//! A group tracks which of its panels is current and steers focus and
//! navigation between them. Panels stay owned by the [`Gui`]; the group only
//! remembers their ids.

use tui_panels_term::Surface;
use tui_panels_types::{Interactivity, Rect, INSERT_LEADING_BLANK_LINES};

use crate::config::Colors;
use crate::gui::Gui;
use crate::panel::{AppendOptions, PanelId, RenderOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelGroup {
    interactivity: Interactivity,
    panels: Vec<PanelId>,
    selected_index: usize,
}

impl PanelGroup {
    pub fn new(interactivity: Interactivity) -> Self {
        Self {
            interactivity,
            panels: Vec::new(),
            selected_index: 0,
        }
    }

    /// Static text: no scrolling, no focus.
    pub fn label() -> Self {
        Self::new(Interactivity::None)
    }

    pub fn scrolling() -> Self {
        Self::new(Interactivity::ScrollOnly)
    }

    pub fn selectable() -> Self {
        Self::new(Interactivity::ScrollAndSelect)
    }

    /// `count` adjacent label panels of `rect`'s size, laid out left to right
    /// (or top to bottom) starting at `rect`'s origin.
    pub fn label_sequence<S: Surface>(
        gui: &mut Gui<S>,
        count: usize,
        horizontal: bool,
        rect: Rect,
        colors: Colors,
    ) -> Self {
        let mut group = Self::label();
        let mut next = rect;
        for _ in 0..count {
            group.add(gui, next, "", colors);
            if horizontal {
                next.left = next.left.saturating_add(rect.width);
            } else {
                next.top = next.top.saturating_add(rect.height);
            }
        }
        group
    }

    pub fn interactivity(&self) -> Interactivity {
        self.interactivity
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<PanelId> {
        self.panels.get(index).copied()
    }

    pub fn panels(&self) -> &[PanelId] {
        &self.panels
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The group's current panel.
    pub fn current(&self) -> Option<PanelId> {
        self.get(self.selected_index)
    }

    /// Create a panel and append it to the group.
    ///
    /// A rejected region is printed to the log line and `None` returned. The
    /// first panel of an interactive group takes focus if nothing holds it.
    pub fn add<S: Surface>(
        &mut self,
        gui: &mut Gui<S>,
        rect: Rect,
        text: &str,
        colors: Colors,
    ) -> Option<PanelId> {
        match gui.create_panel(rect, text, colors, self.interactivity) {
            Ok(id) => {
                self.panels.push(id);
                if self.interactivity.is_interactive() && gui.focused().is_none() {
                    gui.set_focus(id);
                }
                Some(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, ?rect, "panel rejected");
                gui.print(&format!("panel error: {e}"));
                None
            }
        }
    }

    /// Focus the next panel, wrapping around.
    pub fn focus_next<S: Surface>(&mut self, gui: &mut Gui<S>) {
        self.move_focus(gui, true);
    }

    /// Focus the previous panel, wrapping around.
    pub fn focus_previous<S: Surface>(&mut self, gui: &mut Gui<S>) {
        self.move_focus(gui, false);
    }

    fn move_focus<S: Surface>(&mut self, gui: &mut Gui<S>, forward: bool) {
        if self.panels.is_empty() || !self.interactivity.is_interactive() {
            return;
        }
        let n = self.panels.len();
        self.selected_index = if forward {
            (self.selected_index + 1) % n
        } else {
            (self.selected_index + n - 1) % n
        };
        let id = self.panels[self.selected_index];
        tracing::trace!(index = self.selected_index, panel = id.index(), "focus moved");
        gui.set_focus(id);
    }

    pub fn select_previous<S: Surface>(&mut self, gui: &mut Gui<S>) {
        if let Some(id) = self.interactive_current() {
            gui.previous_line(id);
        }
    }

    pub fn select_next<S: Surface>(&mut self, gui: &mut Gui<S>) {
        if let Some(id) = self.interactive_current() {
            gui.next_line(id);
        }
    }

    pub fn scroll_up<S: Surface>(&mut self, gui: &mut Gui<S>) {
        if let Some(id) = self.interactive_current() {
            gui.scroll_up(id);
        }
    }

    pub fn scroll_down<S: Surface>(&mut self, gui: &mut Gui<S>) {
        if let Some(id) = self.interactive_current() {
            gui.scroll_down(id);
        }
    }

    fn interactive_current(&self) -> Option<PanelId> {
        if self.interactivity.is_interactive() {
            self.current()
        } else {
            None
        }
    }

    /// Text of the selected line in the current panel, or an empty string
    /// when nothing is selectable.
    pub fn read_selection<S: Surface>(&self, gui: &Gui<S>) -> String {
        self.interactive_current()
            .and_then(|id| gui.selected_text(id))
            .unwrap_or_default()
    }

    /// Full text of the current panel.
    pub fn read_text<S: Surface>(&self, gui: &Gui<S>) -> String {
        self.current()
            .and_then(|id| gui.panel(id))
            .map(|p| p.text().to_string())
            .unwrap_or_default()
    }

    pub fn write_text<S: Surface>(&mut self, gui: &mut Gui<S>, text: &str) {
        if let Some(id) = self.current() {
            gui.set_text(id, text);
        }
    }

    pub fn clear_text<S: Surface>(&mut self, gui: &mut Gui<S>) {
        self.write_text(gui, "");
    }

    /// Repaint every panel of the group.
    pub fn refresh<S: Surface>(&self, gui: &mut Gui<S>) {
        for id in &self.panels {
            gui.render(*id, RenderOptions::repaint());
        }
    }

    /// Insert `text` above the current panel's text, separated by two blank
    /// lines, revealing it one character at a time.
    pub fn insert_animated<S: Surface>(&mut self, gui: &mut Gui<S>, text: &str) {
        let Some(id) = self.current() else {
            return;
        };
        let opts = AppendOptions {
            leading_blank_lines: INSERT_LEADING_BLANK_LINES,
            prepend: true,
            auto_scroll: false,
            animated: true,
            delay: gui.config().reveal_delay(),
        };
        gui.append_text(id, text, opts);
    }
}
