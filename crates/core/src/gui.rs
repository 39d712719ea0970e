//! The toolkit root: screen surface, panels, focus and the log line.
//!
//! `Gui` owns every panel it creates and hands out [`PanelId`]s. Row 0 of
//! the screen is the log line; drawable row `y` lands on screen row `y + 1`.
//!
//! Precondition failures of drawing or panel creation are printed to the log
//! line and traced; the `try_*` variants return them instead.

use tui_panels_term::Surface;
use tui_panels_types::{BorderStyle, Interactivity, Rect, LOG_ROWS};

use crate::config::{Colors, GuiConfig};
use crate::error::{GeometryError, PanelError};
use crate::focus::FocusRegistry;
use crate::geometry::{self, BoxShape, Corners, Primitive};
use crate::pacing::{InstantPacer, RevealPacer, SleepPacer};
use crate::panel::{AppendOptions, Panel, PanelColors, PanelId, RenderCx, RenderOptions};

pub struct Gui<S: Surface> {
    config: GuiConfig,
    surface: S,
    pacer: Box<dyn RevealPacer>,
    focus: FocusRegistry,
    /// Index 0 is the log line.
    panels: Vec<Panel>,
    log_entries: u32,
}

impl<S: Surface> Gui<S> {
    /// Clear the screen, set the title and create the log line. The pacer
    /// follows `config.instant_reveal`.
    pub fn new(config: GuiConfig, surface: S) -> Self {
        let pacer: Box<dyn RevealPacer> = if config.instant_reveal {
            Box::new(InstantPacer::default())
        } else {
            Box::new(SleepPacer)
        };
        Self::with_pacer(config, surface, pacer)
    }

    pub fn with_pacer(config: GuiConfig, mut surface: S, pacer: Box<dyn RevealPacer>) -> Self {
        surface.set_title(&config.title);
        surface.clear(config.default_style());

        let log_style = config.log_style();
        let log = Panel::new(
            PanelId::LOG,
            Rect::new(0, 0, config.width, LOG_ROWS),
            Interactivity::ScrollOnly,
            PanelColors {
                background: log_style.bg,
                foreground: log_style.fg,
                inactive: config.inactive,
            },
        );

        let mut gui = Self {
            config,
            surface,
            pacer,
            focus: FocusRegistry::new(),
            panels: vec![log],
            log_entries: 0,
        };
        gui.with_panel(PanelId::LOG, |p, cx| p.set_text("", cx));
        tracing::debug!(
            width = gui.config.width,
            height = gui.config.height,
            "gui initialized"
        );
        gui
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn focus(&self) -> FocusRegistry {
        self.focus
    }

    pub fn focused(&self) -> Option<PanelId> {
        self.focus.focused()
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id.index())
    }

    /// Number of panels, not counting the log line.
    pub fn panel_count(&self) -> usize {
        self.panels.len() - 1
    }

    fn with_panel<R>(
        &mut self,
        id: PanelId,
        f: impl FnOnce(&mut Panel, &mut RenderCx<'_>) -> R,
    ) -> Option<R> {
        let Gui {
            surface,
            pacer,
            focus,
            panels,
            ..
        } = self;
        let panel = panels.get_mut(id.index())?;
        let mut cx = RenderCx {
            surface,
            pacer: pacer.as_mut(),
            focus: *focus,
        };
        Some(f(panel, &mut cx))
    }

    fn present(&mut self) {
        if let Err(e) = self.surface.flush() {
            tracing::warn!(error = %e, "failed to present frame");
        }
    }

    // ============== Log line ==============

    /// Prepend a numbered entry to the log line, keeping at most
    /// `config.log_history` lines.
    pub fn print(&mut self, msg: &str) {
        let n = self.log_entries;
        self.log_entries += 1;

        let old = self.panels[PanelId::LOG.index()].text();
        let mut text = format!("({n:02}) : {msg}");
        let keep = self.config.log_history.saturating_sub(1);
        if !old.is_empty() {
            for line in old.lines().take(keep) {
                text.push('\n');
                text.push_str(line);
            }
        }
        self.with_panel(PanelId::LOG, |p, cx| p.set_text(text, cx));
        tracing::info!(entry = n, "{msg}");
    }

    pub fn log_text(&self) -> &str {
        self.panels[PanelId::LOG.index()].text()
    }

    pub fn log_entries(&self) -> u32 {
        self.log_entries
    }

    /// Show a newer log entry.
    pub fn log_scroll_up(&mut self) {
        self.with_panel(PanelId::LOG, |p, cx| p.scroll_up(cx));
    }

    /// Show an older log entry.
    pub fn log_scroll_down(&mut self) {
        self.with_panel(PanelId::LOG, |p, cx| p.scroll_down(cx));
    }

    // ============== Border primitives ==============

    /// Draw `p`, printing a rejected call to the log line.
    pub fn draw(&mut self, p: &dyn Primitive, colors: Colors) {
        if let Err(e) = self.try_draw(p, colors) {
            self.report_geometry(&e);
        }
    }

    pub fn try_draw(&mut self, p: &dyn Primitive, colors: Colors) -> Result<(), GeometryError> {
        let style = colors.resolve(&self.config);
        geometry::draw(
            &mut self.surface,
            p,
            style,
            self.config.width,
            self.config.height,
        )?;
        self.present();
        Ok(())
    }

    /// Draw a box whose interior is blanked whenever a background is given.
    pub fn draw_box(&mut self, rect: Rect, style: BorderStyle, corners: Corners, colors: Colors) {
        let shape = BoxShape::new(rect, style)
            .with_corners(corners)
            .filled(colors.bg.is_some());
        self.draw(&shape, colors);
    }

    fn report_geometry(&mut self, e: &GeometryError) {
        tracing::warn!(primitive = e.primitive(), error = %e, "draw rejected");
        self.print(&format!("draw error: {e}"));
    }

    // ============== Panels ==============

    /// Create a panel at `rect` (drawable coordinates) and paint `text` into it.
    pub fn create_panel(
        &mut self,
        rect: Rect,
        text: &str,
        colors: Colors,
        interactivity: Interactivity,
    ) -> Result<PanelId, PanelError> {
        self.check_panel_rect(rect)?;

        let style = colors.resolve(&self.config);
        let id = PanelId::from_index(self.panels.len());
        let screen = Rect::new(rect.left, rect.top + LOG_ROWS, rect.width, rect.height);
        self.panels.push(Panel::new(
            id,
            screen,
            interactivity,
            PanelColors {
                background: style.bg,
                foreground: style.fg,
                inactive: self.config.inactive,
            },
        ));
        self.with_panel(id, |p, cx| p.set_text(text, cx));
        tracing::debug!(panel = id.index(), ?rect, ?interactivity, "panel created");
        Ok(id)
    }

    fn check_panel_rect(&self, rect: Rect) -> Result<(), PanelError> {
        let (w, h) = (self.config.width, self.config.height);
        if rect.left >= w || rect.top >= h {
            return Err(PanelError::Origin {
                left: rect.left,
                top: rect.top,
            });
        }
        if rect.right() > w as u32 {
            return Err(PanelError::TooWide {
                end: rect.right(),
                limit: w,
            });
        }
        if rect.bottom() > h as u32 {
            return Err(PanelError::TooTall {
                end: rect.bottom(),
                limit: h,
            });
        }
        if rect.width < 2 || rect.height < 1 {
            return Err(PanelError::TooSmall {
                width: rect.width,
                height: rect.height,
            });
        }
        Ok(())
    }

    pub fn set_text(&mut self, id: PanelId, text: &str) {
        self.with_panel(id, |p, cx| p.set_text(text, cx));
    }

    pub fn append_text(&mut self, id: PanelId, text: &str, opts: AppendOptions) {
        self.with_panel(id, |p, cx| p.append_text(text, opts, cx));
    }

    pub fn previous_line(&mut self, id: PanelId) {
        self.with_panel(id, |p, cx| p.previous_line(cx));
    }

    pub fn next_line(&mut self, id: PanelId) {
        self.with_panel(id, |p, cx| p.next_line(cx));
    }

    pub fn scroll_up(&mut self, id: PanelId) {
        self.with_panel(id, |p, cx| p.scroll_up(cx));
    }

    pub fn scroll_down(&mut self, id: PanelId) {
        self.with_panel(id, |p, cx| p.scroll_down(cx));
    }

    pub fn render(&mut self, id: PanelId, opts: RenderOptions) {
        self.with_panel(id, |p, cx| p.render(cx, opts));
    }

    /// Text of the selected line, without padding.
    pub fn selected_text(&self, id: PanelId) -> Option<String> {
        self.panel(id)?.selected_text().map(str::to_string)
    }

    pub fn set_colors(&mut self, id: PanelId, colors: Colors) {
        let inactive = self.config.inactive;
        let style = colors.resolve(&self.config);
        self.with_panel(id, |p, cx| {
            p.set_colors(
                PanelColors {
                    background: style.bg,
                    foreground: style.fg,
                    inactive,
                },
                cx,
            )
        });
    }

    /// Move focus to `id` and repaint both the old and the new holder.
    pub fn set_focus(&mut self, id: PanelId) {
        let previous = self.focus.set(id);
        tracing::debug!(panel = id.index(), previous = ?previous.map(PanelId::index), "focus changed");
        if let Some(prev) = previous.filter(|p| *p != id) {
            self.render(prev, RenderOptions::repaint());
        }
        self.render(id, RenderOptions::repaint());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Line;
    use tui_panels_term::{FrameBuffer, Rgb};

    fn gui() -> Gui<FrameBuffer> {
        let config = GuiConfig::default();
        let (w, h) = config.screen_size();
        Gui::with_pacer(config, FrameBuffer::new(w, h), Box::new(InstantPacer::default()))
    }

    #[test]
    fn log_entries_are_numbered_newest_first() {
        let mut g = gui();
        g.print("first");
        g.print("second");
        assert_eq!(g.log_text(), "(01) : second\n(00) : first");
        assert!(g.surface().row_text(0).starts_with("(01) : second"));
        assert_eq!(g.surface().get(0, 0).unwrap().style.bg, Rgb::BLACK);

        g.log_scroll_down();
        assert!(g.surface().row_text(0).starts_with("(00) : first"));
        g.log_scroll_up();
        assert!(g.surface().row_text(0).starts_with("(01) : second"));
    }

    #[test]
    fn log_history_is_capped() {
        let config = GuiConfig {
            log_history: 3,
            ..GuiConfig::default()
        };
        let (w, h) = config.screen_size();
        let mut g = Gui::with_pacer(config, FrameBuffer::new(w, h), Box::new(InstantPacer::default()));
        for i in 0..5 {
            g.print(&format!("e{i}"));
        }
        assert_eq!(g.log_text(), "(04) : e4\n(03) : e3\n(02) : e2");
        assert_eq!(g.log_entries(), 5);
    }

    #[test]
    fn primitives_are_drawn_below_the_log_line() {
        let mut g = gui();
        g.draw(&Line::new(0, 0, 4, BorderStyle::Double), Colors::default());
        assert_eq!(g.surface().text_at(0, 1, 4), "════");
        assert_eq!(g.log_entries(), 0);
    }

    #[test]
    fn rejected_box_is_reported_and_not_drawn() {
        let mut g = gui();
        g.draw_box(
            Rect::new(126, 0, 5, 3),
            BorderStyle::Single,
            Corners::default(),
            Colors::default(),
        );
        assert_eq!(
            g.log_text(),
            "(00) : draw error: box: horizontal extent 131 exceeds the grid limit 128"
        );
        assert_eq!(g.surface().get(126, 1).unwrap().ch, ' ');
    }

    #[test]
    fn panels_validate_their_region() {
        let mut g = gui();
        let r = g.create_panel(Rect::new(120, 0, 10, 2), "", Colors::default(), Interactivity::None);
        assert!(matches!(r, Err(PanelError::TooWide { end: 130, limit: 128 })));
        let r = g.create_panel(Rect::new(0, 47, 10, 2), "", Colors::default(), Interactivity::None);
        assert!(matches!(r, Err(PanelError::TooTall { .. })));
        let r = g.create_panel(Rect::new(0, 48, 10, 1), "", Colors::default(), Interactivity::None);
        assert!(matches!(r, Err(PanelError::Origin { .. })));
        assert_eq!(g.panel_count(), 0);
    }

    #[test]
    fn panel_text_is_offset_by_the_log_line() {
        let mut g = gui();
        let id = g
            .create_panel(Rect::new(2, 3, 10, 2), "hi", Colors::default(), Interactivity::None)
            .unwrap();
        assert_eq!(g.surface().text_at(2, 4, 2), "hi");
        assert_eq!(g.panel(id).unwrap().rect().top, 4);
    }

    #[test]
    fn focus_change_moves_the_highlight() {
        let mut g = gui();
        let a = g
            .create_panel(Rect::new(0, 0, 6, 2), "a", Colors::default(), Interactivity::ScrollAndSelect)
            .unwrap();
        let b = g
            .create_panel(Rect::new(0, 2, 6, 2), "b", Colors::default(), Interactivity::ScrollAndSelect)
            .unwrap();
        let normal = g.config().default_style();

        g.set_focus(a);
        assert_eq!(g.surface().get(0, 1).unwrap().style, normal.inverted());

        g.set_focus(b);
        assert_eq!(g.surface().get(0, 3).unwrap().style, normal.inverted());
        assert_eq!(g.surface().get(0, 1).unwrap().style.bg, g.config().inactive);
    }
}
