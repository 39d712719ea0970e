//! Terminal panels demo (default binary).
//!
//! Draws a bordered layout with two selectable menus, a scrolling story panel
//! and a row of labels, then maps keys to panel navigation until `q`.

use std::path::Path;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use tui_panels::core::{
    BoxShape, Colors, Corners, Gui, GuiConfig, Line, PanelGroup, ZigzagColumn, ZigzagLine,
};
use tui_panels::input::{handle_key_event, should_quit};
use tui_panels::term::{Rgb, TerminalSurface};
use tui_panels::types::{BorderStyle, Junction, NavCommand, Rect};

const MENU: &str = "Draw a card\nDiscard\nShuffle the deck\nPeek at the top card\nPass\nCount cards";
const ACTIONS: &str = "Inspect\nCompare\nTrade\nKeep";
const STORY: &str = "Tab and Shift-Tab move focus between the two menus. Up and Down move the \
selection, PageUp and PageDown scroll this panel, and Enter writes the selected line here and \
into the log line at the top. [ and ] page through older log entries.\n\n\
Long lines are wrapped at word boundaries, and well-known hyphenated words break after the \
hyphen when they do not fit. Once the text outgrows the panel a scrollbar appears in the \
rightmost column.";

fn main() -> Result<()> {
    let config = GuiConfig::from_env();
    let _log_guard = init_tracing(&config);

    let (w, h) = config.screen_size();
    let surface = TerminalSurface::enter(w, h)?;
    let mut gui = Gui::new(config, surface);

    let result = run(&mut gui);

    // Always try to restore terminal state.
    let _ = gui.surface_mut().exit();
    result
}

/// File logging when `PANELS_LOG_PATH` is set; stdout belongs to the UI.
fn init_tracing(config: &GuiConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let path = Path::new(config.log_path.as_deref()?);
    let dir = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file = path.file_name()?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tui_panels=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    Some(guard)
}

fn run(gui: &mut Gui<TerminalSurface>) -> Result<()> {
    draw_frame(gui);

    let mut menu = PanelGroup::selectable();
    menu.add(gui, Rect::new(2, 2, 40, 12), MENU, Colors::default());
    menu.add(gui, Rect::new(44, 2, 40, 12), ACTIONS, Colors::default());

    let mut story = PanelGroup::scrolling();
    story.add(
        gui,
        Rect::new(2, 16, 82, 8),
        STORY,
        Colors::new(Rgb::BLACK, Rgb::GRAY),
    );

    let labels = PanelGroup::label_sequence(gui, 3, true, Rect::new(88, 2, 12, 1), Colors::default());
    for (i, name) in ["Hand", "Deck", "Pile"].iter().enumerate() {
        if let Some(id) = labels.get(i) {
            gui.set_text(id, name);
        }
    }
    labels.refresh(gui);

    gui.print("Tab switches menus, Enter reads the selection, q quits");

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        let Some(command) = handle_key_event(key) else {
            continue;
        };
        tracing::debug!(command = command.as_str(), "key");

        match command {
            NavCommand::FocusNext => menu.focus_next(gui),
            NavCommand::FocusPrevious => menu.focus_previous(gui),
            NavCommand::SelectPrevious => menu.select_previous(gui),
            NavCommand::SelectNext => menu.select_next(gui),
            NavCommand::ScrollUp => story.scroll_up(gui),
            NavCommand::ScrollDown => story.scroll_down(gui),
            NavCommand::LogScrollUp => gui.log_scroll_up(),
            NavCommand::LogScrollDown => gui.log_scroll_down(),
            NavCommand::Confirm => {
                let line = menu.read_selection(gui);
                if !line.is_empty() {
                    gui.print(&format!("selected: {line}"));
                    story.insert_animated(gui, &line);
                }
            }
        }
    }
}

fn draw_frame(gui: &mut Gui<TerminalSurface>) {
    let (w, h) = (gui.config().width, gui.config().height);
    let plain = Colors::default();

    gui.draw(&BoxShape::new(Rect::new(0, 0, w, h), BorderStyle::Double), plain);
    gui.draw(
        &Line::new(0, 15, w, BorderStyle::Double)
            .with_ends(Junction::VerticalJunction, Junction::VerticalJunction),
        plain,
    );
    gui.draw_box(
        Rect::new(86, 1, 40, 5),
        BorderStyle::Single,
        Corners::default(),
        Colors::new(Rgb::DARK_GREEN, Rgb::WHITE),
    );
    gui.draw(&ZigzagLine::new(88, 8, 30, BorderStyle::Single), plain);
    gui.draw(
        &ZigzagColumn::new(120, 18, 12, BorderStyle::Double).straight_edge(true),
        plain,
    );
}
