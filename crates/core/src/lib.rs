//! Core toolkit logic: border geometry, text layout, panels and focus.
//!
//! Everything here draws through the [`Surface`](tui_panels_term::Surface)
//! trait, so the whole toolkit runs headless against an in-memory
//! [`FrameBuffer`](tui_panels_term::FrameBuffer) in tests.
//!
//! # Module Structure
//!
//! - [`geometry`]: box-drawing glyph tables and the border primitives
//! - [`layout`]: word wrapping into fixed-width lines
//! - [`panel`]: a text panel with scrolling, selection and a scrollbar
//! - [`group`]: ordered panel collections that steer focus
//! - [`focus`]: the single focused panel
//! - [`gui`]: screen ownership, panel arena and the log line
//! - [`config`]: startup configuration and color overrides
//! - [`pacing`]: delays between characters of animated text
//! - [`error`]: precondition failures of drawing and panel creation
//!
//! # Coordinates
//!
//! Callers address a `width x height` drawable grid (128x48 by default).
//! The screen has one extra row on top for the log line, so drawable row `y`
//! is screen row `y + 1`.
//!
//! # Example
//!
//! ```
//! use tui_panels_core::{Colors, Gui, GuiConfig, InstantPacer, PanelGroup};
//! use tui_panels_term::FrameBuffer;
//! use tui_panels_types::Rect;
//!
//! let config = GuiConfig::default();
//! let (w, h) = config.screen_size();
//! let mut gui = Gui::with_pacer(config, FrameBuffer::new(w, h), Box::new(InstantPacer::default()));
//!
//! let mut menu = PanelGroup::selectable();
//! menu.add(&mut gui, Rect::new(0, 0, 20, 5), "Start\nOptions\nQuit", Colors::default());
//! menu.select_next(&mut gui);
//! assert_eq!(menu.read_selection(&gui), "Options");
//! ```

pub mod config;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod group;
pub mod gui;
pub mod layout;
pub mod pacing;
pub mod panel;

pub use tui_panels_term as term;
pub use tui_panels_types as types;

// Re-export commonly used types for convenience
pub use config::{Colors, GuiConfig};
pub use error::{Axis, GeometryError, PanelError};
pub use focus::{FocusRegistry, Highlight};
pub use geometry::{
    BoxShape, Column, Corners, Line, Primitive, ZigzagColumn, ZigzagLine,
};
pub use group::PanelGroup;
pub use gui::Gui;
pub use layout::{measure, wrap};
pub use pacing::{InstantPacer, RevealPacer, SleepPacer};
pub use panel::{AppendOptions, Panel, PanelColors, PanelId, RenderOptions};
