//! Terminal cell-grid module.
//!
//! This is a small, grid-oriented rendering layer. It intentionally avoids
//! ratatui widgets/layout and instead draws into a simple framebuffer that can
//! be flushed to a terminal backend.
//!
//! Goals:
//! - Keep the panel engine testable against an in-memory grid
//! - Push only changed cell runs to the terminal (no full-screen flicker)
//! - Give every drawing component a single injected `Surface`

pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_panels_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::{Surface, TerminalSurface};
