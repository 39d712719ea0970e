//! Terminal input mapping.
//!
//! The toolkit never reads input itself. This crate maps `crossterm` key
//! events into [`crate::types::NavCommand`]s that a caller dispatches to its
//! panel groups.

pub mod map;

pub use tui_panels_types as types;

pub use map::{handle_key_event, should_quit};
