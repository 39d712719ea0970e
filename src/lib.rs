//! Character-cell terminal panels (workspace facade crate).
//!
//! Re-exports the `tui_panels::{core,input,term,types}` API while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_panels_core as core;
pub use tui_panels_input as input;
pub use tui_panels_term as term;
pub use tui_panels_types as types;
