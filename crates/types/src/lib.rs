//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the drawing layer, the panel
//! engine and the input mapping. All types are plain data with no external
//! dependencies, so they can be used anywhere (rendering, tests, key maps).
//!
//! # Grid Dimensions
//!
//! The toolkit targets a fixed character grid:
//!
//! - **Width**: 128 columns (indexed 0-127)
//! - **Height**: 48 drawable rows, addressed 0-47 by callers
//! - **Log row**: screen row 0 is reserved for the log line, so every
//!   caller-specified row is drawn one screen row lower
//!
//! The physical screen is therefore `GRID_WIDTH x (GRID_HEIGHT + 1)` cells.
//!
//! # Examples
//!
//! ```
//! use tui_panels_types::{BorderStyle, Junction, NavCommand, GRID_HEIGHT, GRID_WIDTH};
//!
//! let style = BorderStyle::Double;
//! assert_eq!(style.index(), 1);
//!
//! assert_eq!(Junction::from_str("crossing"), Some(Junction::Crossing));
//!
//! let cmd = NavCommand::from_str("focusNext").unwrap();
//! assert_eq!(cmd, NavCommand::FocusNext);
//!
//! assert_eq!(GRID_WIDTH, 128);
//! assert_eq!(GRID_HEIGHT, 48);
//! ```

/// Grid width in character cells (128 columns)
pub const GRID_WIDTH: u16 = 128;

/// Drawable grid height in rows (48), excluding the log row
pub const GRID_HEIGHT: u16 = 48;

/// Number of screen rows reserved above the drawable area for the log line
pub const LOG_ROWS: u16 = 1;

/// Default delay between characters of an animated reveal (10ms)
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 10;

/// Blank lines inserted above text added with an animated insert
pub const INSERT_LEADING_BLANK_LINES: usize = 2;

/// Log entries kept for scrolling back.
pub const DEFAULT_LOG_HISTORY: usize = 100;

/// Line weight of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    /// `─ │ ┌ ┐ └ ┘`
    #[default]
    Single,
    /// `═ ║ ╔ ╗ ╚ ╝`
    Double,
}

impl BorderStyle {
    /// Row of the glyph tables holding this style.
    pub fn index(&self) -> usize {
        match self {
            BorderStyle::Single => 0,
            BorderStyle::Double => 1,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(BorderStyle::Single),
            "double" => Some(BorderStyle::Double),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
        }
    }
}

/// How the end of a line, or the corner of a box, meets other borders.
///
/// Used both as the edge style of straight lines/columns and as the corner
/// style of boxes: `None` draws a plain line end (or a plain corner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Junction {
    #[default]
    None,
    /// Meets a vertical line (`├ ┤`)
    VerticalJunction,
    /// Meets a horizontal line (`┬ ┴`)
    HorizontalJunction,
    /// Crosses a line (`┼`)
    Crossing,
}

impl Junction {
    /// Column of the glyph tables holding this junction kind.
    pub fn index(&self) -> usize {
        match self {
            Junction::None => 0,
            Junction::VerticalJunction => 1,
            Junction::HorizontalJunction => 2,
            Junction::Crossing => 3,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "corner" => Some(Junction::None),
            "vertical" | "verticaljunction" => Some(Junction::VerticalJunction),
            "horizontal" | "horizontaljunction" => Some(Junction::HorizontalJunction),
            "crossing" | "cross" => Some(Junction::Crossing),
            _ => None,
        }
    }
}

/// How a panel group reacts to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interactivity {
    /// Static labels: no scrolling, no selection, never focused
    #[default]
    None,
    /// Scrollable, without a selected line
    ScrollOnly,
    /// Scrollable with a highlighted selectable line
    ScrollAndSelect,
}

impl Interactivity {
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Interactivity::None)
    }

    pub fn has_selection(&self) -> bool {
        matches!(self, Interactivity::ScrollAndSelect)
    }
}

/// Navigation commands callers translate raw key events into.
///
/// The toolkit never reads input itself; these are the operations a key map
/// can trigger on a panel group or on the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Scroll the focused panel up one line
    ScrollUp,
    /// Scroll the focused panel down one line
    ScrollDown,
    /// Move focus to the next panel in the group
    FocusNext,
    /// Move focus to the previous panel in the group
    FocusPrevious,
    /// Move the selected line up (scrolls at the top edge)
    SelectPrevious,
    /// Move the selected line down (scrolls at the bottom edge)
    SelectNext,
    /// Read the currently selected line
    Confirm,
    /// Scroll the log line to a newer entry
    LogScrollUp,
    /// Scroll the log line to an older entry
    LogScrollDown,
}

impl NavCommand {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_panels_types::NavCommand;
    ///
    /// assert_eq!(NavCommand::from_str("scrollUp"), Some(NavCommand::ScrollUp));
    /// assert_eq!(NavCommand::from_str("SELECTNEXT"), Some(NavCommand::SelectNext));
    /// assert_eq!(NavCommand::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scrollup" => Some(NavCommand::ScrollUp),
            "scrolldown" => Some(NavCommand::ScrollDown),
            "focusnext" => Some(NavCommand::FocusNext),
            "focusprevious" => Some(NavCommand::FocusPrevious),
            "selectprevious" => Some(NavCommand::SelectPrevious),
            "selectnext" => Some(NavCommand::SelectNext),
            "confirm" => Some(NavCommand::Confirm),
            "logscrollup" => Some(NavCommand::LogScrollUp),
            "logscrolldown" => Some(NavCommand::LogScrollDown),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            NavCommand::ScrollUp => "scrollUp",
            NavCommand::ScrollDown => "scrollDown",
            NavCommand::FocusNext => "focusNext",
            NavCommand::FocusPrevious => "focusPrevious",
            NavCommand::SelectPrevious => "selectPrevious",
            NavCommand::SelectNext => "selectNext",
            NavCommand::Confirm => "confirm",
            NavCommand::LogScrollUp => "logScrollUp",
            NavCommand::LogScrollDown => "logScrollDown",
        }
    }
}

/// A rectangular region in caller coordinates (before the log-row offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(left: u16, top: u16, width: u16, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// One past the right-most column.
    pub fn right(&self) -> u32 {
        self.left as u32 + self.width as u32
    }

    /// One past the bottom-most row.
    pub fn bottom(&self) -> u32 {
        self.top as u32 + self.height as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults() {
        assert_eq!(GRID_WIDTH, 128);
        assert_eq!(GRID_HEIGHT, 48);
        assert_eq!(LOG_ROWS, 1);
        assert_eq!(DEFAULT_REVEAL_DELAY_MS, 10);
    }

    #[test]
    fn glyph_table_indices_are_dense() {
        assert_eq!(BorderStyle::Single.index(), 0);
        assert_eq!(BorderStyle::Double.index(), 1);

        let idx: Vec<usize> = [
            Junction::None,
            Junction::VerticalJunction,
            Junction::HorizontalJunction,
            Junction::Crossing,
        ]
        .iter()
        .map(Junction::index)
        .collect();
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn nav_command_names_round_trip() {
        for cmd in [
            NavCommand::ScrollUp,
            NavCommand::ScrollDown,
            NavCommand::FocusNext,
            NavCommand::FocusPrevious,
            NavCommand::SelectPrevious,
            NavCommand::SelectNext,
            NavCommand::Confirm,
            NavCommand::LogScrollUp,
            NavCommand::LogScrollDown,
        ] {
            assert_eq!(NavCommand::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn interactivity_flags() {
        assert!(!Interactivity::None.is_interactive());
        assert!(Interactivity::ScrollOnly.is_interactive());
        assert!(!Interactivity::ScrollOnly.has_selection());
        assert!(Interactivity::ScrollAndSelect.has_selection());
    }

    #[test]
    fn rect_extents_do_not_overflow() {
        let r = Rect::new(u16::MAX, u16::MAX, 5, 5);
        assert_eq!(r.right(), u16::MAX as u32 + 5);
        assert_eq!(r.bottom(), u16::MAX as u32 + 5);
        assert_eq!(BorderStyle::from_str("DOUBLE"), Some(BorderStyle::Double));
        assert_eq!(BorderStyle::Double.as_str(), "double");
    }
}
