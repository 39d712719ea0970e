//! Key mapping from terminal events to navigation commands.

use crate::types::NavCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to navigation commands.
pub fn handle_key_event(key: KeyEvent) -> Option<NavCommand> {
    match key.code {
        // Focus
        KeyCode::Tab => Some(NavCommand::FocusNext),
        KeyCode::BackTab => Some(NavCommand::FocusPrevious),

        // Selection
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(NavCommand::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(NavCommand::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(NavCommand::Confirm),

        // Scrolling
        KeyCode::PageUp => Some(NavCommand::ScrollUp),
        KeyCode::PageDown => Some(NavCommand::ScrollDown),

        // Log line
        KeyCode::Char('[') => Some(NavCommand::LogScrollUp),
        KeyCode::Char(']') => Some(NavCommand::LogScrollDown),

        _ => None,
    }
}

/// Check if key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
