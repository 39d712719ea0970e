//! The one globally focused panel.

use crate::panel::PanelId;

/// How a panel paints its selected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Nothing holds focus: no highlight at all
    None,
    /// This panel holds focus
    Active,
    /// Another panel holds focus
    Inactive,
}

/// Points at the focused panel, if any. It does not own the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusRegistry {
    focused: Option<PanelId>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<PanelId> {
        self.focused
    }

    pub fn is_focused(&self, id: PanelId) -> bool {
        self.focused == Some(id)
    }

    /// Focus `id`, returning the previously focused panel.
    pub fn set(&mut self, id: PanelId) -> Option<PanelId> {
        self.focused.replace(id)
    }

    pub fn clear(&mut self) -> Option<PanelId> {
        self.focused.take()
    }

    pub fn highlight_for(&self, id: PanelId) -> Highlight {
        match self.focused {
            None => Highlight::None,
            Some(f) if f == id => Highlight::Active,
            Some(_) => Highlight::Inactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_follows_focus() {
        let a = PanelId::from_index(1);
        let b = PanelId::from_index(2);
        let mut focus = FocusRegistry::new();
        assert_eq!(focus.highlight_for(a), Highlight::None);

        assert_eq!(focus.set(a), None);
        assert_eq!(focus.highlight_for(a), Highlight::Active);
        assert_eq!(focus.highlight_for(b), Highlight::Inactive);

        assert_eq!(focus.set(b), Some(a));
        assert!(focus.is_focused(b));
        assert_eq!(focus.clear(), Some(b));
        assert_eq!(focus.focused(), None);
    }
}
