//! Mutating operations on DockPanel: push, remove, set_current.

use tabdeck_common::WidgetId;

use super::DockPanel;

impl DockPanel {
    /// Append a tab and make it current.
    pub fn push(&mut self, id: WidgetId) {
        self.tabs.push(id);
        self.current = Some(self.tabs.len() - 1);
    }

    /// Remove a tab by id. Returns `true` if found.
    /// If the current tab is removed, the tab that slides into its slot
    /// becomes current, or the new last tab if it was at the end.
    pub fn remove(&mut self, id: &WidgetId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.tabs.remove(idx);
        let current = self.current;
        self.current = match current {
            _ if self.tabs.is_empty() => None,
            Some(cur) if cur >= self.tabs.len() => Some(self.tabs.len() - 1),
            Some(cur) if idx < cur => Some(cur - 1),
            other => other,
        };
        true
    }



    /// Make a specific tab current. Returns `true` if found.
    pub fn set_current(&mut self, id: &WidgetId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.current = Some(idx);
                true
            }
            None => false,
        }
    }
}
