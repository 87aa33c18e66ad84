//! Core types for the dock panel's tab bar.

use serde::{Deserialize, Serialize};

use tabdeck_common::WidgetId;

/// The ordered tab bar of the dock. The current tab is rendered; the
/// others are hidden but preserved. Unlike a tiling slot, the bar may
/// become empty when its last tab closes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockPanel {
    /// Tab ids in bar order.
    pub(super) tabs: Vec<WidgetId>,
    /// Index of the current (visible) tab, `None` when empty.
    pub(super) current: Option<usize>,
}

impl DockPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.tabs.contains(id)
    }

    /// Get all tab ids in bar order.
    pub fn tab_ids(&self) -> &[WidgetId] {
        &self.tabs
    }

    pub fn position(&self, id: &WidgetId) -> Option<usize> {
        self.tabs.iter().position(|t| t == id)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Get the current (visible) tab id.
    pub fn current(&self) -> Option<&WidgetId> {
        self.current.and_then(|i| self.tabs.get(i))
    }
}
