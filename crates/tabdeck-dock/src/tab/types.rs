//! Core tab types: lifecycle state, payload, and the tab itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use tabdeck_common::WidgetId;

use crate::surface::ContainerId;

/// Lifecycle of a single tab.
///
/// `Created -> Active <-> Inactive -> Closed`. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabState {
    Created,
    Active,
    Inactive,
    Closed,
}

/// What a tab reports about itself when it fires a lifecycle callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: WidgetId,
    pub title: String,
    pub closable: bool,
}

/// Callback invoked with the tab's [`TabInfo`].
pub type TabHandler = Box<dyn FnMut(&TabInfo)>;

/// A dock tab bound to one content container.
pub struct Tab {
    pub(super) info: TabInfo,
    pub(super) container: ContainerId,
    pub(super) state: TabState,
    pub(super) on_activate: Option<TabHandler>,
    pub(super) on_close_request: Option<TabHandler>,
}

impl Tab {
    pub fn new(
        id: WidgetId,
        title: impl Into<String>,
        closable: bool,
        container: ContainerId,
    ) -> Self {
        Self {
            info: TabInfo {
                id,
                title: title.into(),
                closable,
            },
            container,
            state: TabState::Created,
            on_activate: None,
            on_close_request: None,
        }
    }

    /// Register the handler for user-driven activation.
    pub fn on_activate(mut self, handler: impl FnMut(&TabInfo) + 'static) -> Self {
        self.on_activate = Some(Box::new(handler));
        self
    }

    /// Register the handler for the close affordance. It runs before the
    /// tab transitions to `Closed`.
    pub fn on_close_request(mut self, handler: impl FnMut(&TabInfo) + 'static) -> Self {
        self.on_close_request = Some(Box::new(handler));
        self
    }

    // -- Accessors --

    pub fn id(&self) -> &WidgetId {
        &self.info.id
    }

    pub fn title(&self) -> &str {
        &self.info.title
    }

    pub fn closable(&self) -> bool {
        self.info.closable
    }

    pub fn info(&self) -> &TabInfo {
        &self.info
    }

    pub fn container(&self) -> ContainerId {
        self.container
    }

    pub fn state(&self) -> TabState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state != TabState::Closed
    }

    pub fn is_active(&self) -> bool {
        self.state == TabState::Active
    }
}

impl fmt::Debug for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("info", &self.info)
            .field("container", &self.container)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
