//! Widget-lifecycle bridge.
//!
//! Binds widget descriptors to dock tabs and forwards the two callbacks a
//! tab can fire (user activation, close request) to a single handler
//! supplied by the application. The dock never sees application state.

use std::rc::Rc;
use std::sync::mpsc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use tabdeck_common::{DockError, WidgetId};

use crate::surface::{ContainerId, DockSurface};
use crate::tab::Tab;

pub use crate::tab::TabInfo;

/// Outward notification from a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TabEvent {
    /// The user brought the tab to the front.
    Activated(TabInfo),
    /// The user closed the tab. Nothing further is emitted for it.
    Deleted(TabInfo),
}

impl TabEvent {
    pub fn info(&self) -> &TabInfo {
        match self {
            TabEvent::Activated(info) | TabEvent::Deleted(info) => info,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.info().id
    }
}

pub struct WidgetBridge {
    handler: Rc<dyn Fn(TabEvent)>,
}

impl WidgetBridge {
    pub fn new(handler: impl Fn(TabEvent) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Bridge whose notifications queue on a channel, to be drained by the
    /// owner on its next poll. Delivery order matches interaction order.
    pub fn with_channel() -> (Self, mpsc::Receiver<TabEvent>) {
        let (tx, rx) = mpsc::channel();
        let bridge = Self::new(move |event| {
            if tx.send(event).is_err() {
                debug!("lifecycle receiver dropped, notification discarded");
            }
        });
        (bridge, rx)
    }

    /// Create one tab labelled `title` for widget `id` and return the
    /// container its view should be mounted into.
    ///
    /// Fails with [`DockError::DuplicateTab`] if `id` already has a live tab.
    pub fn create_tab(
        &self,
        surface: &mut DockSurface,
        id: &WidgetId,
        title: &str,
        closable: bool,
    ) -> Result<ContainerId, DockError> {
        let container = surface.allocate_container(id)?;

        let on_activate = Rc::clone(&self.handler);
        let on_close = Rc::clone(&self.handler);
        let tab = Tab::new(id.clone(), title, closable, container)
            .on_activate(move |info| on_activate(TabEvent::Activated(info.clone())))
            .on_close_request(move |info| on_close(TabEvent::Deleted(info.clone())));

        surface.add_tab(tab)
    }
}
