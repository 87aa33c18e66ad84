//! Tab creation, selection, and the two user interactions a tab reacts
//! to: clicking its header and pressing its close button.

use tracing::{debug, info};

use tabdeck_common::{DockError, WidgetId};

use crate::layout::HeaderHit;
use crate::tab::Tab;

use super::{Container, ContainerId, DockSurface};

impl DockSurface {
    /// Allocate a container for a new tab bound to `widget`.
    pub fn allocate_container(&mut self, widget: &WidgetId) -> Result<ContainerId, DockError> {
        if self.tabs.contains_key(widget) {
            return Err(DockError::DuplicateTab(widget.clone()));
        }
        let id = ContainerId(self.next_container);
        self.next_container += 1;
        self.containers.insert(
            id,
            Container {
                id,
                widget: widget.clone(),
                rect: None,
                visible: false,
            },
        );
        Ok(id)
    }

    /// Insert a tab built around a container from
    /// [`allocate_container`](Self::allocate_container) and show it.
    pub fn add_tab(&mut self, tab: Tab) -> Result<ContainerId, DockError> {
        let id = tab.id().clone();
        if self.tabs.contains_key(&id) {
            return Err(DockError::DuplicateTab(id));
        }
        let container = tab.container();
        debug!(widget = %id.short(), %container, title = tab.title(), "tab added");
        self.tabs.insert(id.clone(), tab);
        self.panel.push(id.clone());
        self.show(&id);
        Ok(container)
    }


    /// User clicked a tab header: bring it forward and let it announce
    /// its activation.
    pub fn click_tab(&mut self, id: &WidgetId) -> bool {
        if !self.tabs.contains_key(id) {
            return false;
        }
        self.panel.set_current(id);
        self.show(id);
        self.tabs
            .get_mut(id)
            .is_some_and(|tab| tab.request_activate())
    }

    /// User pressed a tab's close button. The tab announces the close,
    /// transitions to `Closed`, and is removed with its container.
    pub fn request_close(&mut self, id: &WidgetId) -> bool {
        let Some(tab) = self.tabs.get_mut(id) else {
            return false;
        };
        if !tab.request_close() {
            return false;
        }
        let container = tab.container();
        self.tabs.remove(id);
        self.containers.remove(&container);
        self.panel.remove(id);
        info!(widget = %id.short(), "tab closed");

        if let Some(next) = self.panel.current().cloned() {
            self.show(&next);
        } else {
            self.update();
        }
        true
    }

    /// Route a click in host coordinates to the header under it.
    pub fn click_at(&mut self, x: f64, y: f64) -> bool {
        let Some(hit) = self.geometry.hit_test(x, y) else {
            return false;
        };
        let (HeaderHit::Tab(index) | HeaderHit::Close(index)) = hit;
        let Some(id) = self.panel.tab_ids().get(index).cloned() else {
            return false;
        };
        match hit {
            HeaderHit::Tab(_) => self.click_tab(&id),
            HeaderHit::Close(_) => self.request_close(&id),
        }
    }

    /// Make `id` the only `Active` tab and refresh layout.
    fn show(&mut self, id: &WidgetId) {
        for (tab_id, tab) in self.tabs.iter_mut() {
            if tab_id == id {
                tab.select();
            } else {
                tab.deselect();
            }
        }
        self.update();
    }
}
