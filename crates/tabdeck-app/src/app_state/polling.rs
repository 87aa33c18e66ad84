//! Draining the lifecycle and delayed-action channels.

use tracing::debug;

use tabdeck_dock::TabEvent;

use super::core::TabdeckApp;

impl TabdeckApp {
    /// Apply tab notifications and delayed actions that arrived since the
    /// last poll, then run the composition root if the registry moved.
    ///
    /// Returns whether anything was applied.
    pub(super) fn poll(&mut self) -> bool {
        let mut applied = false;

        while let Ok(event) = self.lifecycle_rx.try_recv() {
            self.handle_tab_event(event);
            applied = true;
        }
        while let Ok(action) = self.delayed_rx.try_recv() {
            debug!(action = action.name(), "applying delayed action");
            self.store.dispatch(action);
            applied = true;
        }
        self.pending.retain(|task| !task.is_finished());

        if applied {
            self.needs_redraw = true;
        }
        self.sync_if_changed();
        applied
    }

    fn handle_tab_event(&mut self, event: TabEvent) {
        debug!(widget = %event.id().short(), ?event, "tab notification");
        match event {
            TabEvent::Activated(info) => self.store.activate_widget(&info.id),
            TabEvent::Deleted(info) => self.store.delete_widget(&info.id),
        }
    }
}
