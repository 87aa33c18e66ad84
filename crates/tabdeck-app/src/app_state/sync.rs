//! The composition root: keeps dock tabs in step with the widget registry.

use tracing::{debug, warn};

use tabdeck_store::WidgetDescriptor;

use crate::widgets::{view_for, WidgetProps};

use super::core::TabdeckApp;
use super::types::Mount;

impl TabdeckApp {
    /// Run a composition pass if the registry changed since the last one.
    pub(super) fn sync_if_changed(&mut self) {
        if self.synced_revision == Some(self.store.widgets_revision()) {
            return;
        }
        self.sync_widgets();
    }

    /// Give every registered widget a tab and a mounted view.
    ///
    /// A widget id gets at most one tab over its lifetime. Descriptors that
    /// leave the registry are not closed from here; their bookkeeping is
    /// dropped once their tab is gone too.
    pub(super) fn sync_widgets(&mut self) {
        if !self.ensure_attached() {
            return;
        }
        let revision = self.store.widgets_revision();

        let pending: Vec<WidgetDescriptor> = self
            .store
            .widgets()
            .iter()
            .filter(|w| !self.rendered.contains(&w.id))
            .cloned()
            .collect();

        for widget in pending {
            self.mount(widget);
        }
        self.prune_rendered();

        self.synced_revision = Some(revision);
        self.needs_redraw = true;
    }

    fn mount(&mut self, widget: WidgetDescriptor) {
        let closable = self.config.widgets.closable;
        let container =
            match self
                .bridge
                .create_tab(&mut self.surface, &widget.id, &widget.title, closable)
            {
                Ok(container) => container,
                Err(e) => {
                    warn!(widget = %widget.id.short(), "tab not created: {e}");
                    return;
                }
            };
        self.rendered.insert(widget.id.clone());

        let view = view_for(
            widget.kind,
            WidgetProps {
                id: widget.id.clone(),
                name: widget.title.clone(),
            },
        );
        debug!(widget = %widget.id.short(), kind = %widget.kind, %container, "view mounted");
        self.mounts.insert(widget.id, Mount { container, view });
    }

    /// Forget ids that are neither registered nor shown by a live tab.
    fn prune_rendered(&mut self) {
        let registry = self.store.registry();
        let surface = &self.surface;
        let stale: Vec<_> = self
            .rendered
            .iter()
            .filter(|id| !registry.contains(id) && !surface.has_live_tab(id))
            .cloned()
            .collect();

        for id in stale {
            debug!(widget = %id.short(), "pruning unmounted widget");
            self.rendered.remove(&id);
            self.mounts.remove(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use tabdeck_dock::{Host, TabState};

    use crate::app_state::core::test_app;

    #[test]
    fn first_pass_attaches_and_creates_tabs() {
        let mut app = test_app();
        app.sync_if_changed();

        let watcher = app.store.widgets()[0].id.clone();
        assert!(app.surface.is_attached());
        assert_eq!(app.surface.tab_count(), 1);
        assert!(app.rendered.contains(&watcher));
        assert_eq!(app.mounts[&watcher].view.props().name, "Watcher");
        assert_eq!(app.surface.tab(&watcher).unwrap().title(), "Watcher");
    }

    #[test]
    fn repeated_passes_create_no_duplicates() {
        let mut app = test_app();
        app.sync_widgets();
        app.sync_widgets();
        app.sync_if_changed();
        assert_eq!(app.surface.tab_count(), 1);
        assert_eq!(app.rendered.len(), 1);
    }

    #[test]
    fn added_widget_gets_a_tab_in_its_container() {
        let mut app = test_app();
        app.sync_if_changed();

        let inc = app.store.add_incrementor();
        app.sync_if_changed();

        assert_eq!(app.surface.tab_count(), 2);
        let mount = &app.mounts[&inc];
        let container = app.surface.container(mount.container).unwrap();
        assert_eq!(container.widget, inc);
        assert_eq!(app.surface.current(), Some(&inc));
        assert_eq!(app.surface.tab(&inc).unwrap().state(), TabState::Active);
    }

    #[test]
    fn counter_changes_skip_the_pass() {
        let mut app = test_app();
        app.sync_if_changed();
        let passes = app.surface.layout_passes();
        app.store.increment();
        app.sync_if_changed();
        assert_eq!(app.surface.layout_passes(), passes);
    }

    #[test]
    fn no_host_means_no_tabs_until_one_arrives() {
        let mut app = test_app();
        app.host = None;
        app.sync_if_changed();
        assert_eq!(app.surface.tab_count(), 0);
        assert!(app.synced_revision.is_none());

        app.set_host(Host::new("main", 800, 600));
        app.sync_if_changed();
        assert_eq!(app.surface.tab_count(), 1);
    }

    #[test]
    fn removed_descriptor_keeps_its_live_tab() {
        let mut app = test_app();
        app.sync_if_changed();
        let watcher = app.store.widgets()[0].id.clone();

        app.store.delete_widget(&watcher);
        app.sync_if_changed();

        assert!(app.surface.has_live_tab(&watcher));
        assert!(app.rendered.contains(&watcher));
    }

    #[test]
    fn closed_and_removed_widget_is_pruned() {
        let mut app = test_app();
        app.sync_if_changed();
        let watcher = app.store.widgets()[0].id.clone();

        app.surface.request_close(&watcher);
        app.store.delete_widget(&watcher);
        app.sync_if_changed();

        assert!(!app.rendered.contains(&watcher));
        assert!(!app.mounts.contains_key(&watcher));
    }

    #[test]
    fn closed_tab_is_not_recreated_while_still_registered() {
        let mut app = test_app();
        app.sync_if_changed();
        let watcher = app.store.widgets()[0].id.clone();

        // The Deleted notification has not been applied yet.
        app.surface.request_close(&watcher);
        app.store.increment();
        app.store.add_decrementor();
        app.sync_if_changed();

        assert!(!app.surface.has_live_tab(&watcher));
        assert!(app.rendered.contains(&watcher));
        assert_eq!(app.surface.tab_count(), 1);
    }
}
