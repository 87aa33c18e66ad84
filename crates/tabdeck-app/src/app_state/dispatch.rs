//! Action dispatch: routes parsed actions to the store or the dock.

use std::time::Duration;

use tracing::{debug, info};

use tabdeck_common::{Action, TabRef, WidgetId};

use super::core::TabdeckApp;
use super::input::help_lines;

impl TabdeckApp {
    /// Dispatch an [`Action`] and apply whatever it set in motion.
    pub(super) fn dispatch(&mut self, action: Action) {
        self.needs_redraw = true;
        match action {
            Action::AddWidget(kind) => {
                let id = self.store.add_widget(kind, kind.default_title());
                debug!(widget = %id.short(), %kind, "widget added");
            }
            Action::ClickTab(tab) => match self.resolve_tab(&tab) {
                Ok(id) => {
                    self.surface.click_tab(&id);
                }
                Err(msg) => self.messages.push(msg),
            },
            Action::CloseTab(tab) => match self.resolve_tab(&tab) {
                Ok(id) => {
                    if !self.surface.request_close(&id) {
                        self.messages.push(format!("tab {} cannot be closed", id.short()));
                    }
                }
                Err(msg) => self.messages.push(msg),
            },
            Action::ClickAt { x, y } => {
                if !self.surface.click_at(f64::from(x), f64::from(y)) {
                    self.messages.push(format!("nothing to click at ({x}, {y})"));
                }
            }
            Action::PressButton => self.press_current(),

            Action::Increment => self.store.increment(),
            Action::Decrement => self.store.decrement(),
            Action::IncrementByAmount(amount) => self.store.increment_by_amount(amount),
            Action::IncrementAsync(amount) => {
                let delay = Duration::from_millis(self.config.counter.async_delay_ms.into());
                self.pending.push(self.delayed.increment_async(amount, delay));
                self.messages
                    .push(format!("adding {amount} in {} ms", delay.as_millis()));
            }

            Action::Resize { width, height } => self.handle_resize(width, height),
            Action::Show => {}
            Action::Help => {
                self.messages.extend(help_lines());
                self.needs_redraw = false;
            }
            Action::Quit => {
                info!("quit requested");
                self.should_exit = true;
                self.needs_redraw = false;
            }
            Action::Wait(ms) => std::thread::sleep(Duration::from_millis(ms)),
            Action::None => self.needs_redraw = false,
        }
        self.poll();
    }

    /// Press the button of the view in the visible tab.
    fn press_current(&mut self) {
        let Some(id) = self.surface.current().cloned() else {
            self.messages.push("no tab is open".into());
            return;
        };
        let Some(mount) = self.mounts.get(&id) else {
            return;
        };
        match mount.view.press() {
            Some(action) => self.store.dispatch(action),
            None => self
                .messages
                .push(format!("{} has no button", mount.view.props().name)),
        }
    }

    /// The live tab a console reference names.
    pub(super) fn resolve_tab(&self, tab: &TabRef) -> Result<WidgetId, String> {
        let ids = self.surface.panel().tab_ids();
        match tab {
            TabRef::Index(n) => n
                .checked_sub(1)
                .and_then(|i| ids.get(i))
                .cloned()
                .ok_or_else(|| format!("no tab at position {n}")),
            TabRef::IdPrefix(prefix) => {
                let mut matches = ids.iter().filter(|id| id.as_str().starts_with(prefix.as_str()));
                match (matches.next(), matches.next()) {
                    (Some(id), None) => Ok(id.clone()),
                    (None, _) => Err(format!("no tab matches '{prefix}'")),
                    (Some(_), Some(_)) => Err(format!("'{prefix}' matches more than one tab")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tabdeck_common::{Action, TabRef, WidgetKind};
    use tabdeck_config::TabdeckConfig;

    use crate::app_state::core::{test_app, TabdeckApp};

    fn started() -> TabdeckApp {
        let mut app = test_app();
        app.sync_if_changed();
        app
    }

    #[test]
    fn add_widget_opens_a_tab() {
        let mut app = started();
        app.dispatch(Action::AddWidget(WidgetKind::Incrementor));
        assert_eq!(app.store.widgets().len(), 2);
        assert_eq!(app.surface.tab_count(), 2);
    }

    #[test]
    fn counter_actions_reach_the_store() {
        let mut app = started();
        app.dispatch(Action::Increment);
        app.dispatch(Action::Increment);
        app.dispatch(Action::Decrement);
        app.dispatch(Action::IncrementByAmount(10));
        assert_eq!(app.store.count(), 11);
    }

    #[test]
    fn click_activates_in_the_registry() {
        let mut app = started();
        let watcher = app.store.widgets()[0].id.clone();
        app.dispatch(Action::AddWidget(WidgetKind::Incrementor));
        let inc = app.store.widgets()[1].id.clone();

        // Both active after the add.
        assert_eq!(app.store.registry().active().count(), 2);

        app.dispatch(Action::ClickTab(TabRef::Index(1)));
        assert_eq!(app.surface.current(), Some(&watcher));
        assert!(app.store.registry().get(&watcher).unwrap().active);
        assert!(!app.store.registry().get(&inc).unwrap().active);
    }

    #[test]
    fn close_removes_from_the_registry() {
        let mut app = started();
        let watcher = app.store.widgets()[0].id.clone();
        app.dispatch(Action::AddWidget(WidgetKind::Decrementor));
        let dec = app.store.widgets()[1].id.clone();

        app.dispatch(Action::CloseTab(TabRef::IdPrefix(dec.as_str()[..6].to_string())));

        assert_eq!(app.store.widgets().len(), 1);
        assert_eq!(app.store.widgets()[0].id, watcher);
        assert!(!app.surface.has_live_tab(&dec));
        assert!(!app.rendered.contains(&dec));
        assert_eq!(app.surface.current(), Some(&watcher));
    }

    #[test]
    fn closing_twice_reports_missing_tab() {
        let mut app = started();
        app.dispatch(Action::CloseTab(TabRef::Index(1)));
        assert!(app.store.widgets().is_empty());
        app.messages.clear();

        app.dispatch(Action::CloseTab(TabRef::Index(1)));
        assert_eq!(app.messages, vec!["no tab at position 1"]);
    }

    #[test]
    fn click_at_header_activates_that_widget() {
        let mut app = started();
        let watcher = app.store.widgets()[0].id.clone();
        app.dispatch(Action::AddWidget(WidgetKind::Incrementor));
        let inc = app.store.widgets()[1].id.clone();

        // Headers are 120px wide, 24px tall; the first spans x 0..120.
        app.dispatch(Action::ClickAt { x: 10, y: 5 });
        assert_eq!(app.surface.current(), Some(&watcher));
        assert!(app.store.registry().get(&watcher).unwrap().active);
        assert!(!app.store.registry().get(&inc).unwrap().active);
    }

    #[test]
    fn click_at_close_box_deletes_the_widget() {
        let mut app = started();
        app.dispatch(Action::AddWidget(WidgetKind::Decrementor));
        let dec = app.store.widgets()[1].id.clone();

        // Close box of the second header sits at x 224..240.
        app.dispatch(Action::ClickAt { x: 230, y: 5 });
        assert_eq!(app.store.widgets().len(), 1);
        assert!(!app.surface.has_live_tab(&dec));
        assert!(!app.rendered.contains(&dec));
    }

    #[test]
    fn click_at_outside_the_tab_bar_is_reported() {
        let mut app = started();
        app.dispatch(Action::ClickAt { x: 500, y: 300 });
        assert_eq!(app.messages, vec!["nothing to click at (500, 300)"]);
        assert_eq!(app.surface.tab_count(), 1);
    }

    #[test]
    fn non_closable_tabs_stay_open() {
        let mut config = TabdeckConfig::default();
        config.widgets.closable = false;
        let mut app = TabdeckApp::new(config).unwrap();
        app.use_configured_host();
        app.sync_if_changed();

        app.dispatch(Action::CloseTab(TabRef::Index(1)));
        assert_eq!(app.surface.tab_count(), 1);
        assert_eq!(app.store.widgets().len(), 1);
        assert!(app.messages[0].contains("cannot be closed"));
    }

    #[test]
    fn press_uses_the_visible_view() {
        let mut app = started();
        app.dispatch(Action::AddWidget(WidgetKind::Incrementor));
        app.dispatch(Action::PressButton);
        app.dispatch(Action::PressButton);
        assert_eq!(app.store.count(), 2);

        app.dispatch(Action::AddWidget(WidgetKind::Decrementor));
        app.dispatch(Action::PressButton);
        assert_eq!(app.store.count(), 1);
    }

    #[test]
    fn press_on_watcher_has_no_effect() {
        let mut app = started();
        app.dispatch(Action::PressButton);
        assert_eq!(app.store.count(), 0);
        assert_eq!(app.messages, vec!["Watcher has no button"]);
    }

    #[test]
    fn ambiguous_prefix_is_rejected() {
        let mut app = started();
        app.dispatch(Action::AddWidget(WidgetKind::Watcher));
        // The empty prefix matches every id.
        let result = app.resolve_tab(&TabRef::IdPrefix(String::new()));
        assert!(result.unwrap_err().contains("more than one"));
        assert!(app.resolve_tab(&TabRef::Index(0)).is_err());
        assert!(app.resolve_tab(&TabRef::Index(3)).is_err());
    }

    #[test]
    fn quit_sets_exit_flag() {
        let mut app = started();
        app.dispatch(Action::Quit);
        assert!(app.should_exit);
    }

    #[test]
    fn help_lists_commands() {
        let mut app = started();
        app.dispatch(Action::Help);
        assert!(app.messages.iter().any(|m| m.contains("add-amount")));
    }
}
