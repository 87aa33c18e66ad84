//! The state container: owns both slices and applies [`StoreAction`]s.
//!
//! Every dispatch goes through a logging middleware that records the
//! action together with the state before and after it.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tabdeck_common::{StoreAction, WidgetId, WidgetKind};

use crate::counter::CounterState;
use crate::widgets::{WidgetDescriptor, WidgetRegistry};

/// Combined state of every slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    pub counter: CounterState,
    pub widgets: WidgetRegistry,
}

pub struct Store {
    state: RootState,
    /// Bumped whenever the widget registry changes, so observers can skip
    /// re-synchronising when only the counter moved.
    widgets_revision: u64,
    log_actions: bool,
}

impl Store {
    /// Empty store: counter at zero, no widgets.
    pub fn new() -> Self {
        Self {
            state: RootState::default(),
            widgets_revision: 0,
            log_actions: true,
        }
    }

    /// Store seeded with one widget per kind, each under its default title.
    pub fn with_widgets(kinds: &[WidgetKind]) -> Self {
        let mut store = Self::new();
        for &kind in kinds {
            store.add_widget(kind, kind.default_title());
        }
        store
    }

    /// Turn the action log on or off.
    pub fn set_logging(&mut self, enabled: bool) {
        self.log_actions = enabled;
    }

    // -- Dispatch --

    pub fn dispatch(&mut self, action: StoreAction) {
        if !self.log_actions {
            self.reduce(action);
            return;
        }
        let name = action.name();
        let prev = self.state.clone();
        debug!(action = name, ?action, "dispatching");
        self.reduce(action);
        debug!(action = name, prev = ?prev, next = ?self.state, "state updated");
    }

    fn reduce(&mut self, action: StoreAction) {
        match action {
            StoreAction::Increment => self.state.counter.increment(),
            StoreAction::Decrement => self.state.counter.decrement(),
            StoreAction::IncrementByAmount(n) => self.state.counter.increment_by_amount(n),
            StoreAction::AddWidget { kind, id, title } => {
                if self.state.widgets.insert(kind, id.clone(), title) {
                    self.widgets_revision += 1;
                } else {
                    warn!(%id, "ignoring add for an id that is already registered");
                }
            }
            StoreAction::DeleteWidget(id) => {
                if self.state.widgets.remove(&id) {
                    self.widgets_revision += 1;
                }
            }
            StoreAction::ActivateWidget(id) => {
                let before = self.state.widgets.clone();
                self.state.widgets.activate(&id);
                if self.state.widgets != before {
                    self.widgets_revision += 1;
                }
            }
        }
    }

    // -- Action creators --

    pub fn increment(&mut self) {
        self.dispatch(StoreAction::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(StoreAction::Decrement);
    }

    pub fn increment_by_amount(&mut self, amount: i64) {
        self.dispatch(StoreAction::IncrementByAmount(amount));
    }

    /// Add an active widget under a freshly minted id.
    pub fn add_widget(&mut self, kind: WidgetKind, title: impl Into<String>) -> WidgetId {
        let id = WidgetId::new();
        self.dispatch(StoreAction::AddWidget {
            kind,
            id: id.clone(),
            title: title.into(),
        });
        id
    }

    pub fn add_incrementor(&mut self) -> WidgetId {
        self.add_widget(WidgetKind::Incrementor, WidgetKind::Incrementor.default_title())
    }

    pub fn add_decrementor(&mut self) -> WidgetId {
        self.add_widget(WidgetKind::Decrementor, WidgetKind::Decrementor.default_title())
    }

    pub fn add_watcher(&mut self) -> WidgetId {
        self.add_widget(WidgetKind::Watcher, WidgetKind::Watcher.default_title())
    }

    pub fn delete_widget(&mut self, id: &WidgetId) {
        self.dispatch(StoreAction::DeleteWidget(id.clone()));
    }

    pub fn activate_widget(&mut self, id: &WidgetId) {
        self.dispatch(StoreAction::ActivateWidget(id.clone()));
    }

    // -- Selectors --

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn count(&self) -> i64 {
        self.state.counter.value
    }

    pub fn widgets(&self) -> &[WidgetDescriptor] {
        self.state.widgets.widgets()
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.state.widgets
    }

    pub fn widgets_revision(&self) -> u64 {
        self.widgets_revision
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert_eq!(store.count(), 0);
        assert!(store.widgets().is_empty());
        assert_eq!(store.widgets_revision(), 0);
    }

    #[test]
    fn with_widgets_seeds_default_titles() {
        let store = Store::with_widgets(&[WidgetKind::Watcher, WidgetKind::Incrementor]);
        let titles: Vec<_> = store.widgets().iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["Watcher", "Incrementor"]);
        assert!(store.widgets().iter().all(|w| w.active));
    }

    #[test]
    fn counter_actions() {
        let mut store = Store::new();
        store.increment();
        store.increment();
        store.decrement();
        store.increment_by_amount(10);
        assert_eq!(store.count(), 11);
    }

    #[test]
    fn counter_actions_leave_widget_revision_alone() {
        let mut store = Store::with_widgets(&[WidgetKind::Watcher]);
        let rev = store.widgets_revision();
        store.increment();
        store.increment_by_amount(4);
        assert_eq!(store.widgets_revision(), rev);
    }

    #[test]
    fn shorthand_creators_use_default_titles() {
        let mut store = Store::new();
        let i = store.add_incrementor();
        let d = store.add_decrementor();
        let w = store.add_watcher();
        assert_eq!(store.registry().get(&i).unwrap().title, "Incrementor");
        assert_eq!(store.registry().get(&d).unwrap().kind, WidgetKind::Decrementor);
        assert_eq!(store.registry().get(&w).unwrap().kind, WidgetKind::Watcher);
    }

    #[test]
    fn duplicate_add_is_ignored() {
        let mut store = Store::new();
        let id = WidgetId::from("fixed");
        let add = StoreAction::AddWidget {
            kind: WidgetKind::Watcher,
            id: id.clone(),
            title: "Watcher".into(),
        };
        store.dispatch(add.clone());
        let rev = store.widgets_revision();
        store.dispatch(add);
        assert_eq!(store.widgets().len(), 1);
        assert_eq!(store.widgets_revision(), rev);
    }

    #[test]
    fn delete_missing_id_keeps_revision() {
        let mut store = Store::with_widgets(&[WidgetKind::Watcher]);
        let rev = store.widgets_revision();
        store.delete_widget(&WidgetId::from("nope"));
        assert_eq!(store.widgets_revision(), rev);
        assert_eq!(store.widgets().len(), 1);
    }

    #[test]
    fn repeated_activate_bumps_revision_once() {
        let mut store = Store::with_widgets(&[WidgetKind::Watcher, WidgetKind::Incrementor]);
        let watcher = store.widgets()[0].id.clone();
        store.activate_widget(&watcher);
        let rev = store.widgets_revision();
        store.activate_widget(&watcher);
        assert_eq!(store.widgets_revision(), rev);
    }

    #[test]
    fn dispatch_without_logging_behaves_the_same() {
        let mut logged = Store::new();
        let mut quiet = Store::new();
        quiet.set_logging(false);
        for s in [&mut logged, &mut quiet] {
            s.increment();
            s.dispatch(StoreAction::IncrementByAmount(-4));
        }
        assert_eq!(logged.state().counter, quiet.state().counter);
    }

    #[test]
    fn scenario_add_activate_remove() {
        let mut store = Store::with_widgets(&[WidgetKind::Watcher]);
        let watcher = store.widgets()[0].id.clone();

        let inc = store.add_widget(WidgetKind::Incrementor, "Incrementor");
        assert_eq!(store.widgets().len(), 2);
        assert!(store.registry().get(&inc).unwrap().active);
        assert!(store.registry().get(&watcher).unwrap().active);

        store.activate_widget(&watcher);
        assert!(store.registry().get(&watcher).unwrap().active);
        assert!(!store.registry().get(&inc).unwrap().active);

        store.delete_widget(&inc);
        assert_eq!(store.widgets().len(), 1);
        assert_eq!(store.widgets()[0].id, watcher);
    }

    #[test]
    fn root_state_serializes() {
        let store = Store::with_widgets(&[WidgetKind::Watcher]);
        let json = serde_json::to_string(store.state()).unwrap();
        assert!(json.contains("\"counter\""));
        assert!(json.contains("\"watcher\""));
    }
}
