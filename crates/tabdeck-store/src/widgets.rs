//! Widget registry slice: the ordered list of open widget descriptors.
//!
//! Insertion order is tab order. Every operation is total; unknown ids
//! are silently ignored.

use serde::{Deserialize, Serialize};

use tabdeck_common::{WidgetId, WidgetKind};

/// One open tab as the state container sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    pub kind: WidgetKind,
    pub id: WidgetId,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetRegistry {
    widgets: Vec<WidgetDescriptor>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new active widget under a fresh id and return that id.
    ///
    /// Other entries keep their active flags; only [`activate`](Self::activate)
    /// collapses the active set.
    pub fn add(&mut self, kind: WidgetKind, title: impl Into<String>) -> WidgetId {
        let id = WidgetId::new();
        self.insert(kind, id.clone(), title);
        id
    }

    /// Append a widget under a caller-supplied id. Returns `false` and
    /// leaves the registry untouched if the id is already present.
    pub fn insert(&mut self, kind: WidgetKind, id: WidgetId, title: impl Into<String>) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.widgets.push(WidgetDescriptor {
            kind,
            id,
            title: title.into(),
            active: true,
        });
        true
    }

    /// Drop the entry with this id, if any. Returns whether one was removed.
    pub fn remove(&mut self, id: &WidgetId) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| &w.id != id);
        self.widgets.len() != before
    }

    /// Mark exactly the matching entry active. With an unknown id every
    /// entry ends up inactive.
    pub fn activate(&mut self, id: &WidgetId) {
        for w in &mut self.widgets {
            w.active = &w.id == id;
        }
    }

    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetDescriptor> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.widgets.iter().any(|w| &w.id == id)
    }

    /// Descriptors currently flagged active, in tab order.
    pub fn active(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.widgets.iter().filter(|w| w.active)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_ids(reg: &WidgetRegistry) -> Vec<WidgetId> {
        reg.active().map(|w| w.id.clone()).collect()
    }

    #[test]
    fn add_appends_active_entry() {
        let mut reg = WidgetRegistry::new();
        let id = reg.add(WidgetKind::Watcher, "Watcher");
        assert_eq!(reg.len(), 1);
        let w = reg.get(&id).unwrap();
        assert!(w.active);
        assert_eq!(w.title, "Watcher");
        assert_eq!(w.kind, WidgetKind::Watcher);
    }

    #[test]
    fn add_never_reuses_an_id() {
        let mut reg = WidgetRegistry::new();
        let a = reg.add(WidgetKind::Incrementor, "A");
        let b = reg.add(WidgetKind::Incrementor, "B");
        assert_ne!(a, b);
        reg.remove(&a);
        let c = reg.add(WidgetKind::Incrementor, "C");
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn add_does_not_reset_other_active_flags() {
        let mut reg = WidgetRegistry::new();
        let a = reg.add(WidgetKind::Watcher, "Watcher");
        let b = reg.add(WidgetKind::Incrementor, "Incrementor");
        assert_eq!(active_ids(&reg), vec![a, b]);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut reg = WidgetRegistry::new();
        let id = WidgetId::from("dup");
        assert!(reg.insert(WidgetKind::Watcher, id.clone(), "one"));
        assert!(!reg.insert(WidgetKind::Incrementor, id.clone(), "two"));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(&id).unwrap().title, "one");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut reg = WidgetRegistry::new();
        let a = reg.add(WidgetKind::Watcher, "a");
        let b = reg.add(WidgetKind::Incrementor, "b");
        let c = reg.add(WidgetKind::Decrementor, "c");
        let ids: Vec<_> = reg.widgets().iter().map(|w| w.id.clone()).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn activate_leaves_exactly_one_active() {
        let mut reg = WidgetRegistry::new();
        let a = reg.add(WidgetKind::Watcher, "a");
        let b = reg.add(WidgetKind::Incrementor, "b");
        let _c = reg.add(WidgetKind::Decrementor, "c");
        reg.activate(&b);
        assert_eq!(active_ids(&reg), vec![b.clone()]);
        reg.activate(&a);
        assert_eq!(active_ids(&reg), vec![a]);
    }

    #[test]
    fn activate_is_idempotent() {
        let mut reg = WidgetRegistry::new();
        let _a = reg.add(WidgetKind::Watcher, "a");
        let b = reg.add(WidgetKind::Incrementor, "b");
        reg.activate(&b);
        let once = reg.clone();
        reg.activate(&b);
        assert_eq!(reg, once);
    }

    #[test]
    fn activate_unknown_id_clears_all() {
        let mut reg = WidgetRegistry::new();
        reg.add(WidgetKind::Watcher, "a");
        reg.add(WidgetKind::Incrementor, "b");
        reg.activate(&WidgetId::from("missing"));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.active().count(), 0);
    }

    #[test]
    fn remove_twice_is_noop() {
        let mut reg = WidgetRegistry::new();
        let a = reg.add(WidgetKind::Watcher, "a");
        let b = reg.add(WidgetKind::Incrementor, "b");
        assert!(reg.remove(&b));
        let after_first = reg.clone();
        assert!(!reg.remove(&b));
        assert_eq!(reg, after_first);
        assert!(reg.contains(&a));
    }

    #[test]
    fn watcher_incrementor_scenario() {
        let mut reg = WidgetRegistry::new();
        let watcher = reg.add(WidgetKind::Watcher, "Watcher");

        let inc = reg.add(WidgetKind::Incrementor, "Incrementor");
        assert_eq!(reg.len(), 2);
        assert!(reg.get(&inc).unwrap().active);
        assert!(reg.get(&watcher).unwrap().active);

        reg.activate(&watcher);
        assert!(reg.get(&watcher).unwrap().active);
        assert!(!reg.get(&inc).unwrap().active);

        reg.remove(&inc);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.widgets()[0].id, watcher);
    }
}
