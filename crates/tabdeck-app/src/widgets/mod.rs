//! Views mounted into dock containers, one per widget kind.
//!
//! A view renders itself as text lines against the current store state and
//! may expose a single button whose press yields a store action.

mod decrementor;
mod incrementor;
mod watcher;

pub use decrementor::DecrementorView;
pub use incrementor::IncrementorView;
pub use watcher::WatcherView;

use tabdeck_common::{StoreAction, WidgetId, WidgetKind};
use tabdeck_store::Store;

/// What every view is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetProps {
    pub id: WidgetId,
    pub name: String,
}

pub trait WidgetView {
    fn props(&self) -> &WidgetProps;

    fn render(&self, store: &Store) -> Vec<String>;

    /// The action the view's button dispatches, if it has one.
    fn press(&self) -> Option<StoreAction> {
        None
    }
}

/// The view that renders a widget of `kind`.
pub fn view_for(kind: WidgetKind, props: WidgetProps) -> Box<dyn WidgetView> {
    match kind {
        WidgetKind::Incrementor => Box::new(IncrementorView::new(props)),
        WidgetKind::Decrementor => Box::new(DecrementorView::new(props)),
        WidgetKind::Watcher => Box::new(WatcherView::new(props)),
    }
}

/// Text for a push button.
pub(crate) fn button(label: &str) -> String {
    format!("[ {label} ]")
}
