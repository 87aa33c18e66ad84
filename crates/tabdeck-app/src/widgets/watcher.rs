use tabdeck_store::Store;

use super::{WidgetProps, WidgetView};

/// Read-only display of the counter.
pub struct WatcherView {
    props: WidgetProps,
}

impl WatcherView {
    pub fn new(props: WidgetProps) -> Self {
        Self { props }
    }
}

impl WidgetView for WatcherView {
    fn props(&self) -> &WidgetProps {
        &self.props
    }

    fn render(&self, store: &Store) -> Vec<String> {
        vec![format!("The current count is {}", store.count())]
    }
}
