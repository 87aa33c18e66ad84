use tabdeck_common::StoreAction;
use tabdeck_store::Store;

use super::{button, WidgetProps, WidgetView};

pub struct IncrementorView {
    props: WidgetProps,
}

impl IncrementorView {
    pub fn new(props: WidgetProps) -> Self {
        Self { props }
    }
}

impl WidgetView for IncrementorView {
    fn props(&self) -> &WidgetProps {
        &self.props
    }

    fn render(&self, _store: &Store) -> Vec<String> {
        vec![button("Increment Count")]
    }

    fn press(&self) -> Option<StoreAction> {
        Some(StoreAction::Increment)
    }
}
