use tabdeck_common::StoreAction;
use tabdeck_store::Store;

use super::{button, WidgetProps, WidgetView};

pub struct DecrementorView {
    props: WidgetProps,
}

impl DecrementorView {
    pub fn new(props: WidgetProps) -> Self {
        Self { props }
    }
}

impl WidgetView for DecrementorView {
    fn props(&self) -> &WidgetProps {
        &self.props
    }

    fn render(&self, _store: &Store) -> Vec<String> {
        vec![button("Decrement Count")]
    }

    fn press(&self) -> Option<StoreAction> {
        Some(StoreAction::Decrement)
    }
}
