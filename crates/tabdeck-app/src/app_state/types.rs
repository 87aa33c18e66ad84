//! Internal types and constants for the app state module.

use std::time::Duration;

use tabdeck_dock::ContainerId;

use crate::widgets::WidgetView;

/// Id of the window area the dock attaches to.
pub(super) const HOST_ID: &str = "main";

/// How long the event loop waits for input before polling again.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// A view mounted into the container of a widget's tab.
pub(super) struct Mount {
    pub(super) container: ContainerId,
    pub(super) view: Box<dyn WidgetView>,
}
