//! Configuration schema types for tabdeck.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod logging;
mod widgets;

pub use layout::*;
pub use logging::*;
pub use widgets::*;

use serde::{Deserialize, Serialize};

/// Root configuration for tabdeck.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TabdeckConfig {
    pub logging: LoggingConfig,
    pub layout: LayoutConfig,
    pub widgets: WidgetsConfig,
    pub counter: CounterConfig,
}
