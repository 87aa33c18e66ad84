//! Startup widgets and counter behaviour.

use serde::{Deserialize, Serialize};
use tabdeck_common::WidgetKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    /// Widgets open at startup, in tab order (at most 16).
    pub initial: Vec<WidgetKind>,
    /// Whether tabs get a close button.
    pub closable: bool,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            initial: vec![WidgetKind::Watcher],
            closable: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Amount used by `async` when no amount is given.
    pub async_amount: i64,
    /// Delay before a delayed increment lands, in milliseconds
    /// (valid range: 0-60000).
    pub async_delay_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            async_amount: 1,
            async_delay_ms: 1000,
        }
    }
}
