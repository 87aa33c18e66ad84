//! Host window and tab bar layout configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Initial host width in pixels (valid range: 200-7680).
    pub width: u32,
    /// Initial host height in pixels (valid range: 100-4320).
    pub height: u32,
    /// Tab bar height in pixels (valid range: 12-64).
    pub tab_bar_height: u32,
    /// Preferred tab header width in pixels (valid range: 48-400).
    pub tab_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 640,
            tab_bar_height: 24,
            tab_width: 120,
        }
    }
}
