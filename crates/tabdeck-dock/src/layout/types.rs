//! Layout engine types and configuration.

use serde::{Deserialize, Serialize};

use tabdeck_common::Rect;

/// Configuration for the engine that places tab headers and the content
/// area inside the host bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DockLayout {
    /// Height of the tab bar in pixels.
    pub tab_bar_height: f64,
    /// Preferred width of one tab header.
    pub tab_width: f64,
    /// Headers shrink down to this width before they overflow the bar.
    pub min_tab_width: f64,
    /// Width of the close button at the right edge of a closable header.
    pub close_width: f64,
}

impl Default for DockLayout {
    fn default() -> Self {
        Self {
            tab_bar_height: 24.0,
            tab_width: 120.0,
            min_tab_width: 48.0,
            close_width: 16.0,
        }
    }
}

/// Placement of one tab header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderGeometry {
    pub header: Rect,
    /// Present only for closable tabs.
    pub close: Option<Rect>,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DockGeometry {
    /// One entry per tab, in bar order.
    pub headers: Vec<HeaderGeometry>,
    /// Area shared by every tab's container; only the current one shows.
    pub content: Option<Rect>,
}

/// What a point in the tab bar lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    Tab(usize),
    Close(usize),
}
