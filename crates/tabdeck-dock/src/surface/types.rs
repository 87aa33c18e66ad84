//! Core types and constructors for DockSurface.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use tabdeck_common::{Rect, WidgetId};

use crate::layout::{DockGeometry, DockLayout};
use crate::panel::DockPanel;
use crate::tab::Tab;

/// The element the surface attaches to: a named area of the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl Host {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width as f64,
            height: self.height as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub u32);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container-{}", self.0)
    }
}

/// The content node a tab owns. Views are mounted into it by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub widget: WidgetId,
    /// Set by the last layout pass; `None` until attached or when the host
    /// has no room below the tab bar.
    pub rect: Option<Rect>,
    pub visible: bool,
}

/// Owns every live tab, their containers, the tab bar, and the layout.
///
/// Created once by the composition root and attached once to a [`Host`].
pub struct DockSurface {
    pub(super) host: Option<Host>,
    /// Live tabs by widget id.
    pub(super) tabs: HashMap<WidgetId, Tab>,
    pub(super) panel: DockPanel,
    pub(super) containers: HashMap<ContainerId, Container>,
    pub(super) layout: DockLayout,
    pub(super) geometry: DockGeometry,
    /// Auto-incrementing counter for container ids.
    pub(super) next_container: u32,
    /// Number of layout passes run, for observing resize handling.
    pub(super) layout_passes: u64,
}

impl DockSurface {
    pub fn new(layout: DockLayout) -> Self {
        Self {
            host: None,
            tabs: HashMap::new(),
            panel: DockPanel::new(),
            containers: HashMap::new(),
            layout,
            geometry: DockGeometry::default(),
            next_container: 1,
            layout_passes: 0,
        }
    }

    // -- Accessors --

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    pub fn tab(&self, id: &WidgetId) -> Option<&Tab> {
        self.tabs.get(id)
    }

    pub fn has_live_tab(&self, id: &WidgetId) -> bool {
        self.tabs.contains_key(id)
    }

    /// Live tabs in tab-bar order.
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.panel.tab_ids().iter().filter_map(|id| self.tabs.get(id))
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn panel(&self) -> &DockPanel {
        &self.panel
    }

    /// The widget whose tab is currently shown.
    pub fn current(&self) -> Option<&WidgetId> {
        self.panel.current()
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    /// The container bound to a widget's live tab.
    pub fn container_for(&self, widget: &WidgetId) -> Option<&Container> {
        self.tabs
            .get(widget)
            .and_then(|t| self.containers.get(&t.container()))
    }

    pub fn geometry(&self) -> &DockGeometry {
        &self.geometry
    }

    pub fn layout(&self) -> &DockLayout {
        &self.layout
    }

    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }
}

impl Default for DockSurface {
    fn default() -> Self {
        Self::new(DockLayout::default())
    }
}
