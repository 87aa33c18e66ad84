//! Dock model for tabdeck: closable, activatable tabs in a single tab
//! bar, the surface that hosts them, and the bridge that turns tab
//! lifecycle callbacks into application notifications.

pub mod bridge;
pub mod layout;
pub mod panel;
pub mod surface;
pub mod tab;

pub use bridge::{TabEvent, TabInfo, WidgetBridge};
pub use layout::{DockGeometry, DockLayout};
pub use panel::DockPanel;
pub use surface::{Container, ContainerId, DockSurface, Host};
pub use tab::{Tab, TabState};
