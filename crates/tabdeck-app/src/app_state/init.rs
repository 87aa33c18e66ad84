//! One-time attachment of the dock to its host, and resize handling.

use tracing::debug;

use tabdeck_config::LayoutConfig;
use tabdeck_dock::{DockLayout, Host};

use super::core::TabdeckApp;
use super::types::HOST_ID;

/// Dock layout parameters from the `[layout]` config section.
pub(super) fn dock_layout(config: &LayoutConfig) -> DockLayout {
    DockLayout {
        tab_bar_height: config.tab_bar_height as f64,
        tab_width: config.tab_width as f64,
        ..DockLayout::default()
    }
}

impl TabdeckApp {
    /// Attach the dock to the host on the first call that has one.
    ///
    /// Returns whether the dock is attached. Without a host nothing happens
    /// and the next composition pass tries again.
    pub(super) fn ensure_attached(&mut self) -> bool {
        if self.attached {
            return true;
        }
        let Some(host) = self.host.clone() else {
            debug!("no host yet, deferring attachment");
            return false;
        };
        self.surface.attach(host);
        self.attached = true;
        self.register_resize_handler();
        true
    }

    /// The flag is the registration: `handle_resize` forwards to the dock
    /// only once it is set.
    fn register_resize_handler(&mut self) {
        if self.resize_registered {
            return;
        }
        self.resize_registered = true;
        debug!("resize handler registered");
    }

    /// Provide (or replace, before attachment) the window area to attach to.
    pub fn set_host(&mut self, host: Host) {
        if self.attached {
            debug!(host = %host.id, "dock already attached, host ignored");
            return;
        }
        self.host = Some(host);
    }

    /// Use the main window area at the configured size as the host.
    pub fn use_configured_host(&mut self) {
        let layout = &self.config.layout;
        let host = Host::new(HOST_ID, layout.width, layout.height);
        self.set_host(host);
    }

    /// The window changed size. Once the resize handler is registered the
    /// dock recomputes its layout.
    pub(super) fn handle_resize(&mut self, width: u32, height: u32) {
        if let Some(host) = self.host.as_mut() {
            host.width = width;
            host.height = height;
        }
        if self.resize_registered {
            self.surface.resize(width, height);
        }
        self.needs_redraw = true;
    }
}
