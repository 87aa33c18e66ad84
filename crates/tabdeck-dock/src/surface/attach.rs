//! Host attachment and layout passes.

use tracing::{debug, info};

use super::{DockSurface, Host};

impl DockSurface {
    /// Attach to `host`. Only the first call has any effect; returns
    /// whether this call attached.
    pub fn attach(&mut self, host: Host) -> bool {
        if let Some(existing) = &self.host {
            debug!(host = %existing.id, "dock surface already attached");
            return false;
        }
        info!(host = %host.id, width = host.width, height = host.height, "dock surface attached");
        self.host = Some(host);
        self.update();
        true
    }

    /// Follow a host resize and recompute layout. Ignored while detached.
    pub fn resize(&mut self, width: u32, height: u32) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        host.width = width;
        host.height = height;
        debug!(width, height, "dock surface resized");
        self.update();
    }

    /// Recompute header placement and container rects.
    pub fn update(&mut self) {
        let Some(bounds) = self.host.as_ref().map(Host::bounds) else {
            return;
        };
        let closable: Vec<bool> = self.tabs().map(|t| t.closable()).collect();
        self.geometry = self.layout.compute(bounds, &closable);
        self.layout_passes += 1;

        let current = self.panel.current().cloned();
        let content = self.geometry.content;
        for container in self.containers.values_mut() {
            container.rect = content;
            container.visible = current.as_ref() == Some(&container.widget);
        }
    }
}
