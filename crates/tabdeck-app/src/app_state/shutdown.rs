//! Graceful shutdown: stop delayed actions, then the runtime.

use std::time::Duration;

use tracing::{debug, info};

use super::core::TabdeckApp;

impl TabdeckApp {
    /// Tear down background work. Once this returns no delayed action can
    /// reach the store.
    ///
    /// Order matters:
    /// 1. Cancel every scheduled action
    /// 2. Shut down the tokio runtime
    /// 3. Discard anything that was sent before cancellation took effect
    pub fn shutdown(&mut self) {
        info!("initiating shutdown");

        self.delayed.cancel_all();
        self.pending.clear();

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_millis(500));
        }

        let discarded = self.delayed_rx.try_iter().count();
        if discarded > 0 {
            debug!(discarded, "dropped delayed actions at shutdown");
        }

        self.should_exit = true;
        info!("shutdown complete");
    }
}
