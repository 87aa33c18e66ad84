//! TabdeckApp struct definition and constructor.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use tokio::runtime::Runtime;

use tabdeck_common::{StoreAction, WidgetId};
use tabdeck_config::TabdeckConfig;
use tabdeck_dock::{DockSurface, Host, TabEvent, WidgetBridge};
use tabdeck_store::{DelayedDispatcher, ScheduledTask, Store};

use super::init::dock_layout;
use super::types::Mount;

/// Top-level application state.
pub struct TabdeckApp {
    pub(super) config: TabdeckConfig,
    pub(super) store: Store,

    // Dock
    pub(super) surface: DockSurface,
    pub(super) bridge: WidgetBridge,
    pub(super) lifecycle_rx: mpsc::Receiver<TabEvent>,
    /// Window area to attach to. `None` defers attachment.
    pub(super) host: Option<Host>,
    pub(super) attached: bool,
    pub(super) resize_registered: bool,

    // Composition root
    /// Widget ids that already have a tab. Never gets a second one.
    pub(super) rendered: HashSet<WidgetId>,
    pub(super) mounts: HashMap<WidgetId, Mount>,
    /// Registry revision the last composition pass saw.
    pub(super) synced_revision: Option<u64>,

    // Delayed actions
    pub(super) tokio_runtime: Option<Runtime>,
    pub(super) delayed: DelayedDispatcher,
    pub(super) delayed_rx: mpsc::Receiver<StoreAction>,
    pub(super) pending: Vec<ScheduledTask>,

    // Console output
    pub(super) messages: Vec<String>,
    pub(super) echo_commands: bool,
    pub(super) needs_redraw: bool,
    pub(super) should_exit: bool,
}

impl TabdeckApp {
    pub fn new(config: TabdeckConfig) -> tabdeck_common::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("tabdeck-timer")
            .enable_time()
            .build()?;

        let mut store = Store::with_widgets(&config.widgets.initial);
        store.set_logging(config.logging.log_actions);

        let (bridge, lifecycle_rx) = WidgetBridge::with_channel();
        let (delayed_tx, delayed_rx) = mpsc::channel();
        let delayed = DelayedDispatcher::new(runtime.handle().clone(), delayed_tx);

        Ok(Self {
            surface: DockSurface::new(dock_layout(&config.layout)),
            config,
            store,
            bridge,
            lifecycle_rx,
            host: None,
            attached: false,
            resize_registered: false,
            rendered: HashSet::new(),
            mounts: HashMap::new(),
            synced_revision: None,
            tokio_runtime: Some(runtime),
            delayed,
            delayed_rx,
            pending: Vec::new(),
            messages: Vec::new(),
            echo_commands: false,
            needs_redraw: true,
            should_exit: false,
        })
    }

    /// Echo each input line before its output, for scripted runs.
    pub fn set_echo(&mut self, echo: bool) {
        self.echo_commands = echo;
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn surface(&self) -> &DockSurface {
        &self.surface
    }
}

#[cfg(test)]
pub(super) fn test_app() -> TabdeckApp {
    let mut config = TabdeckConfig::default();
    config.counter.async_delay_ms = 1;
    let mut app = TabdeckApp::new(config).unwrap();
    app.use_configured_host();
    app
}
