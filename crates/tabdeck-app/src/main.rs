mod app_state;
mod cli;
mod console;
mod widgets;

use std::io::{self, BufReader};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use tabdeck_config::TabdeckConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- tabdeck crashed ---");
        default_hook(info);
    }));
}

/// Env filter from `RUST_LOG` plus one directive; a bad directive falls
/// back to `info`.
fn log_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("invalid log level '{directive}': {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Loaded before logging so the configured level can apply. The
    // outcome is logged once the subscriber is up.
    let loaded = tabdeck_config::load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| level.directive().to_string());
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(&directive))
        .init();

    tracing::info!("tabdeck v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TabdeckConfig::default()
    });
    tracing::info!(
        widgets = config.widgets.initial.len(),
        width = config.layout.width,
        height = config.layout.height,
        "config loaded"
    );

    let lines = match &args.script {
        Some(path) => std::fs::File::open(path)
            .and_then(|file| console::spawn_line_reader(BufReader::new(file))),
        None => console::spawn_line_reader(BufReader::new(io::stdin())),
    };
    let lines = match lines {
        Ok(lines) => lines,
        Err(e) => {
            tracing::error!("failed to open input: {e}");
            std::process::exit(1);
        }
    };

    let mut app = match app_state::TabdeckApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("failed to start: {e}");
            std::process::exit(1);
        }
    };
    app.set_echo(args.script.is_some());
    app.use_configured_host();

    let mut stdout = io::stdout().lock();
    if let Err(e) = app.run(lines, &mut stdout) {
        tracing::error!("event loop error: {e}");
    }
    app.shutdown();
    tracing::info!(
        count = app.store().count(),
        tabs = app.surface().tab_count(),
        "final state"
    );
}
