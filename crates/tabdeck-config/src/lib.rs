//! tabdeck configuration.
//!
//! TOML-based configuration with validation. All sections use defaults so
//! partial configs work out of the box.
//!
//! ```rust,no_run
//! use tabdeck_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{} startup widgets", config.widgets.initial.len());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CounterConfig, LayoutConfig, LogLevel, LoggingConfig, TabdeckConfig, WidgetsConfig,
};

use std::path::Path;

use tabdeck_common::ConfigError;

/// Load config from `path` if given, otherwise from the platform default
/// location (created with defaults on first run).
pub fn load_config(path: Option<&Path>) -> Result<TabdeckConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[counter]\nasync_amount = 7\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.counter.async_amount, 7);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::FileNotFound(_))
        ));
    }
}
