//! Read a config from an explicit path or the platform default, and
//! seed the default location on first run.

use std::path::{Path, PathBuf};

use tabdeck_common::ConfigError;
use tracing::{info, warn};

use crate::schema::TabdeckConfig;
use crate::validation;

use super::template::default_config_toml;

/// Load config from a specific TOML file.
///
/// Missing fields take their defaults. A config that parses but fails
/// validation is logged and replaced by the defaults.
pub fn load_from_path(path: &Path) -> Result<TabdeckConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TabdeckConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{e}; falling back to default config");
        return Ok(TabdeckConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `<config dir>/tabdeck/config.toml`, writing a
/// commented default file there first if none exists.
pub fn load_default() -> Result<TabdeckConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(&path) {
                // A read-only config dir should not stop the app.
                warn!("{e}");
            }
            Ok(TabdeckConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// `<config dir>/tabdeck/config.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("tabdeck").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented default config to `path`, creating its parent
/// directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", path.display()))
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_err("create directory for", e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| write_err("write", e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
