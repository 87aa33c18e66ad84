use std::path::PathBuf;

use crate::id::WidgetId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error("a live tab already exists for widget {0}")]
    DuplicateTab(WidgetId),
}

#[derive(Debug, thiserror::Error)]
pub enum TabdeckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dock(#[from] DockError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    Other(String),
}
