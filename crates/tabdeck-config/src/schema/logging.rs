//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoping this level to tabdeck's own crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "tabdeck=trace",
            LogLevel::Debug => "tabdeck=debug",
            LogLevel::Info => "tabdeck=info",
            LogLevel::Warn => "tabdeck=warn",
            LogLevel::Error => "tabdeck=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log every store action with the state before and after it.
    pub log_actions: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_actions: true,
        }
    }
}
