//! Logging configuration

use serde::{Deserialize, Serialize};

/// Accepted log levels
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
/// Accepted log formats
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// How the embedding process should log
///
/// The core only emits `tracing` events and never reads this itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format (pretty, compact, json)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Overlay values from a higher-priority source; blank values are ignored
    pub fn apply_overrides(&mut self, level: Option<String>, format: Option<String>) {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level.trim().to_lowercase();
        }
        if let Some(format) = format.filter(|f| !f.trim().is_empty()) {
            self.format = format.trim().to_lowercase();
        }
    }

    /// Filter directive for an env-filter style subscriber
    pub fn directive(&self) -> String {
        self.level.to_lowercase()
    }
}
