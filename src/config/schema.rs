//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (trace, debug, info, warn, error, fatal, panic).
    pub level: String,

    /// Count emitted records in `log_messages_total`.
    pub metrics: bool,

    /// Route `tracing` events through the logger as well.
    pub capture_tracing: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            metrics: true,
            capture_tracing: true,
        }
    }
}

impl LogConfig {
    /// Default configuration with the given level.
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }
}
