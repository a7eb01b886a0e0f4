//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Output encoding for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

/// Tracing subscriber settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `"info"` or `"realm_api=debug,info"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Record encoding.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
