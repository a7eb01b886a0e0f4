//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `REALM__`-prefixed environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseBackend, DatabaseConfig};
pub use self::logging::{LogFormat, LoggingConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, then `config/{env}`, then environment
    /// variables prefixed with `REALM__` (e.g. `REALM__AUTH__JWT_SECRET`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("REALM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
