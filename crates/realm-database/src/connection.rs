//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use realm_core::config::DatabaseConfig;
use realm_core::error::{AppError, ErrorKind};

/// Wrapper around the sqlx PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool using the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %redact_url(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database at {}", redact_url(&config.url)),
                    e,
                )
            })?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Replace the password in a connection URL with `****` for logging.
fn redact_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|p| p + 3) else {
        return url.to_string();
    };
    let Some(at) = url[scheme_end..].find('@').map(|p| p + scheme_end) else {
        return url.to_string();
    };
    match url[scheme_end..at].find(':') {
        Some(colon) => format!("{}:****{}", &url[..scheme_end + colon], &url[at..]),
        None => url.to_string(),
    }
}
