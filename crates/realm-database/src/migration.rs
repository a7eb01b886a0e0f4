//! Schema migrations for the PostgreSQL backend.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use realm_core::error::{AppError, ErrorKind};

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date. Idempotent.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let known = MIGRATOR.iter().count();
    info!(migrations = known, "Applying schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Schema migration failed: {e}"), e)
    })?;

    info!("Schema is up to date");
    Ok(())
}
