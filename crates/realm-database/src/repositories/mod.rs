//! Repository traits and their PostgreSQL implementations.

pub mod character;
pub mod inventory;
pub mod item;
pub mod user;

use std::sync::Arc;

use tracing::info;

use realm_core::config::{DatabaseBackend, DatabaseConfig};
use realm_core::error::AppError;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;

pub use character::{CharacterRepository, PgCharacterRepository};
pub use inventory::{InventoryRepository, PgInventoryRepository};
pub use item::{ItemRepository, PgItemRepository};
pub use user::{PgUserRepository, UserRepository};

/// Every repository the application needs, behind trait objects.
#[derive(Clone)]
pub struct Repositories {
    /// Credential store.
    pub users: Arc<dyn UserRepository>,
    /// Character repository.
    pub characters: Arc<dyn CharacterRepository>,
    /// Item repository.
    pub items: Arc<dyn ItemRepository>,
    /// Inventory repository.
    pub inventory: Arc<dyn InventoryRepository>,
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}

impl Repositories {
    /// Repositories over a PostgreSQL pool.
    pub fn postgres(pool: &DatabasePool) -> Self {
        let pool = pool.pool().clone();
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            characters: Arc::new(PgCharacterRepository::new(pool.clone())),
            items: Arc::new(PgItemRepository::new(pool.clone())),
            inventory: Arc::new(PgInventoryRepository::new(pool)),
        }
    }

    /// Repositories sharing one in-memory store.
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            characters: store.clone(),
            items: store.clone(),
            inventory: store,
        }
    }

    /// Build repositories for the configured backend, connecting and
    /// migrating when the backend is PostgreSQL.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                run_migrations(pool.pool()).await?;
                Ok(Self::postgres(&pool))
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory store; data will not survive a restart");
                Ok(Self::memory())
            }
        }
    }
}
