//! Inventory repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use realm_core::error::{AppError, ErrorKind};
use realm_core::result::AppResult;
use realm_entity::inventory::{CreateInventoryEntry, InventoryEntry};

/// Name of the foreign key from `inventory_entries` to `characters`.
pub const CHARACTER_FOREIGN_KEY: &str = "inventory_entries_character_id_fkey";

/// Primitives for a character's inventory.
#[async_trait]
pub trait InventoryRepository: Send + Sync + 'static {
    /// Insert an entry. Fails with `NotFound` if the character vanished meanwhile.
    async fn create(&self, data: &CreateInventoryEntry) -> AppResult<InventoryEntry>;

    /// All entries held by a character, oldest first.
    async fn find_by_character(&self, character_id: Uuid) -> AppResult<Vec<InventoryEntry>>;
}

/// PostgreSQL-backed [`InventoryRepository`].
#[derive(Debug, Clone)]
pub struct PgInventoryRepository {
    pool: PgPool,
}

impl PgInventoryRepository {
    /// Create a new inventory repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    async fn create(&self, data: &CreateInventoryEntry) -> AppResult<InventoryEntry> {
        sqlx::query_as::<_, InventoryEntry>(
            "INSERT INTO inventory_entries (character_id, owner_id, name, attributes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.character_id)
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.attributes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(CHARACTER_FOREIGN_KEY) =>
            {
                AppError::not_found(format!("Character {} not found", data.character_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create inventory entry", e),
        })
    }

    async fn find_by_character(&self, character_id: Uuid) -> AppResult<Vec<InventoryEntry>> {
        sqlx::query_as::<_, InventoryEntry>(
            "SELECT * FROM inventory_entries WHERE character_id = $1 ORDER BY created_at ASC, id",
        )
        .bind(character_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list inventory entries", e)
        })
    }
}
