//! Item repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use realm_core::error::{AppError, ErrorKind};
use realm_core::result::AppResult;
use realm_core::types::{PageRequest, PageResponse};
use realm_entity::item::{CreateItem, Item, UpdateItem};

/// Name of the unique constraint on `(items.owner_id, items.item_code)`.
pub const OWNER_CODE_UNIQUE_CONSTRAINT: &str = "items_owner_code_key";

/// CRUD primitives for items.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Find an item by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>>;

    /// Whether `owner_id` already registered an item with `item_code`.
    async fn exists_by_owner_and_code(&self, owner_id: Uuid, item_code: i32) -> AppResult<bool>;

    /// List all items, newest first.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Item>>;

    /// Insert an item. A code already used by the same owner fails with `Conflict`.
    async fn create(&self, data: &CreateItem) -> AppResult<Item>;

    /// Apply a partial update. Returns `None` if the item no longer exists.
    async fn update(&self, id: Uuid, data: &UpdateItem) -> AppResult<Option<Item>>;
}

/// PostgreSQL-backed [`ItemRepository`].
#[derive(Debug, Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item by id", e))
    }

    async fn exists_by_owner_and_code(&self, owner_id: Uuid, item_code: i32) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM items WHERE owner_id = $1 AND item_code = $2)",
        )
        .bind(owner_id)
        .bind(item_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check item code", e))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Item>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count items", e))?;

        let items = sqlx::query_as::<_, Item>(
            "SELECT * FROM items ORDER BY created_at DESC, id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (owner_id, item_code, name, ability, price) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.item_code)
        .bind(&data.name)
        .bind(&data.ability)
        .bind(data.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(OWNER_CODE_UNIQUE_CONSTRAINT) =>
            {
                AppError::conflict(format!("Item code {} is already registered", data.item_code))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create item", e),
        })
    }

    async fn update(&self, id: Uuid, data: &UpdateItem) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET name = COALESCE($2, name), \
                              ability = COALESCE($3, ability), \
                              price = COALESCE($4, price), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.ability)
        .bind(data.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }
}
