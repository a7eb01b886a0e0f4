//! Character repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use realm_core::error::{AppError, ErrorKind};
use realm_core::result::AppResult;
use realm_core::types::{PageRequest, PageResponse};
use realm_entity::character::{Character, CreateCharacter};

/// Name of the unique constraint on `(characters.owner_id, characters.name)`.
pub const OWNER_NAME_UNIQUE_CONSTRAINT: &str = "characters_owner_name_key";

/// CRUD primitives for characters.
#[async_trait]
pub trait CharacterRepository: Send + Sync + 'static {
    /// Find a character by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Character>>;

    /// Whether `owner_id` already has a character called `name`.
    async fn exists_by_owner_and_name(&self, owner_id: Uuid, name: &str) -> AppResult<bool>;

    /// List all characters, newest first.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Character>>;

    /// Insert a character. A name already used by the same owner fails with `Conflict`.
    async fn create(&self, data: &CreateCharacter) -> AppResult<Character>;

    /// Delete a character and its inventory. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// PostgreSQL-backed [`CharacterRepository`].
#[derive(Debug, Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Create a new character repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Character>> {
        sqlx::query_as::<_, Character>("SELECT * FROM characters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find character by id", e)
            })
    }

    async fn exists_by_owner_and_name(&self, owner_id: Uuid, name: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM characters WHERE owner_id = $1 AND name = $2)",
        )
        .bind(owner_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check character name", e)
        })
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Character>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count characters", e)
            })?;

        let characters = sqlx::query_as::<_, Character>(
            "SELECT * FROM characters ORDER BY created_at DESC, id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list characters", e))?;

        Ok(PageResponse::new(
            characters,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn create(&self, data: &CreateCharacter) -> AppResult<Character> {
        sqlx::query_as::<_, Character>(
            "INSERT INTO characters (owner_id, name, health, power, money) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(data.health)
        .bind(data.power)
        .bind(data.money)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(OWNER_NAME_UNIQUE_CONSTRAINT) =>
            {
                AppError::conflict(format!("Character name '{}' is already taken", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create character", e),
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete character", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
