//! Credential store: user lookups and creation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use realm_core::error::{AppError, ErrorKind};
use realm_core::result::AppResult;
use realm_entity::user::{CreateUser, User};

/// Name of the unique constraint on `users.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Persists user identity records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact (case-sensitive) email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user. A taken email fails with a `Conflict` error.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// PostgreSQL-backed [`UserRepository`].
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
            {
                AppError::conflict("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }
}
