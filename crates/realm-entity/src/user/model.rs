//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account capable of authenticating.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique email address, compared case-sensitively.
    pub email: String,
    /// Argon2 password hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
