//! Character entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Health every new character starts with.
pub const STARTING_HEALTH: i32 = 500;
/// Power every new character starts with.
pub const STARTING_POWER: i32 = 100;
/// Money every new character starts with.
pub const STARTING_MONEY: i64 = 10_000;

/// A playable character owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Character {
    /// Unique character identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// Character name, unique per owner.
    pub name: String,
    /// Current health.
    pub health: i32,
    /// Current power.
    pub power: i32,
    /// Currency balance. Visible to the owner only.
    pub money: i64,
    /// When the character was created.
    pub created_at: DateTime<Utc>,
    /// When the character was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new character.
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    /// The owning user, always the authenticated caller.
    pub owner_id: Uuid,
    /// Character name.
    pub name: String,
    /// Initial health.
    pub health: i32,
    /// Initial power.
    pub power: i32,
    /// Initial money.
    pub money: i64,
}

impl CreateCharacter {
    /// Builds a new character with the standard starting stats.
    pub fn with_starting_stats(owner_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            owner_id,
            name: name.into(),
            health: STARTING_HEALTH,
            power: STARTING_POWER,
            money: STARTING_MONEY,
        }
    }
}
