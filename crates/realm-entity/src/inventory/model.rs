//! Inventory entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Something a character is carrying.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The character holding the entry.
    pub character_id: Uuid,
    /// The owning user; matches the character's owner.
    pub owner_id: Uuid,
    /// Entry name.
    pub name: String,
    /// Free-form attributes. Visible to the owner only.
    pub attributes: serde_json::Value,
    /// When the entry was added.
    pub created_at: DateTime<Utc>,
}

/// Data required to add an inventory entry.
#[derive(Debug, Clone)]
pub struct CreateInventoryEntry {
    /// Target character.
    pub character_id: Uuid,
    /// The owning user, always the authenticated caller.
    pub owner_id: Uuid,
    /// Entry name.
    pub name: String,
    /// Attributes.
    pub attributes: serde_json::Value,
}
