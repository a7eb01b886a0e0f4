//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A game item registered by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// Numeric item code, unique per owner and immutable.
    pub item_code: i32,
    /// Display name.
    pub name: String,
    /// Stat bonuses, e.g. `{"health": 20, "power": 2}`.
    pub ability: serde_json::Value,
    /// Price in game currency.
    pub price: i64,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new item.
#[derive(Debug, Clone)]
pub struct CreateItem {
    /// The owning user, always the authenticated caller.
    pub owner_id: Uuid,
    /// Item code.
    pub item_code: i32,
    /// Display name.
    pub name: String,
    /// Stat bonuses.
    pub ability: serde_json::Value,
    /// Price.
    pub price: i64,
}

/// Partial update of an item's mutable fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateItem {
    /// New name.
    pub name: Option<String>,
    /// New stat bonuses.
    pub ability: Option<serde_json::Value>,
    /// New price.
    pub price: Option<i64>,
}

impl UpdateItem {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ability.is_none() && self.price.is_none()
    }

    /// Apply the present fields to `item` and bump `updated_at`.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(ability) = &self.ability {
            item.ability = ability.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        item.updated_at = Utc::now();
    }
}
