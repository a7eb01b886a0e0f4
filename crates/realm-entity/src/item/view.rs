//! Item view. Items carry no owner-only fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Item;
use crate::ownership::{OwnedResource, Visibility};

/// Item as returned to a requester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    /// Item ID.
    pub id: Uuid,
    /// Owning user ID.
    pub owner_id: Uuid,
    /// Item code.
    pub item_code: i32,
    /// Display name.
    pub name: String,
    /// Stat bonuses.
    pub ability: serde_json::Value,
    /// Price.
    pub price: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl OwnedResource for Item {
    type View = ItemView;

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    fn project(&self, _visibility: Visibility) -> ItemView {
        ItemView {
            id: self.id,
            owner_id: self.owner_id,
            item_code: self.item_code,
            name: self.name.clone(),
            ability: self.ability.clone(),
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
