//! Field-filtered inventory entry view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::InventoryEntry;
use crate::ownership::{OwnedResource, Visibility};

/// Inventory entry as returned to a requester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntryView {
    /// Entry ID.
    pub id: Uuid,
    /// Holding character ID.
    pub character_id: Uuid,
    /// Owning user ID.
    pub owner_id: Uuid,
    /// Entry name.
    pub name: String,
    /// Attributes, present for the owner only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for InventoryEntry {
    type View = InventoryEntryView;

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    fn project(&self, visibility: Visibility) -> InventoryEntryView {
        InventoryEntryView {
            id: self.id,
            character_id: self.character_id,
            owner_id: self.owner_id,
            name: self.name.clone(),
            attributes: visibility.owner_only(self.attributes.clone()),
            created_at: self.created_at,
        }
    }
}
