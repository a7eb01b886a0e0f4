//! Field-filtered character view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Character;
use crate::ownership::{OwnedResource, Visibility};

/// Character as returned to a requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterView {
    /// Character ID.
    pub id: Uuid,
    /// Owning user ID.
    pub owner_id: Uuid,
    /// Character name.
    pub name: String,
    /// Current health.
    pub health: i32,
    /// Current power.
    pub power: i32,
    /// Currency balance, present for the owner only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<i64>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl OwnedResource for Character {
    type View = CharacterView;

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    fn project(&self, visibility: Visibility) -> CharacterView {
        CharacterView {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name.clone(),
            health: self.health,
            power: self.power,
            money: visibility.owner_only(self.money),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
