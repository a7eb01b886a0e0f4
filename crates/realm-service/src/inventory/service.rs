//! Adding to and listing a character's inventory.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use realm_auth::gate::AuthenticatedIdentity;
use realm_auth::ownership::OwnershipPolicy;
use realm_core::error::AppError;
use realm_database::repositories::{CharacterRepository, InventoryRepository};
use realm_entity::inventory::{CreateInventoryEntry, InventoryEntryView};

/// Manages inventory entries; access follows the holding character's owner.
#[derive(Clone)]
pub struct InventoryService {
    characters: Arc<dyn CharacterRepository>,
    inventory: Arc<dyn InventoryRepository>,
    policy: OwnershipPolicy,
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryService").finish_non_exhaustive()
    }
}

impl InventoryService {
    /// Creates a new inventory service.
    pub fn new(
        characters: Arc<dyn CharacterRepository>,
        inventory: Arc<dyn InventoryRepository>,
        policy: OwnershipPolicy,
    ) -> Self {
        Self {
            characters,
            inventory,
            policy,
        }
    }

    /// Adds an entry to a character owned by `identity`.
    pub async fn add_entry(
        &self,
        identity: &AuthenticatedIdentity,
        character_id: Uuid,
        name: &str,
        attributes: serde_json::Value,
    ) -> Result<InventoryEntryView, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Entry name must not be empty"));
        }
        if !attributes.is_object() {
            return Err(AppError::validation("Entry attributes must be a JSON object"));
        }

        let character = self.characters.find_by_id(character_id).await?;
        self.policy
            .authorize_mutation(identity, character.as_ref())
            .map_err(|d| d.into_app_error("Character"))?;

        let entry = self
            .inventory
            .create(&CreateInventoryEntry {
                character_id,
                owner_id: identity.user_id,
                name: name.to_string(),
                attributes,
            })
            .await?;

        info!(
            user_id = %identity.user_id,
            character_id = %character_id,
            entry_id = %entry.id,
            "Inventory entry added"
        );

        Ok(self.policy.authorize_read(identity, &entry))
    }

    /// Lists a character's entries, each projected for `identity`.
    pub async fn list_entries(
        &self,
        identity: &AuthenticatedIdentity,
        character_id: Uuid,
    ) -> Result<Vec<InventoryEntryView>, AppError> {
        if self.characters.find_by_id(character_id).await?.is_none() {
            return Err(AppError::not_found("Character not found"));
        }

        let entries = self.inventory.find_by_character(character_id).await?;
        Ok(entries
            .iter()
            .map(|e| self.policy.authorize_read(identity, e))
            .collect())
    }
}
