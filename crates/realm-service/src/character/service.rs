//! Character creation, listing, detail and deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use realm_auth::gate::AuthenticatedIdentity;
use realm_auth::ownership::OwnershipPolicy;
use realm_core::error::AppError;
use realm_core::types::{PageRequest, PageResponse};
use realm_database::repositories::CharacterRepository;
use realm_entity::character::{CharacterView, CreateCharacter};

/// Maximum character name length in characters.
pub const MAX_NAME_LENGTH: usize = 64;

/// Manages characters on behalf of an authenticated identity.
#[derive(Clone)]
pub struct CharacterService {
    /// Character repository.
    characters: Arc<dyn CharacterRepository>,
    /// Ownership policy.
    policy: OwnershipPolicy,
}

impl std::fmt::Debug for CharacterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterService").finish_non_exhaustive()
    }
}

impl CharacterService {
    /// Creates a new character service.
    pub fn new(characters: Arc<dyn CharacterRepository>, policy: OwnershipPolicy) -> Self {
        Self { characters, policy }
    }

    /// Creates a character owned by `identity` with the starting stats.
    pub async fn create(
        &self,
        identity: &AuthenticatedIdentity,
        name: &str,
    ) -> Result<CharacterView, AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "Character name must be 1 to {MAX_NAME_LENGTH} characters"
            )));
        }

        let taken = self
            .characters
            .exists_by_owner_and_name(identity.user_id, name)
            .await?;
        let owner_id = self
            .policy
            .authorize_create(identity, taken)
            .map_err(|d| d.into_app_error("Character"))?;

        let character = self
            .characters
            .create(&CreateCharacter::with_starting_stats(owner_id, name))
            .await?;

        info!(
            user_id = %identity.user_id,
            character_id = %character.id,
            "Character created"
        );

        Ok(self.policy.authorize_read(identity, &character))
    }

    /// Lists every character, each projected for `identity`.
    pub async fn list(
        &self,
        identity: &AuthenticatedIdentity,
        page: PageRequest,
    ) -> Result<PageResponse<CharacterView>, AppError> {
        let characters = self.characters.find_all(&page).await?;
        Ok(characters.map(|c| self.policy.authorize_read(identity, &c)))
    }

    /// Gets one character projected for `identity`.
    pub async fn get(
        &self,
        identity: &AuthenticatedIdentity,
        character_id: Uuid,
    ) -> Result<CharacterView, AppError> {
        let character = self
            .characters
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::not_found("Character not found"))?;

        Ok(self.policy.authorize_read(identity, &character))
    }

    /// Deletes a character owned by `identity`, along with its inventory.
    pub async fn delete(
        &self,
        identity: &AuthenticatedIdentity,
        character_id: Uuid,
    ) -> Result<(), AppError> {
        let character = self.characters.find_by_id(character_id).await?;
        self.policy
            .authorize_mutation(identity, character.as_ref())
            .map_err(|d| d.into_app_error("Character"))?;

        // A concurrent delete by the same owner may win the race.
        if !self.characters.delete(character_id).await? {
            return Err(AppError::not_found("Character not found"));
        }

        info!(
            user_id = %identity.user_id,
            character_id = %character_id,
            "Character deleted"
        );

        Ok(())
    }
}
