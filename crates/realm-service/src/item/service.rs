//! Item registration, listing, detail and update.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use realm_auth::gate::AuthenticatedIdentity;
use realm_auth::ownership::OwnershipPolicy;
use realm_core::error::AppError;
use realm_core::types::{PageRequest, PageResponse};
use realm_database::repositories::ItemRepository;
use realm_entity::item::{CreateItem, ItemView, UpdateItem};

/// Data for registering a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Item code, unique per owner.
    pub item_code: i32,
    /// Display name.
    pub name: String,
    /// Stat bonuses; must be a JSON object.
    #[serde(default = "empty_object")]
    pub ability: serde_json::Value,
    /// Price, non-negative.
    pub price: i64,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

fn check_ability(ability: &serde_json::Value) -> Result<(), AppError> {
    if ability.is_object() {
        Ok(())
    } else {
        Err(AppError::validation("Item ability must be a JSON object"))
    }
}

fn check_price(price: i64) -> Result<(), AppError> {
    if price < 0 {
        return Err(AppError::validation("Item price must not be negative"));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Item name must not be empty"));
    }
    Ok(())
}

/// Manages items on behalf of an authenticated identity.
#[derive(Clone)]
pub struct ItemService {
    /// Item repository.
    items: Arc<dyn ItemRepository>,
    /// Ownership policy.
    policy: OwnershipPolicy,
}

impl std::fmt::Debug for ItemService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemService").finish_non_exhaustive()
    }
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(items: Arc<dyn ItemRepository>, policy: OwnershipPolicy) -> Self {
        Self { items, policy }
    }

    /// Registers an item owned by `identity`.
    pub async fn create(
        &self,
        identity: &AuthenticatedIdentity,
        req: CreateItemRequest,
    ) -> Result<ItemView, AppError> {
        check_name(&req.name)?;
        check_ability(&req.ability)?;
        check_price(req.price)?;

        let taken = self
            .items
            .exists_by_owner_and_code(identity.user_id, req.item_code)
            .await?;
        let owner_id = self
            .policy
            .authorize_create(identity, taken)
            .map_err(|_| {
                AppError::conflict(format!("Item code {} is already registered", req.item_code))
            })?;

        let item = self
            .items
            .create(&CreateItem {
                owner_id,
                item_code: req.item_code,
                name: req.name.trim().to_string(),
                ability: req.ability,
                price: req.price,
            })
            .await?;

        info!(
            user_id = %identity.user_id,
            item_id = %item.id,
            item_code = item.item_code,
            "Item created"
        );

        Ok(self.policy.authorize_read(identity, &item))
    }

    /// Lists every item.
    pub async fn list(
        &self,
        identity: &AuthenticatedIdentity,
        page: PageRequest,
    ) -> Result<PageResponse<ItemView>, AppError> {
        let items = self.items.find_all(&page).await?;
        Ok(items.map(|i| self.policy.authorize_read(identity, &i)))
    }

    /// Gets one item.
    pub async fn get(
        &self,
        identity: &AuthenticatedIdentity,
        item_id: Uuid,
    ) -> Result<ItemView, AppError> {
        let item = self
            .items
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))?;

        Ok(self.policy.authorize_read(identity, &item))
    }

    /// Updates the mutable fields of an item owned by `identity`.
    ///
    /// The item code cannot change.
    pub async fn update(
        &self,
        identity: &AuthenticatedIdentity,
        item_id: Uuid,
        mut changes: UpdateItem,
    ) -> Result<ItemView, AppError> {
        changes.name = changes.name.map(|name| name.trim().to_string());
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }
        if let Some(name) = &changes.name {
            check_name(name)?;
        }
        if let Some(ability) = &changes.ability {
            check_ability(ability)?;
        }
        if let Some(price) = changes.price {
            check_price(price)?;
        }

        let item = self.items.find_by_id(item_id).await?;
        self.policy
            .authorize_mutation(identity, item.as_ref())
            .map_err(|d| d.into_app_error("Item"))?;

        let updated = self
            .items
            .update(item_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))?;

        info!(user_id = %identity.user_id, item_id = %item_id, "Item updated");

        Ok(self.policy.authorize_read(identity, &updated))
    }
}
