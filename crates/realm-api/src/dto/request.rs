//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use realm_entity::item::UpdateItem;
use realm_service::CreateItemRequest as NewItem;

/// Sign-up request body.
///
/// Only shape is checked here; the account service applies the configured
/// password policy.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Email address.
    #[validate(
        email(message = "Email address is not valid"),
        length(max = 255, message = "Email address is too long")
    )]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create character request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCharacterRequest {
    /// Character name.
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Create item request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// Item code.
    pub item_code: i32,
    /// Display name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Stat bonuses.
    #[serde(default)]
    pub ability: Option<serde_json::Value>,
    /// Price.
    #[validate(range(min = 0))]
    pub price: i64,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            item_code: req.item_code,
            name: req.name,
            ability: req
                .ability
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
            price: req.price,
        }
    }
}

/// Update item request. The item code is immutable and rejected if sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateItemRequest {
    /// New name.
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    /// New stat bonuses.
    pub ability: Option<serde_json::Value>,
    /// New price.
    #[validate(range(min = 0))]
    pub price: Option<i64>,
}

impl From<UpdateItemRequest> for UpdateItem {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: req.name,
            ability: req.ability,
            price: req.price,
        }
    }
}

/// Add inventory entry request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddInventoryEntryRequest {
    /// Entry name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Free-form attributes.
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
}
