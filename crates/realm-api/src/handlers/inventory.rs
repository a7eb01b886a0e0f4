//! Character inventory handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use realm_entity::inventory::InventoryEntryView;

use crate::dto::request::AddInventoryEntryRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/characters/{id}/inventory
pub async fn add_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(character_id): IdPath,
    ValidatedJson(req): ValidatedJson<AddInventoryEntryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<InventoryEntryView>>), ApiError> {
    let attributes = req
        .attributes
        .unwrap_or_else(|| serde_json::Value::Object(Default::default()));

    let entry = state
        .inventory_service
        .add_entry(auth.identity(), character_id, &req.name, attributes)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(entry))))
}

/// GET /api/characters/{id}/inventory
pub async fn list_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(character_id): IdPath,
) -> Result<Json<ApiResponse<Vec<InventoryEntryView>>>, ApiError> {
    let entries = state
        .inventory_service
        .list_entries(auth.identity(), character_id)
        .await?;

    Ok(Json(ApiResponse::ok(entries)))
}
