//! Item handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use realm_core::types::PageResponse;
use realm_entity::item::ItemView;

use crate::dto::request::{CreateItemRequest, UpdateItemRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ItemView>>), ApiError> {
    let item = state
        .item_service
        .create(auth.identity(), req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// GET /api/items
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ItemView>>>, ApiError> {
    let page = state
        .item_service
        .list(auth.identity(), params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<ItemView>>, ApiError> {
    let item = state.item_service.get(auth.identity(), id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// PUT /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateItemRequest>,
) -> Result<Json<ApiResponse<ItemView>>, ApiError> {
    let item = state
        .item_service
        .update(auth.identity(), id, req.into())
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}
