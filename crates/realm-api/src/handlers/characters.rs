//! Character handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use realm_core::types::PageResponse;
use realm_entity::character::CharacterView;

use crate::dto::request::CreateCharacterRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/characters
pub async fn create_character(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CharacterView>>), ApiError> {
    let character = state
        .character_service
        .create(auth.identity(), &req.name)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(character))))
}

/// GET /api/characters
pub async fn list_characters(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<CharacterView>>>, ApiError> {
    let page = state
        .character_service
        .list(auth.identity(), params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<CharacterView>>, ApiError> {
    let character = state.character_service.get(auth.identity(), id).await?;
    Ok(Json(ApiResponse::ok(character)))
}

/// DELETE /api/characters/{id}
pub async fn delete_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.character_service.delete(auth.identity(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Character deleted".to_string(),
    })))
}
