//! Account handlers: sign-up, sign-in, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use realm_auth::gate::BEARER_PREFIX;

use crate::dto::request::{SignInRequest, SignUpRequest};
use crate::dto::response::{ApiResponse, SignInResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/users/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let user = state
        .account_service
        .register(&req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// POST /api/users/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignInRequest>,
) -> Result<Json<ApiResponse<SignInResponse>>, ApiError> {
    let issued = state
        .account_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(SignInResponse {
        token: format!("{BEARER_PREFIX}{}", issued.token),
        expires_at: issued.expires_at,
    })))
}

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.profile(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
