//! Bearer authentication for protected routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Runs the authentication gate and stores the identity in request
/// extensions for the `AuthUser` extractor.
///
/// Every credential failure is the same 401; a credential store outage is
/// a 500.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let identity = state.auth_gate.authenticate(header.as_deref()).await?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
