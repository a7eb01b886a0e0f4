//! `AuthUser` extractor: the identity the request acts as.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use realm_auth::gate::AuthenticatedIdentity;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedIdentity);

impl AuthUser {
    /// Returns the inner identity.
    pub fn identity(&self) -> &AuthenticatedIdentity {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = AuthenticatedIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by `require_auth` on protected routes.
        if let Some(identity) = parts.extensions.get::<AuthenticatedIdentity>() {
            return Ok(AuthUser(identity.clone()));
        }

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let identity = state.auth_gate.authenticate(header.as_deref()).await?;
        parts.extensions.insert(identity.clone());

        Ok(AuthUser(identity))
    }
}
