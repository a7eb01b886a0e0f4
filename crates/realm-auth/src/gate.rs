//! Request authentication.
//!
//! Every protected request runs through [`AuthGate::authenticate`] before
//! any handler logic. The token is re-verified and the identity re-resolved
//! against the credential store on every call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use realm_core::error::AppError;
use realm_database::repositories::UserRepository;

use crate::jwt::{TokenCodec, VerificationFailure};

/// Scheme prefix expected in the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// The identity a request acts as, resolved for the lifetime of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    /// The user's ID.
    pub user_id: Uuid,
    /// The user's email.
    pub email: String,
}

/// Why a request could not be authenticated.
#[derive(Debug, Error)]
pub enum AuthFailure {
    /// No header, wrong scheme or an empty token.
    #[error("missing bearer credential")]
    MissingCredential,
    /// The token failed verification.
    #[error("invalid credential: {0}")]
    InvalidCredential(#[from] VerificationFailure),
    /// The token is genuine but its identity no longer exists.
    #[error("token subject does not exist")]
    UnknownIdentity,
    /// The credential store could not be queried.
    #[error("credential store failure: {0}")]
    Store(AppError),
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::Store(err) => err,
            _ => AppError::unauthorized("Authentication required"),
        }
    }
}

/// Verifies bearer credentials and resolves them to an identity.
#[derive(Clone)]
pub struct AuthGate {
    codec: Arc<TokenCodec>,
    users: Arc<dyn UserRepository>,
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl AuthGate {
    /// Creates a gate over a token codec and the credential store.
    pub fn new(codec: Arc<TokenCodec>, users: Arc<dyn UserRepository>) -> Self {
        Self { codec, users }
    }

    /// Authenticates the raw `Authorization` header value, if any.
    pub async fn authenticate(
        &self,
        header: Option<&str>,
    ) -> Result<AuthenticatedIdentity, AuthFailure> {
        let token = header
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthFailure::MissingCredential)?;

        let user_id = self.codec.verify(token).inspect_err(|kind| {
            debug!(reason = %kind, "Bearer token rejected");
        })?;

        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(AuthFailure::Store)?
            .ok_or_else(|| {
                debug!(user_id = %user_id, "Token subject no longer exists");
                AuthFailure::UnknownIdentity
            })?;

        Ok(AuthenticatedIdentity {
            user_id: user.id,
            email: user.email,
        })
    }
}
