//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying `{sub, iat, exp}`. They are never
//! persisted; expiry is the only way a token stops working.

pub mod claims;
pub mod decoder;
pub mod encoder;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use realm_core::config::AuthConfig;
use realm_core::error::AppError;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    /// Not a well-formed token: bad segments, encoding, algorithm or claims.
    #[error("malformed token")]
    Malformed,
    /// The signature does not match the payload.
    #[error("token signature mismatch")]
    SignatureInvalid,
    /// The token's expiry is not in the future.
    #[error("token expired")]
    Expired,
}

impl From<VerificationFailure> for AppError {
    fn from(_: VerificationFailure) -> Self {
        AppError::unauthorized("Authentication required")
    }
}

/// Issues and verifies session tokens with one secret and lifetime.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        self.encoder.ttl()
    }

    /// Issues a token for `user_id` valid from now for the configured lifetime.
    pub fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token as of `now`.
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        self.encoder.issue_at(user_id, now)
    }

    /// Verifies `token` and returns the identity it was issued to.
    pub fn verify(&self, token: &str) -> Result<Uuid, VerificationFailure> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` as of `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, VerificationFailure> {
        self.decoder.decode_at(token, now).map(|claims| claims.user_id())
    }
}
