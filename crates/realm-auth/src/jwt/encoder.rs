//! Session token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use realm_core::config::AuthConfig;
use realm_core::error::AppError;

use super::claims::Claims;

/// Creates signed, time-limited session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly issued token and its validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The compact JWS string, without any scheme prefix.
    pub token: String,
    /// When the token was issued (second precision).
    pub issued_at: DateTime<Utc>,
    /// When the token stops verifying (second precision).
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::minutes(config.token_ttl_minutes as i64),
        }
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `user_id` as of `now`.
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let iat = now.timestamp();
        let exp = iat + self.ttl.num_seconds();

        let claims = Claims {
            sub: user_id,
            iat,
            exp,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        let issued_at = DateTime::from_timestamp(iat, 0)
            .ok_or_else(|| AppError::internal("Issue time out of range"))?;
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AppError::internal("Expiry time out of range"))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at,
        })
    }
}
