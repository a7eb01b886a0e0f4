//! Session token verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use realm_core::config::AuthConfig;

use super::VerificationFailure;
use super::claims::Claims;

/// Validates session tokens against the process-wide secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an injected clock in `decode_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes `token` and checks it is still valid at `now`.
    ///
    /// Checks, in order:
    /// 1. Structure, algorithm and signature
    /// 2. Required claims
    /// 3. Expiration
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, VerificationFailure> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Session token rejected");
                match e.kind() {
                    JwtErrorKind::InvalidSignature => VerificationFailure::SignatureInvalid,
                    _ => VerificationFailure::Malformed,
                }
            })?
            .claims;

        if claims.is_expired_at(now) {
            return Err(VerificationFailure::Expired);
        }

        Ok(claims)
    }
}
