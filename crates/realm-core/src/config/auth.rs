//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    6
}
