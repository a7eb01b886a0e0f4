//! JWT claims carried by a session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity the token was issued to.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the identity from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Whether the token is expired at `now`. A token is valid only while
    /// `exp` is strictly in the future.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: 1_000,
            exp: 2_000,
        };
        let at = |secs| Utc.timestamp_opt(secs, 0).unwrap();

        assert!(!claims.is_expired_at(at(1_999)));
        assert!(claims.is_expired_at(at(2_000)));
        assert!(claims.is_expired_at(at(2_001)));
    }
}
