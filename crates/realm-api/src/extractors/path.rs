//! Resource id taken from the `{id}` path segment.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use realm_core::error::AppError;

use crate::error::ApiError;

/// The UUID in a route's single path parameter. A malformed id is a
/// `Validation` error with the usual JSON error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub Uuid);

/// Parses a UUID from a path segment.
pub fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        Ok(IdPath(parse_uuid(&raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::error::ErrorKind;

    #[test]
    fn test_parse_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_uuid(&id.to_string()).unwrap(), id);

        let err = parse_uuid("not-a-uuid").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("not-a-uuid"));
    }
}
