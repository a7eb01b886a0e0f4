//! JSON body extractor that runs `validator` rules before the handler.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use realm_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that deserialized and passed its validation rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(errors.to_string()))?;

        Ok(ValidatedJson(value))
    }
}
