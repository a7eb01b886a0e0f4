//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use realm_auth::gate::AuthFailure;
use realm_auth::ownership::Denial;
use realm_core::error::{AppError, ErrorKind};

/// Message sent in place of any server-side failure detail.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// An [`AppError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AuthFailure> for ApiError {
    fn from(failure: AuthFailure) -> Self {
        Self(failure.into())
    }
}

impl From<Denial> for ApiError {
    fn from(denial: Denial) -> Self {
        Self(denial.into())
    }
}

/// HTTP status and error code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = status_for(err.kind);

        let message = if err.kind.is_server_fault() {
            tracing::error!(kind = %err.kind, error = %err.message, source = ?err.source, "Request failed");
            INTERNAL_MESSAGE.to_string()
        } else {
            err.message
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
