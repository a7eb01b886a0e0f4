//! Convenience result type alias for Realm.

use crate::error::AppError;

/// A specialized `Result` type for Realm operations.
pub type AppResult<T> = Result<T, AppError>;
