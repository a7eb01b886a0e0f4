//! # realm-core
//!
//! Core crate for the Realm game backend. Contains configuration schemas,
//! pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Realm crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
