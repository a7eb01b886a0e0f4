//! # realm-entity
//!
//! Domain entity models for the Realm game backend. Every struct in this
//! crate represents a database table row or a value object derived from
//! one. Database entities derive `sqlx::FromRow`.
//!
//! Owned resources implement [`ownership::OwnedResource`], which ties each
//! row to its owning identity and defines the field-visibility projection
//! applied after load.

pub mod character;
pub mod inventory;
pub mod item;
pub mod ownership;
pub mod user;

pub use ownership::{OwnedResource, Visibility};
