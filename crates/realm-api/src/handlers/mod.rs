//! HTTP request handlers, one module per resource.

pub mod characters;
pub mod health;
pub mod inventory;
pub mod items;
pub mod users;
