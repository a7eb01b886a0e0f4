//! # realm-service
//!
//! Business logic service layer for Realm. Each service orchestrates
//! repositories and the ownership policy to implement one family of use
//! cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. Every protected operation
//! takes the [`AuthenticatedIdentity`](realm_auth::AuthenticatedIdentity)
//! resolved by the gate and never trusts an owner id from input.

pub mod account;
pub mod character;
pub mod inventory;
pub mod item;

pub use account::AccountService;
pub use character::CharacterService;
pub use inventory::InventoryService;
pub use item::{CreateItemRequest, ItemService};
