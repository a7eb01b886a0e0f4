//! # realm-database
//!
//! Persistence for Realm. Repository traits are the seam the rest of the
//! workspace programs against; each has a PostgreSQL implementation over a
//! sqlx pool and an in-memory implementation backed by [`MemoryStore`].
//!
//! Unique constraints live in the store. Application-level "is it taken"
//! checks are shortcuts; the insert is the authoritative signal and
//! surfaces as a `Conflict` error.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use repositories::{
    CharacterRepository, InventoryRepository, ItemRepository, Repositories, UserRepository,
};
