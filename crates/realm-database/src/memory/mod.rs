//! In-memory repository backend.
//!
//! Used by tests and by `database.backend = "memory"`. Uniqueness and the
//! character foreign key are enforced atomically, mirroring the
//! PostgreSQL constraints.

pub mod store;

pub use store::MemoryStore;
