//! Inventory entities.

pub mod model;
pub mod view;

pub use model::{CreateInventoryEntry, InventoryEntry};
pub use view::InventoryEntryView;
