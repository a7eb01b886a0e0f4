//! Character inventory use cases.

pub mod service;

pub use service::InventoryService;
