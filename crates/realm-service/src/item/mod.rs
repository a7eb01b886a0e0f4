//! Item use cases.

pub mod service;

pub use service::{CreateItemRequest, ItemService};
