//! Item entities.

pub mod model;
pub mod view;

pub use model::{CreateItem, Item, UpdateItem};
pub use view::ItemView;
