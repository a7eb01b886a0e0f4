//! Character entities.

pub mod model;
pub mod view;

pub use model::{Character, CreateCharacter};
pub use view::CharacterView;
