//! Character use cases.

pub mod service;

pub use service::CharacterService;
