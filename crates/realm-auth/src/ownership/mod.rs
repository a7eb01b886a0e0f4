//! Ownership-based authorization over owned resources.

pub mod policy;

pub use policy::{Denial, OwnershipPolicy};
