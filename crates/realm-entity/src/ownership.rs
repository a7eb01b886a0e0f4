//! Ownership relation and field-level visibility.

use serde::Serialize;
use uuid::Uuid;

/// How much of a resource the requester may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The requester owns the resource and sees every field.
    Owner,
    /// Anyone else; owner-only fields are left out.
    Public,
}

impl Visibility {
    /// Returns `value` for owners and `None` for everyone else.
    pub fn owner_only<T>(self, value: T) -> Option<T> {
        match self {
            Self::Owner => Some(value),
            Self::Public => None,
        }
    }
}

/// A record that belongs to exactly one identity.
pub trait OwnedResource {
    /// Serializable view returned to callers.
    type View: Serialize;

    /// The owning identity.
    fn owner_id(&self) -> Uuid;

    /// Project the record into the view allowed for `visibility`.
    fn project(&self, visibility: Visibility) -> Self::View;
}
