//! Read projection and write authorization.
//!
//! Ownership is the only access-control relation. Every decision is a pure
//! function of the acting identity and a snapshot of the resource loaded by
//! the caller; nothing here touches a store.

use thiserror::Error;
use uuid::Uuid;

use realm_core::error::AppError;
use realm_entity::ownership::{OwnedResource, Visibility};

use crate::gate::AuthenticatedIdentity;

/// Why the policy refused a mutation or creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Denial {
    /// The target resource does not exist.
    #[error("resource not found")]
    NotFound,
    /// The target resource belongs to someone else.
    #[error("resource belongs to another user")]
    Forbidden,
    /// The owner already holds a resource under the same unique key.
    #[error("name already taken")]
    DuplicateName,
}

impl Denial {
    /// Converts into an [`AppError`] naming the resource kind, e.g. `"Character"`.
    pub fn into_app_error(self, resource: &str) -> AppError {
        match self {
            Self::NotFound => AppError::not_found(format!("{resource} not found")),
            Self::Forbidden => AppError::forbidden(format!("{resource} belongs to another user")),
            Self::DuplicateName => AppError::conflict(format!("{resource} already exists")),
        }
    }
}

impl From<Denial> for AppError {
    fn from(denial: Denial) -> Self {
        denial.into_app_error("Resource")
    }
}

/// Decides what an identity may see and change.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipPolicy;

impl OwnershipPolicy {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }

    /// The visibility `identity` has on `resource`.
    pub fn visibility_of<R: OwnedResource>(
        &self,
        identity: &AuthenticatedIdentity,
        resource: &R,
    ) -> Visibility {
        if resource.owner_id() == identity.user_id {
            Visibility::Owner
        } else {
            Visibility::Public
        }
    }

    /// Projects `resource` into the view `identity` is allowed to see.
    ///
    /// Reads are never denied; non-owners get the public projection.
    pub fn authorize_read<R: OwnedResource>(
        &self,
        identity: &AuthenticatedIdentity,
        resource: &R,
    ) -> R::View {
        resource.project(self.visibility_of(identity, resource))
    }

    /// Authorizes creating a resource owned by `identity`.
    ///
    /// `key_taken` reports whether the owner-scoped unique key (a character
    /// name, an item code) is already in use. Returns the owner to record.
    pub fn authorize_create(
        &self,
        identity: &AuthenticatedIdentity,
        key_taken: bool,
    ) -> Result<Uuid, Denial> {
        if key_taken {
            return Err(Denial::DuplicateName);
        }
        Ok(identity.user_id)
    }

    /// Authorizes mutating or deleting `resource`.
    pub fn authorize_mutation<R: OwnedResource>(
        &self,
        identity: &AuthenticatedIdentity,
        resource: Option<&R>,
    ) -> Result<(), Denial> {
        match resource {
            None => Err(Denial::NotFound),
            Some(r) if r.owner_id() != identity.user_id => Err(Denial::Forbidden),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use realm_core::error::ErrorKind;
    use realm_entity::character::Character;
    use realm_entity::inventory::InventoryEntry;

    fn identity() -> AuthenticatedIdentity {
        AuthenticatedIdentity {
            user_id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
        }
    }

    fn character_of(owner: Uuid) -> Character {
        let now = Utc::now();
        Character {
            id: Uuid::new_v4(),
            owner_id: owner,
            name: "Aria".to_string(),
            health: 500,
            power: 100,
            money: 10_000,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_owner_reads_owner_only_fields() {
        let me = identity();
        let view = OwnershipPolicy::new().authorize_read(&me, &character_of(me.user_id));
        assert_eq!(view.money, Some(10_000));
    }

    #[test]
    fn test_stranger_reads_public_projection() {
        let view = OwnershipPolicy::new().authorize_read(&identity(), &character_of(Uuid::new_v4()));
        assert_eq!(view.money, None);
        assert_eq!(view.name, "Aria");
    }

    #[test]
    fn test_inventory_attributes_hidden_from_stranger() {
        let owner = Uuid::new_v4();
        let entry = InventoryEntry {
            id: Uuid::new_v4(),
            character_id: Uuid::new_v4(),
            owner_id: owner,
            name: "Potion".to_string(),
            attributes: serde_json::json!({"heal": 50}),
            created_at: Utc::now(),
        };
        let policy = OwnershipPolicy::new();

        assert!(policy.authorize_read(&identity(), &entry).attributes.is_none());
        let me = AuthenticatedIdentity {
            user_id: owner,
            email: "o@x.com".to_string(),
        };
        assert!(policy.authorize_read(&me, &entry).attributes.is_some());
    }

    #[test]
    fn test_mutation_decisions() {
        let policy = OwnershipPolicy::new();
        let me = identity();
        let mine = character_of(me.user_id);
        let theirs = character_of(Uuid::new_v4());

        assert_eq!(policy.authorize_mutation(&me, Some(&mine)), Ok(()));
        assert_eq!(policy.authorize_mutation(&me, Some(&theirs)), Err(Denial::Forbidden));
        assert_eq!(
            policy.authorize_mutation::<Character>(&me, None),
            Err(Denial::NotFound)
        );
    }

    #[test]
    fn test_create_records_identity_as_owner() {
        let policy = OwnershipPolicy::new();
        let me = identity();
        assert_eq!(policy.authorize_create(&me, false), Ok(me.user_id));
        assert_eq!(policy.authorize_create(&me, true), Err(Denial::DuplicateName));
    }

    #[test]
    fn test_denials_map_to_distinct_kinds() {
        assert_eq!(Denial::NotFound.into_app_error("Item").kind, ErrorKind::NotFound);
        assert_eq!(Denial::Forbidden.into_app_error("Item").kind, ErrorKind::Authorization);
        assert_eq!(Denial::DuplicateName.into_app_error("Item").kind, ErrorKind::Conflict);
        assert_eq!(Denial::NotFound.into_app_error("Item").message, "Item not found");
    }
}
