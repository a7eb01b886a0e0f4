//! DashMap-backed implementation of every repository trait.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use realm_core::error::AppError;
use realm_core::result::AppResult;
use realm_core::types::{PageRequest, PageResponse};
use realm_entity::character::{Character, CreateCharacter};
use realm_entity::inventory::{CreateInventoryEntry, InventoryEntry};
use realm_entity::item::{CreateItem, Item, UpdateItem};
use realm_entity::user::{CreateUser, User};

use crate::repositories::{CharacterRepository, InventoryRepository, ItemRepository, UserRepository};

/// Process-local store holding users, characters, items and inventory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<Uuid, User>,
    /// email -> user id; doubles as the unique index.
    emails: DashMap<String, Uuid>,
    characters: DashMap<Uuid, Character>,
    /// (owner, name) -> character id.
    character_names: DashMap<(Uuid, String), Uuid>,
    items: DashMap<Uuid, Item>,
    /// (owner, code) -> item id.
    item_codes: DashMap<(Uuid, i32), Uuid>,
    inventory: DashMap<Uuid, InventoryEntry>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first, id as tie-breaker, then slice out the requested page.
fn paginate<T: Clone>(
    mut rows: Vec<T>,
    page: &PageRequest,
    key: impl Fn(&T) -> (chrono::DateTime<Utc>, Uuid),
) -> PageResponse<T> {
    rows.sort_by(|a, b| {
        let (a_time, a_id) = key(a);
        let (b_time, b_id) = key(b);
        b_time.cmp(&a_time).then(a_id.cmp(&b_id))
    });
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
        .take(page.limit() as usize)
        .collect();
    PageResponse::new(items, page.page, page.page_size, total)
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.emails.get(email).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        match self.emails.entry(data.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("Email already in use")),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    email: data.email.clone(),
                    password_hash: data.password_hash.clone(),
                    created_at: Utc::now(),
                };
                self.users.insert(user.id, user.clone());
                slot.insert(user.id);
                debug!(user_id = %user.id, "User stored in memory");
                Ok(user)
            }
        }
    }
}

#[async_trait]
impl CharacterRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Character>> {
        Ok(self.characters.get(&id).map(|c| c.value().clone()))
    }

    async fn exists_by_owner_and_name(&self, owner_id: Uuid, name: &str) -> AppResult<bool> {
        Ok(self
            .character_names
            .contains_key(&(owner_id, name.to_string())))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Character>> {
        let rows = self.characters.iter().map(|c| c.value().clone()).collect();
        Ok(paginate(rows, page, |c| (c.created_at, c.id)))
    }

    async fn create(&self, data: &CreateCharacter) -> AppResult<Character> {
        match self
            .character_names
            .entry((data.owner_id, data.name.clone()))
        {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Character name '{}' is already taken",
                data.name
            ))),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let character = Character {
                    id: Uuid::new_v4(),
                    owner_id: data.owner_id,
                    name: data.name.clone(),
                    health: data.health,
                    power: data.power,
                    money: data.money,
                    created_at: now,
                    updated_at: now,
                };
                self.characters.insert(character.id, character.clone());
                slot.insert(character.id);
                Ok(character)
            }
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let Some((_, character)) = self.characters.remove(&id) else {
            return Ok(false);
        };
        self.character_names
            .remove(&(character.owner_id, character.name));
        self.inventory.retain(|_, entry| entry.character_id != id);
        Ok(true)
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        Ok(self.items.get(&id).map(|i| i.value().clone()))
    }

    async fn exists_by_owner_and_code(&self, owner_id: Uuid, item_code: i32) -> AppResult<bool> {
        Ok(self.item_codes.contains_key(&(owner_id, item_code)))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Item>> {
        let rows = self.items.iter().map(|i| i.value().clone()).collect();
        Ok(paginate(rows, page, |i| (i.created_at, i.id)))
    }

    async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        match self.item_codes.entry((data.owner_id, data.item_code)) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Item code {} is already registered",
                data.item_code
            ))),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let item = Item {
                    id: Uuid::new_v4(),
                    owner_id: data.owner_id,
                    item_code: data.item_code,
                    name: data.name.clone(),
                    ability: data.ability.clone(),
                    price: data.price,
                    created_at: now,
                    updated_at: now,
                };
                self.items.insert(item.id, item.clone());
                slot.insert(item.id);
                Ok(item)
            }
        }
    }

    async fn update(&self, id: Uuid, data: &UpdateItem) -> AppResult<Option<Item>> {
        Ok(self.items.get_mut(&id).map(|mut item| {
            data.apply_to(item.value_mut());
            item.value().clone()
        }))
    }
}

#[async_trait]
impl InventoryRepository for MemoryStore {
    async fn create(&self, data: &CreateInventoryEntry) -> AppResult<InventoryEntry> {
        // Holding the character guard keeps a concurrent delete from
        // orphaning the entry.
        let Some(_character) = self.characters.get(&data.character_id) else {
            return Err(AppError::not_found(format!(
                "Character {} not found",
                data.character_id
            )));
        };
        let entry = InventoryEntry {
            id: Uuid::new_v4(),
            character_id: data.character_id,
            owner_id: data.owner_id,
            name: data.name.clone(),
            attributes: data.attributes.clone(),
            created_at: Utc::now(),
        };
        self.inventory.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_by_character(&self, character_id: Uuid) -> AppResult<Vec<InventoryEntry>> {
        let mut entries: Vec<InventoryEntry> = self
            .inventory
            .iter()
            .filter(|e| e.character_id == character_id)
            .map(|e| e.value().clone())
            .collect();
        entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::error::ErrorKind;

    fn new_user(email: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn test_user_email_is_unique_and_case_sensitive() {
        let store = MemoryStore::new();
        let user = UserRepository::create(&store, &new_user("a@x.com"))
            .await
            .unwrap();

        let dup = UserRepository::create(&store, &new_user("a@x.com")).await;
        assert_eq!(dup.unwrap_err().kind, ErrorKind::Conflict);

        UserRepository::create(&store, &new_user("A@x.com"))
            .await
            .unwrap();

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_character_name_unique_per_owner() {
        let store = MemoryStore::new();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());

        CharacterRepository::create(&store, &CreateCharacter::with_starting_stats(alice, "Aria"))
            .await
            .unwrap();
        let dup = CharacterRepository::create(
            &store,
            &CreateCharacter::with_starting_stats(alice, "Aria"),
        )
        .await;
        assert_eq!(dup.unwrap_err().kind, ErrorKind::Conflict);

        CharacterRepository::create(&store, &CreateCharacter::with_starting_stats(bob, "Aria"))
            .await
            .unwrap();
        assert!(store.exists_by_owner_and_name(alice, "Aria").await.unwrap());
        assert!(!store.exists_by_owner_and_name(alice, "Brin").await.unwrap());
    }

    #[tokio::test]
    async fn test_character_delete_frees_name_and_cascades_inventory() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let character = CharacterRepository::create(
            &store,
            &CreateCharacter::with_starting_stats(owner, "Aria"),
        )
        .await
        .unwrap();
        InventoryRepository::create(
            &store,
            &CreateInventoryEntry {
                character_id: character.id,
                owner_id: owner,
                name: "Potion".to_string(),
                attributes: serde_json::json!({"heal": 50}),
            },
        )
        .await
        .unwrap();

        assert!(CharacterRepository::delete(&store, character.id).await.unwrap());
        assert!(!CharacterRepository::delete(&store, character.id).await.unwrap());
        assert!(store.find_by_character(character.id).await.unwrap().is_empty());
        assert!(!store.exists_by_owner_and_name(owner, "Aria").await.unwrap());
    }

    #[tokio::test]
    async fn test_inventory_requires_existing_character() {
        let store = MemoryStore::new();
        let err = InventoryRepository::create(
            &store,
            &CreateInventoryEntry {
                character_id: Uuid::new_v4(),
                owner_id: Uuid::new_v4(),
                name: "Potion".to_string(),
                attributes: serde_json::json!({}),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_item_update_applies_present_fields() {
        let store = MemoryStore::new();
        let item = ItemRepository::create(
            &store,
            &CreateItem {
                owner_id: Uuid::new_v4(),
                item_code: 7,
                name: "Sword".to_string(),
                ability: serde_json::json!({"power": 5}),
                price: 300,
            },
        )
        .await
        .unwrap();

        let update = UpdateItem {
            price: Some(250),
            ..Default::default()
        };
        let updated = ItemRepository::update(&store, item.id, &update)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, 250);
        assert_eq!(updated.name, "Sword");

        let missing = ItemRepository::update(&store, Uuid::new_v4(), &update)
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_all_paginates() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        for name in ["A", "B", "C"] {
            CharacterRepository::create(&store, &CreateCharacter::with_starting_stats(owner, name))
                .await
                .unwrap();
        }

        let first = CharacterRepository::find_all(&store, &PageRequest::new(1, 2))
            .await
            .unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total_items, 3);
        assert!(first.has_next);

        let second = CharacterRepository::find_all(&store, &PageRequest::new(2, 2))
            .await
            .unwrap();
        assert_eq!(second.items.len(), 1);
        assert!(!second.has_next);
    }
}
