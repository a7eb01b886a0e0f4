//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use realm_auth::gate::AuthGate;
use realm_auth::jwt::TokenCodec;
use realm_auth::ownership::OwnershipPolicy;
use realm_auth::password::{CredentialValidator, PasswordHasher};
use realm_core::config::AppConfig;
use realm_database::Repositories;
use realm_service::{AccountService, CharacterService, InventoryService, ItemService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Immutable after
/// startup; all fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Bearer credential verification.
    pub auth_gate: Arc<AuthGate>,
    /// Sign-up and sign-in.
    pub account_service: Arc<AccountService>,
    /// Characters.
    pub character_service: Arc<CharacterService>,
    /// Items.
    pub item_service: Arc<ItemService>,
    /// Character inventories.
    pub inventory_service: Arc<InventoryService>,
}

impl AppState {
    /// Wires the auth components and services over `repositories`.
    pub fn new(config: AppConfig, repositories: Repositories) -> Self {
        let codec = Arc::new(TokenCodec::new(&config.auth));
        let policy = OwnershipPolicy::new();

        let auth_gate = Arc::new(AuthGate::new(
            Arc::clone(&codec),
            Arc::clone(&repositories.users),
        ));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&repositories.users),
            Arc::new(PasswordHasher::new()),
            Arc::new(CredentialValidator::new(&config.auth)),
            codec,
        ));
        let character_service = Arc::new(CharacterService::new(
            Arc::clone(&repositories.characters),
            policy,
        ));
        let item_service = Arc::new(ItemService::new(Arc::clone(&repositories.items), policy));
        let inventory_service = Arc::new(InventoryService::new(
            repositories.characters,
            repositories.inventory,
            policy,
        ));

        Self {
            config: Arc::new(config),
            auth_gate,
            account_service,
            character_service,
            item_service,
            inventory_service,
        }
    }
}
