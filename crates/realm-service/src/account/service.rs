//! Account registration and credential login.

use std::sync::Arc;

use tracing::{debug, info};

use realm_auth::jwt::{IssuedToken, TokenCodec};
use realm_auth::password::{CredentialValidator, PasswordHasher};
use realm_core::error::AppError;
use realm_database::repositories::UserRepository;
use realm_entity::user::{CreateUser, User};

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Handles sign-up and sign-in.
#[derive(Clone)]
pub struct AccountService {
    /// Credential store.
    users: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Email and password rules.
    validator: Arc<CredentialValidator>,
    /// Session token codec.
    codec: Arc<TokenCodec>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<CredentialValidator>,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            codec,
        }
    }

    /// Registers a new identity.
    ///
    /// Fails with `Validation` on bad input and `Conflict` when the email is
    /// already registered, whether caught by the pre-check or by the store's
    /// unique constraint at insert time.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        self.validator.validate(email, password)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Checks a credential and issues a session token.
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller: same error, same message, comparable cost.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            self.hasher.burn_verification(password);
            debug!("Login rejected: unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let issued = self.codec.issue(user.id)?;

        info!(user_id = %user.id, expires_at = %issued.expires_at, "User signed in");

        Ok(issued)
    }

    /// Loads the identity's account record.
    pub async fn profile(&self, user_id: uuid::Uuid) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
