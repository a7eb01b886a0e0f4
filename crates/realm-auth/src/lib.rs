//! # realm-auth
//!
//! Identity and ownership for the Realm game backend.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and registration input rules
//! - `jwt`: signed, time-limited session tokens
//! - `gate`: turns an `Authorization` header into an authenticated identity
//! - `ownership`: read projection and write authorization over owned resources

pub mod gate;
pub mod jwt;
pub mod ownership;
pub mod password;

pub use gate::{AuthFailure, AuthGate, AuthenticatedIdentity};
pub use jwt::{Claims, IssuedToken, TokenCodec, VerificationFailure};
pub use ownership::{Denial, OwnershipPolicy};
pub use password::{CredentialValidator, PasswordHasher};
