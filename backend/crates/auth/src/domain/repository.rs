//! Repository Traits
//!
//! Interfaces for credential lookup. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::credential::Credential;
use crate::error::AuthResult;

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the credential whose login email equals `email` exactly
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Credential>>;
}
