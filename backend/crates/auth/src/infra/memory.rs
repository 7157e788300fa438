//! In-Memory Repository Implementation
//!
//! Credentials are fixed at startup; nothing is written at runtime.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Read-only credential store
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    credentials: Arc<Vec<Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }

    /// Build a store holding the configured account
    ///
    /// The email must be well formed but is stored exactly as configured.
    pub fn from_config(config: &AuthConfig) -> AuthResult<Self> {
        Email::new(&config.account_email)
            .map_err(|e| AuthError::InvalidConfig(format!("account email: {}", e.message())))?;
        let password = RawPassword::for_sign_in(config.account_password.as_str());

        Ok(Self::new(vec![Credential::new(
            config.account_email.as_str(),
            &password,
        )]))
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl CredentialRepository for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Credential>> {
        Ok(self
            .credentials
            .iter()
            .find(|c| c.login == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_config_registers_account() {
        let store = InMemoryCredentialStore::from_config(&AuthConfig::default()).unwrap();
        assert_eq!(store.len(), 1);

        let credential = store
            .find_by_email("example@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(credential.verify(&RawPassword::for_sign_in("password123")));
    }

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let store = InMemoryCredentialStore::from_config(&AuthConfig::default()).unwrap();
        for email in ["someone@example.com", "Example@Example.com", " example@example.com"] {
            assert!(
                store.find_by_email(email).await.unwrap().is_none(),
                "{email:?} should not match"
            );
        }
    }

    #[test]
    fn test_from_config_rejects_malformed_email() {
        let config = AuthConfig {
            account_email: "not-an-email".to_string(),
            account_password: "password123".to_string(),
        };
        assert!(matches!(
            InMemoryCredentialStore::from_config(&config),
            Err(AuthError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryCredentialStore::default();
        assert!(store.is_empty());
        assert!(
            store
                .find_by_email("example@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
