//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Default account email
pub const DEFAULT_ACCOUNT_EMAIL: &str = "example@example.com";

/// Default account password
pub const DEFAULT_ACCOUNT_PASSWORD: &str = "password123";

/// Auth application configuration
///
/// Holds the single account accepted by `/user/login`.
#[derive(Clone)]
pub struct AuthConfig {
    pub account_email: String,
    pub account_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            account_email: DEFAULT_ACCOUNT_EMAIL.to_string(),
            account_password: DEFAULT_ACCOUNT_PASSWORD.to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config for a custom account
    ///
    /// The email must be well formed and the password non-empty.
    pub fn new(
        account_email: impl Into<String>,
        account_password: impl Into<String>,
    ) -> AuthResult<Self> {
        let account_email = account_email.into();
        let account_password = account_password.into();

        Email::new(&account_email)
            .map_err(|e| AuthError::InvalidConfig(format!("account email: {}", e.message())))?;

        if account_password.is_empty() {
            return Err(AuthError::InvalidConfig(
                "account password cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            account_email,
            account_password,
        })
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("account_email", &self.account_email)
            .field("account_password", &"[REDACTED]")
            .finish()
    }
}
