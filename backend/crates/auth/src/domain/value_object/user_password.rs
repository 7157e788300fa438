//! User Password Value Object
//!
//! Domain wrappers around `platform::password`:
//! - `RawPassword`: user input, zeroized on drop, never printed
//! - `UserPassword`: the SHA-256 digest kept for the configured account
//!
//! Registration passwords are NFKC-normalized before the policy runs.
//! Sign-in passwords are compared byte for byte.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let stored = UserPassword::from_raw(&RawPassword::for_sign_in("password123"));
//! assert!(stored.verify(&RawPassword::for_sign_in("password123")));
//! assert!(!stored.verify(&RawPassword::for_sign_in("password124")));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::crypto::constant_time_eq;
use platform::password::{ClearTextPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password for registration
    ///
    /// ## Validation Rules (NIST SP 800-63B)
    /// - Minimum 8 characters
    /// - Maximum 128 characters
    /// - Not empty or whitespace only
    /// - No control characters
    /// - Unicode NFKC normalized
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, actual } => AppError::bad_request(format!(
                "Password must be at least {} characters (got {})",
                min, actual
            ))
            .with_action("Please choose a longer password"),

            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            ))
            .with_action("Please choose a shorter password"),

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
                    .with_action("Please remove any special control characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Wrap a sign-in attempt as typed, without normalization or policy
    pub fn for_sign_in(raw: impl Into<String>) -> Self {
        Self(ClearTextPassword::verbatim(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (stored digest)
// ============================================================================

/// SHA-256 digest of a password
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword([u8; 32]);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword) -> Self {
        Self(raw.inner().digest())
    }

    /// Verify a raw password against this digest in constant time
    pub fn verify(&self, raw: &RawPassword) -> bool {
        constant_time_eq(&self.0, &raw.inner().digest())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("digest", &"[DIGEST]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("ValidPass123!").is_ok());
        assert!(RawPassword::new("password123").is_ok());

        let short_pass = "a".repeat(MIN_PASSWORD_LENGTH - 1);
        let err = RawPassword::new(short_pass).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.action(), Some("Please choose a longer password"));

        let long_pass = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(RawPassword::new(long_pass).is_err());

        assert!(RawPassword::new("").is_err());
        assert!(RawPassword::new("pass\u{0001}word").is_err());
    }

    #[test]
    fn test_verify() {
        let stored = UserPassword::from_raw(&RawPassword::new("TestPassword123!").unwrap());

        assert!(stored.verify(&RawPassword::for_sign_in("TestPassword123!")));
        assert!(!stored.verify(&RawPassword::for_sign_in("WrongPassword123!")));
        // Sign-in attempts skip the policy but still compare
        assert!(!stored.verify(&RawPassword::for_sign_in("")));
    }

    #[test]
    fn test_sign_in_rejects_width_variants() {
        let stored = UserPassword::from_raw(&RawPassword::for_sign_in("password123"));
        assert!(!stored.verify(&RawPassword::for_sign_in("password１２３")));
        assert!(!stored.verify(&RawPassword::for_sign_in("ｐａｓｓｗｏｒｄ123")));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!").unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let stored = UserPassword::from_raw(&raw);
        let debug = format!("{:?}", stored);
        assert!(debug.contains("DIGEST"));
    }
}
