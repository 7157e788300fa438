//! Clear Text Password Handling
//!
//! Passwords never leave this type in readable form:
//! - Unicode NFKC normalization before the registration policy is applied
//! - Byte-exact storage for sign-in comparison
//! - Zeroization of the buffer on drop
//! - Redacted `Debug` output
//! - Comparison through SHA-256 digests in constant time
//!
//! Length rules follow NIST SP 800-63B.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{digest_eq, sha256};

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`, so every copy is explicit.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let stored = ClearTextPassword::verbatim("password123");
/// assert!(stored.matches(&ClearTextPassword::verbatim("password123")));
/// assert!(!stored.matches(&ClearTextPassword::verbatim("PASSWORD123")));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new password for registration, enforcing the policy
    ///
    /// - Minimum 8 characters, maximum 128 (Unicode code points)
    /// - Not empty or whitespace only
    /// - No control characters other than space, tab and newline
    pub fn new(raw: impl Into<String>) -> Result<Self, PasswordPolicyError> {
        let password = Self::normalized(raw);
        let normalized = password.0.as_str();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(password)
    }

    /// Keep the input byte for byte, without normalization or policy
    ///
    /// Used for sign-in: a password that would fail the policy must still be
    /// comparable, and only the exact configured string matches.
    pub fn verbatim(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    fn normalized(raw: impl Into<String>) -> Self {
        let mut raw = raw.into();
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    /// Number of Unicode code points
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// SHA-256 digest of the stored text
    pub fn digest(&self) -> [u8; 32] {
        sha256(self.0.as_bytes())
    }

    /// Constant-time equality on SHA-256 digests
    pub fn matches(&self, other: &ClearTextPassword) -> bool {
        digest_eq(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}
