//! Full Name Value Object
//!
//! A person's display name as entered at sign-up.
//!
//! ## Rules
//! - NFKC normalization, then trim
//! - 1 to 100 characters (Unicode code points) after normalization
//! - No control characters
//!
//! Any script is accepted; case is preserved.

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for a full name (in characters)
pub const FULL_NAME_MAX_LENGTH: usize = 100;

/// Error returned when full name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullNameError {
    /// Empty after normalization and trimming
    Empty,

    /// Longer than FULL_NAME_MAX_LENGTH
    TooLong { length: usize, max: usize },

    /// Contains a control character
    InvalidCharacter { position: usize },
}

impl fmt::Display for FullNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Full name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Full name is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { position } => {
                write!(f, "Full name contains a control character at position {position}")
            }
        }
    }
}

impl std::error::Error for FullNameError {}

/// Validated, normalized full name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName(String);

impl FullName {
    /// Normalize (NFKC, trim) and validate raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, FullNameError> {
        let normalized = input.as_ref().nfkc().collect::<String>().trim().to_string();

        if normalized.is_empty() {
            return Err(FullNameError::Empty);
        }

        let length = normalized.chars().count();
        if length > FULL_NAME_MAX_LENGTH {
            return Err(FullNameError::TooLong {
                length,
                max: FULL_NAME_MAX_LENGTH,
            });
        }

        if let Some(position) = normalized.chars().position(char::is_control) {
            return Err(FullNameError::InvalidCharacter { position });
        }

        Ok(Self(normalized))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FullName {
    type Error = FullNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_and_preserves_case() {
        let name = FullName::new("  Ada Lovelace ").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_nfkc() {
        // Fullwidth Latin letters fold to ASCII
        let name = FullName::new("Ａｄａ").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn test_full_name_accepts_any_script() {
        assert!(FullName::new("山田 太郎").is_ok());
        assert!(FullName::new("Zoë O'Brien-Smith").is_ok());
    }

    #[test]
    fn test_full_name_empty() {
        assert_eq!(FullName::new("").unwrap_err(), FullNameError::Empty);
        assert_eq!(FullName::new("   \t ").unwrap_err(), FullNameError::Empty);
    }

    #[test]
    fn test_full_name_length_bounds() {
        assert!(FullName::new("a".repeat(FULL_NAME_MAX_LENGTH)).is_ok());
        assert_eq!(
            FullName::new("a".repeat(FULL_NAME_MAX_LENGTH + 1)).unwrap_err(),
            FullNameError::TooLong {
                length: FULL_NAME_MAX_LENGTH + 1,
                max: FULL_NAME_MAX_LENGTH
            }
        );
    }

    #[test]
    fn test_full_name_control_characters() {
        assert_eq!(
            FullName::new("Ada\u{0000}Lovelace").unwrap_err(),
            FullNameError::InvalidCharacter { position: 3 }
        );
        assert!(FullName::new("Ada\nLovelace").is_err());
    }
}
