//! User Entity
//!
//! Profile produced by a successful sign-up. Nothing is persisted.

use crate::domain::value_object::{email::Email, full_name::FullName};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub full_name: FullName,
    pub email: Email,
}

impl User {
    pub fn new(full_name: FullName, email: Email) -> Self {
        Self { full_name, email }
    }
}
