//! Credential Entity
//!
//! Sign-in data for one account. Kept apart from `User` so the password
//! digest never travels with profile data.
//!
//! The login email is matched exactly as configured, so it is kept as a
//! plain string rather than a normalized `Email`.

use crate::domain::value_object::user_password::{RawPassword, UserPassword};

/// Account credential
#[derive(Debug, Clone)]
pub struct Credential {
    pub login: String,
    pub password: UserPassword,
}

impl Credential {
    pub fn new(login: impl Into<String>, password: &RawPassword) -> Self {
        Self {
            login: login.into(),
            password: UserPassword::from_raw(password),
        }
    }

    /// Check a sign-in attempt against this credential
    pub fn verify(&self, password: &RawPassword) -> bool {
        self.password.verify(password)
    }
}
