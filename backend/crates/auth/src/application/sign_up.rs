//! Sign Up Use Case
//!
//! Validates a new account. Nothing is persisted.

use kernel::error::app_error::AppError;

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, full_name::FullName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user: User,
}

/// Sign up use case
#[derive(Debug, Default, Clone, Copy)]
pub struct SignUpUseCase;

impl SignUpUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let full_name = FullName::new(&input.full_name).map_err(|e| {
            AuthError::InvalidInput(
                AppError::bad_request(e.to_string()).with_action("Please check your full name"),
            )
        })?;

        let email = Email::new(&input.email).map_err(AuthError::InvalidInput)?;

        // Validated then dropped (zeroized)
        RawPassword::new(input.password).map_err(AuthError::InvalidInput)?;

        let user = User::new(full_name, email);

        tracing::info!(
            full_name = %user.full_name,
            email = %user.email,
            "User signed up"
        );

        Ok(SignUpOutput { user })
    }
}
