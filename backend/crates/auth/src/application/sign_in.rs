//! Sign In Use Case
//!
//! Checks an email/password pair against the credential repository.
//! Both values are compared exactly as submitted: no trimming, case folding
//! or Unicode normalization.

use std::sync::Arc;

use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::user_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub email: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: CredentialRepository,
{
    credential_repo: Arc<R>,
}

impl<R> SignInUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(credential_repo: Arc<R>) -> Self {
        Self { credential_repo }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let SignInInput { email, password } = input;
        let password = RawPassword::for_sign_in(password);

        let credential = self.credential_repo.find_by_email(&email).await?;

        let verified = credential.is_some_and(|c| c.verify(&password));
        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(email = %email, "User signed in");

        Ok(SignInOutput { email })
    }
}
