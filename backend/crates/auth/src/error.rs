//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Detail returned for every failed login
pub const LOGIN_FAILED_DETAIL: &str = "Login failed: email or password is incorrect";

/// Detail returned in place of internal error messages
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email, wrong password, or malformed email at login
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A sign-up field failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(AppError),

    /// Request body could not be read as the expected JSON
    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[from] JsonRejection),

    /// Account configuration is unusable
    #[error("Invalid auth configuration: {0}")]
    InvalidConfig(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::InvalidInput(err) => err.kind(),
            AuthError::InvalidPayload(rejection) => {
                ErrorKind::from_status_code(rejection.status().as_u16())
                    .unwrap_or(ErrorKind::BadRequest)
            }
            AuthError::InvalidConfig(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) | AuthError::InvalidConfig(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::unauthorized(LOGIN_FAILED_DETAIL),
            AuthError::InvalidInput(inner) => inner,
            AuthError::InvalidPayload(rejection) => rejection.into(),
            err @ (AuthError::InvalidConfig(_) | AuthError::Internal(_)) => {
                AppError::internal(INTERNAL_ERROR_DETAIL).with_source(err)
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
