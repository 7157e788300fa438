//! Lotto Error Types
//!
//! Grading itself cannot fail; these variants cover what happens around it
//! (malformed payloads, invalid configuration) and integrate with the
//! unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Detail returned in place of internal error messages
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Lotto-specific result type alias
pub type LottoResult<T> = Result<T, LottoError>;

/// Lotto-specific error variants
#[derive(Debug, Error)]
pub enum LottoError {
    /// Request body could not be read as the expected JSON
    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[from] JsonRejection),

    /// Generator configuration out of range
    #[error("Invalid lotto configuration: {0}")]
    InvalidConfig(String),
}

impl LottoError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LottoError::InvalidPayload(rejection) => {
                ErrorKind::from_status_code(rejection.status().as_u16())
                    .unwrap_or(ErrorKind::BadRequest)
            }
            LottoError::InvalidConfig(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn log(&self) {
        match self {
            LottoError::InvalidConfig(msg) => {
                tracing::error!(message = %msg, "Lotto configuration error");
            }
            LottoError::InvalidPayload(rejection) => {
                tracing::debug!(error = %rejection, "Rejected lotto payload");
            }
        }
    }
}

impl From<LottoError> for AppError {
    fn from(err: LottoError) -> Self {
        match err {
            LottoError::InvalidPayload(rejection) => rejection.into(),
            err @ LottoError::InvalidConfig(_) => {
                AppError::internal(INTERNAL_ERROR_DETAIL).with_source(err)
            }
        }
    }
}

impl IntoResponse for LottoError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
