//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// Error classification
///
/// Each variant corresponds to one HTTP status code. The set is limited to the outcomes this service can actually produce:
/// malformed payloads, rejected credentials and unexpected failures.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Unauthorized;
/// assert_eq!(kind.status_code(), 401);
/// assert_eq!(kind.as_str(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: malformed request
    BadRequest,
    /// 401 - Unauthorized: credentials rejected
    Unauthorized,
    /// 413 - Payload Too Large: body exceeds the limit
    PayloadTooLarge,
    /// 415 - Unsupported Media Type: Content-Type is not JSON
    UnsupportedMediaType,
    /// 422 - Unprocessable Entity: valid JSON of the wrong shape
    UnprocessableEntity,
    /// 500 - Internal Server Error: unexpected failure
    InternalServerError,
}

impl ErrorKind {
    /// HTTP status code for this kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::UnsupportedMediaType.status_code(), 415);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::UnsupportedMediaType => 415,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Standard reason phrase for the status
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::PayloadTooLarge => "Payload Too Large",
            ErrorKind::UnsupportedMediaType => "Unsupported Media Type",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    /// Reverse lookup from a status code.
    ///
    /// Used when a framework rejection already carries a status and only the
    /// classification is needed. Unknown codes return `None`.
    pub const fn from_status_code(code: u16) -> Option<Self> {
        match code {
            400 => Some(ErrorKind::BadRequest),
            401 => Some(ErrorKind::Unauthorized),
            413 => Some(ErrorKind::PayloadTooLarge),
            415 => Some(ErrorKind::UnsupportedMediaType),
            422 => Some(ErrorKind::UnprocessableEntity),
            500 => Some(ErrorKind::InternalServerError),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
