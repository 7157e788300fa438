//! Problem Details (RFC 7807)
//!
//! The JSON body returned with every non-2xx response.

use serde::{Deserialize, Serialize};

use super::app_error::AppError;

/// Base URI used for the `type` member.
const PROBLEM_TYPE_BASE: &str = "https://httpstatuses.io";

/// RFC 7807 problem document
///
/// `action` is omitted from the JSON when there is nothing the client can do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl From<&AppError> for ProblemDetails {
    fn from(err: &AppError) -> Self {
        Self {
            problem_type: format!("{}/{}", PROBLEM_TYPE_BASE, err.status_code()),
            title: err.kind().as_str().to_string(),
            status: err.status_code(),
            detail: err.message().to_string(),
            action: err.action().map(str::to_string),
        }
    }
}
