//! Typed failures for REST calls against the remote storefront API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ValidationErrors;

/// Maximum number of response body characters kept in an error.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 422 with a parseable `errors` object.
    #[error("validation failed: {}", .0.joined())]
    Validation(ValidationErrors),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("response error: {0}")]
    Decode(String),
    #[error("request error: {0}")]
    Encode(String),
    /// Browser-only call made while rendering on the server.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The field messages to show the user, if this is a validation failure.
    pub fn validation_message(&self) -> Option<String> {
        match self {
            Self::Validation(errors) => Some(errors.joined()),
            _ => None,
        }
    }
}

pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Map a non-2xx status and its body to an [`ApiError`].
///
/// Only a 422 whose body parses as [`ValidationErrors`] becomes
/// [`ApiError::Validation`]; everything else is [`ApiError::Http`].
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    if status == UNPROCESSABLE_ENTITY {
        if let Ok(errors) = serde_json::from_str::<ValidationErrors>(body) {
            return ApiError::Validation(errors);
        }
    }
    ApiError::Http { status, message: truncate(body.trim()) }
}

fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_CHARS {
        return body.to_owned();
    }
    let mut out: String = body.chars().take(MAX_ERROR_CHARS).collect();
    out.push_str("...");
    out
}
