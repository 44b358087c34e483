//! Error taxonomy of the console.
//!
//! Two families only: a form is rejected before anything is sent
//! ([`ValidationError`]), or a request that was sent failed ([`RequestError`]).

use thiserror::Error;

/// Client-side rejection of a form. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} cannot be negative")]
    Negative(&'static str),

    #[error("{field} cannot exceed {limit}")]
    ExceedsLimit { field: &'static str, limit: i64 },

    #[error("{0}")]
    Invalid(String),
}

/// Failure of a request that was actually issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session expired, please sign in again")]
    Unauthorized,

    #[error("Network error: {0}")]
    Network(String),

    #[error("The server did not respond in time")]
    Timeout,

    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// 2xx reply whose body carries `"Success": false`.
    #[error("{0}")]
    Rejected(String),
}

impl RequestError {
    /// Builds an HTTP error, falling back to a generic message for empty bodies.
    pub fn http(status: u16, body: &str) -> Self {
        let message = body.trim();
        let message = if message.is_empty() {
            "no details".to_string()
        } else {
            message.chars().take(200).collect()
        };
        RequestError::Http { status, message }
    }
}

/// Failure to decode the `[{ "<Rows>": [...], "Total<Entity>Count": n }]` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("expected an object or a single-element array")]
    NotAnObject,

    #[error("missing `{0}` collection")]
    MissingRows(String),

    #[error("cannot decode `{key}`: {reason}")]
    BadRows { key: String, reason: String },
}

impl From<EnvelopeError> for RequestError {
    fn from(e: EnvelopeError) -> Self {
        RequestError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_truncates_long_bodies() {
        let body = "x".repeat(500);
        match RequestError::http(500, &body) {
            RequestError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message.len(), 200);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn http_error_with_empty_body() {
        assert_eq!(
            RequestError::http(404, "  ").to_string(),
            "Request failed (404): no details"
        );
    }

    #[test]
    fn validation_messages() {
        assert_eq!(ValidationError::Required("Name").to_string(), "Name is required");
        assert_eq!(
            ValidationError::ExceedsLimit { field: "Request count", limit: 4 }.to_string(),
            "Request count cannot exceed 4"
        );
    }
}
