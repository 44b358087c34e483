//! Response of a create/update/delete call.
//!
//! Some endpoints answer 2xx with an empty or plain-text body; those are
//! treated as success rather than as decode failures.

use serde::{Deserialize, Serialize};

use super::errors::RequestError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MutationResult {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

fn default_success() -> bool {
    true
}

impl MutationResult {
    pub fn fallback() -> Self {
        Self {
            success: true,
            message: None,
            id: None,
        }
    }

    /// Parses a successful response body, tolerating non-JSON payloads.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<MutationResult>(body).unwrap_or_else(|_| Self::fallback())
    }

    /// Turns an explicit `"Success": false` into [`RequestError::Rejected`]
    /// carrying the server's message.
    pub fn into_result(self) -> Result<Self, RequestError> {
        if self.success {
            return Ok(self);
        }
        let message = self
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "The server rejected the request".to_string());
        Err(RequestError::Rejected(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_body() {
        let r = MutationResult::from_body(r#"{"Success":true,"Message":"Saved","Id":14}"#);
        assert_eq!(r.id, Some(14));
        assert_eq!(r.message.as_deref(), Some("Saved"));
    }

    #[test]
    fn plain_text_and_empty_bodies_fall_back_to_success() {
        assert_eq!(MutationResult::from_body("Created"), MutationResult::fallback());
        assert_eq!(MutationResult::from_body(""), MutationResult::fallback());
    }

    #[test]
    fn partial_json_defaults_to_success() {
        let r = MutationResult::from_body(r#"{"Id":3}"#);
        assert!(r.success);
        assert_eq!(r.id, Some(3));
    }

    #[test]
    fn explicit_failure_becomes_an_error_with_the_server_message() {
        let r = MutationResult::from_body(r#"{"Success":false,"Message":"Badge already in use"}"#);
        let err = r.into_result().unwrap_err();
        assert_eq!(err, RequestError::Rejected("Badge already in use".into()));
        assert_eq!(err.to_string(), "Badge already in use");
    }

    #[test]
    fn failure_without_message_gets_a_generic_text() {
        let err = MutationResult::from_body(r#"{"Success":false,"Message":"  "}"#)
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "The server rejected the request");
    }

    #[test]
    fn success_and_fallback_pass_through() {
        let r = MutationResult::from_body(r#"{"Success":true,"Id":8}"#);
        assert_eq!(r.clone().into_result(), Ok(r));
        assert_eq!(
            MutationResult::from_body("OK").into_result(),
            Ok(MutationResult::fallback())
        );
    }
}
