//! Response envelope
//!
//! Every request resolves to a uniform success/error wrapper; application
//! status travels in-body and the HTTP status stays 200.

use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// Discriminated success/error wrapper returned for every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope<T> {
    Success { data: T },
    Error { message: String },
}

impl<T> ApiEnvelope<T> {
    /// Wrap a payload in a success envelope.
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Build an error envelope from a classified failure.
    pub fn failure(error: &AiError) -> Self {
        Self::Error {
            message: error.user_message(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_with_status_tag() {
        let env = ApiEnvelope::success(serde_json::json!({"name": "Livigno"}));
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["status"], "success");
        assert_eq!(v["data"]["name"], "Livigno");
    }

    #[test]
    fn error_serializes_with_message() {
        let err = AiError::HttpError("connection refused".into());
        let env: ApiEnvelope<serde_json::Value> = ApiEnvelope::failure(&err);
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["status"], "error");
        assert!(v["message"].as_str().unwrap().contains("connection refused"));
    }
}
