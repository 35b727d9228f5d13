//! Error Handling
//!
//! Tagged error type for every pipeline stage, plus the classifier that maps
//! a failure to a user-facing category and message. Classification is driven
//! by the variant itself rather than substring matching of free text; the
//! single exception is the "API key" marker check, because Gemini reports
//! credential problems inside a 400-class response body.

use thiserror::Error;

/// Fixed user-facing message for an invalid or expired credential.
///
/// Kept in Italian to match the admin frontend.
pub const CREDENTIAL_USER_MESSAGE: &str =
    "GEMINI_API_KEY non valida o scaduta. Controlla il file .env. (Google Error: 400/403 Invalid API Key)";

/// Fixed user-facing message when no credential is configured at all.
pub const CONFIG_USER_MESSAGE: &str = "API Key missing. Configura GEMINI_API_KEY nel file .env.";

/// Errors produced by the AI pipeline.
#[derive(Debug, Error)]
pub enum AiError {
    /// No model credential was configured at invocation time
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// The provider rejected the credential (HTTP 401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// Any other non-success response from the provider
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Transport-level failure talking to the provider
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The model call exceeded its deadline
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Model output could not be coerced to valid JSON after sanitization
    #[error("Schema error: {message}")]
    SchemaError {
        /// The sanitized text that failed to parse, kept for diagnostics
        raw: String,
        message: String,
    },

    /// Invalid service configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// User-facing error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// No credential configured; recoverable by caller action
    Config,
    /// Invalid or expired credential
    Credential,
    /// Model output could not be parsed
    Schema,
    /// Transport or provider-side failure of any other kind
    Provider,
}

impl AiError {
    /// Classify this error into a user-facing category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingApiKey(_) => ErrorCategory::Config,
            Self::AuthenticationError(_) => ErrorCategory::Credential,
            Self::ApiError { code, message, .. }
                if matches!(code, 400 | 401 | 403) || message.contains("API key") =>
            {
                ErrorCategory::Credential
            }
            Self::SchemaError { .. } => ErrorCategory::Schema,
            _ => ErrorCategory::Provider,
        }
    }

    /// Message suitable for the response envelope.
    ///
    /// Config and Credential failures map to fixed messages; everything else
    /// carries the failure's own description. Stack-trace-level detail never
    /// leaves the process through this path.
    pub fn user_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => CONFIG_USER_MESSAGE.to_string(),
            ErrorCategory::Credential => CREDENTIAL_USER_MESSAGE.to_string(),
            ErrorCategory::Schema | ErrorCategory::Provider => self.to_string(),
        }
    }

    /// Full diagnostic detail for the append-only error log.
    pub fn diagnostic_detail(&self) -> String {
        match self {
            Self::SchemaError { raw, message } => {
                format!("{message}\nUnparsed text:\n{raw}")
            }
            Self::ApiError {
                code,
                message,
                details,
            } => match details {
                Some(d) => format!("API error {code}: {message}\nDetails: {d}"),
                None => format!("API error {code}: {message}"),
            },
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_config() {
        let e = AiError::MissingApiKey("GEMINI_API_KEY not set".into());
        assert_eq!(e.category(), ErrorCategory::Config);
        assert_eq!(e.user_message(), CONFIG_USER_MESSAGE);
    }

    #[test]
    fn http_403_is_credential() {
        let e = AiError::ApiError {
            code: 403,
            message: "PERMISSION_DENIED".into(),
            details: None,
        };
        assert_eq!(e.category(), ErrorCategory::Credential);
        assert_eq!(e.user_message(), CREDENTIAL_USER_MESSAGE);
    }

    #[test]
    fn api_key_marker_is_credential() {
        let e = AiError::ApiError {
            code: 500,
            message: "API key expired, renew it".into(),
            details: None,
        };
        assert_eq!(e.category(), ErrorCategory::Credential);
    }

    #[test]
    fn schema_error_keeps_detail() {
        let e = AiError::SchemaError {
            raw: "not json".into(),
            message: "expected value at line 1".into(),
        };
        assert_eq!(e.category(), ErrorCategory::Schema);
        assert!(e.user_message().contains("expected value"));
        assert!(e.diagnostic_detail().contains("not json"));
    }

    #[test]
    fn transport_failures_are_provider() {
        assert_eq!(
            AiError::HttpError("connection reset".into()).category(),
            ErrorCategory::Provider
        );
        assert_eq!(
            AiError::TimeoutError("model call exceeded 90s".into()).category(),
            ErrorCategory::Provider
        );
        assert_eq!(
            AiError::ApiError {
                code: 500,
                message: "internal".into(),
                details: None,
            }
            .category(),
            ErrorCategory::Provider
        );
    }
}
