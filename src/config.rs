//! Service configuration
//!
//! Resolved once at process start and passed explicitly into each request's
//! handling context. The credential is never re-read per request.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::AiError;

/// Default deadline for a single model call.
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 90;

/// Gemini-specific configuration parameters.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication
    pub api_key: SecretString,
    /// Base URL for the Gemini API
    pub base_url: String,
    /// Model to use
    pub model: String,
    /// Deadline for a single generateContent call
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create a new Gemini configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model-call deadline
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Model configuration; `None` when no credential is configured, which
    /// routes research requests to the static fallback payload
    pub gemini: Option<GeminiConfig>,
    /// Bind address for the HTTP server
    pub bind_addr: String,
    /// Append-only diagnostic log target
    pub diag_log_path: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is the sole trigger for the fallback path: absent or
    /// empty means no model calls are made.
    pub fn from_env() -> Result<Self, AiError> {
        let gemini = match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                let mut config = GeminiConfig::new(key);
                if let Ok(model) = std::env::var("GEMINI_MODEL") {
                    config = config.with_model(model);
                }
                if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
                    config = config.with_base_url(base_url);
                }
                if let Ok(secs) = std::env::var("AI_TIMEOUT_SECS") {
                    let secs: u64 = secs.parse().map_err(|_| {
                        AiError::ConfigurationError(format!(
                            "AI_TIMEOUT_SECS must be an integer, got {secs:?}"
                        ))
                    })?;
                    config = config.with_timeout(Duration::from_secs(secs));
                }
                Some(config)
            }
            _ => None,
        };

        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| format!("0.0.0.0:{port}"));

        let diag_log_path = std::env::var("DIAG_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("alpscout_debug.log"));

        Ok(Self {
            gemini,
            bind_addr,
            diag_log_path,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini: None,
            bind_addr: "0.0.0.0:8080".to_string(),
            diag_log_path: PathBuf::from("alpscout_debug.log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_config_defaults() {
        let config = GeminiConfig::new("test-key");
        assert_eq!(
            config.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS));
    }

    #[test]
    fn builders_override_defaults() {
        let config = GeminiConfig::new("k")
            .with_model("gemini-2.0-pro")
            .with_base_url("http://localhost:9999")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.model, "gemini-2.0-pro");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
