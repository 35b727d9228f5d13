//! Model invocation
//!
//! The external-collaborator seam of the pipeline. `ModelInvoker` is the
//! trait the orchestration code depends on; `GeminiInvoker` is the production
//! implementation posting to the Gemini generateContent REST API. Failures
//! surface as tagged `AiError` variants; nothing downstream inspects
//! provider message text to work out what went wrong.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::AiError;

/// Options for one model call.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
    /// Structured-output hint: ask the provider for a JSON response body
    pub json_output: bool,
    pub temperature: Option<f32>,
}

impl InvokeOptions {
    /// Options for prompts whose contract is JSON-only output.
    pub fn json() -> Self {
        Self {
            json_output: true,
            temperature: None,
        }
    }
}

/// Sends a prompt to a generative text service and returns raw text.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn generate(&self, prompt: &str, opts: &InvokeOptions) -> Result<String, AiError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Gemini generateContent client.
#[derive(Debug, Clone)]
pub struct GeminiInvoker {
    http_client: HttpClient,
    config: GeminiConfig,
}

impl GeminiInvoker {
    /// Create a new invoker with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AiError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
            })?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a new invoker with a custom HTTP client.
    pub fn with_http_client(config: GeminiConfig, http_client: HttpClient) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_body(prompt: &str, opts: &InvokeOptions) -> GenerateContentRequest {
        let generation_config = if opts.json_output || opts.temperature.is_some() {
            Some(GenerationConfig {
                response_mime_type: opts
                    .json_output
                    .then(|| "application/json".to_string()),
                temperature: opts.temperature,
            })
        } else {
            None
        };
        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config,
        }
    }
}

#[async_trait]
impl ModelInvoker for GeminiInvoker {
    async fn generate(&self, prompt: &str, opts: &InvokeOptions) -> Result<String, AiError> {
        let url = self.endpoint_url();
        let body = Self::build_body(prompt, opts);

        let send = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.expose_secret())
            .json(&body)
            .send();

        // Explicit deadline: a hung provider still resolves to an error
        // envelope instead of hanging the request.
        let resp = tokio::time::timeout(self.config.timeout, send)
            .await
            .map_err(|_| {
                AiError::TimeoutError(format!(
                    "model call exceeded {}s",
                    self.config.timeout.as_secs()
                ))
            })?
            .map_err(|e| AiError::HttpError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let details = serde_json::from_str(&text).ok();
            return match status.as_u16() {
                401 | 403 => Err(AiError::AuthenticationError(text)),
                code => Err(AiError::ApiError {
                    code,
                    message: text,
                    details,
                }),
            };
        }

        let text = resp
            .text()
            .await
            .map_err(|e| AiError::HttpError(e.to_string()))?;
        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            AiError::InternalError(format!("unexpected provider response: {e}"))
        })?;

        let output: String = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if output.is_empty() {
            return Err(AiError::InternalError(
                "provider returned no candidate text".to_string(),
            ));
        }
        Ok(output)
    }
}
