//! Request orchestration
//!
//! The pipeline drives every AI request to a complete envelope:
//! prompt → invoke → sanitize → parse → merge. Any stage failure
//! short-circuits to classification; nothing propagates past this module as
//! an unhandled fault. Parse failures are never retried and the model is
//! never re-invoked automatically.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::diaglog::DiagnosticLog;
use crate::envelope::ApiEnvelope;
use crate::error::{AiError, ErrorCategory};
use crate::fallback;
use crate::invoker::{InvokeOptions, ModelInvoker};
use crate::prompt::{self, PromptMode};
use crate::sanitize::{parse_json, sanitize};
use crate::types::report::LocationReport;
use crate::types::requests::{GenerateTagsRequest, ResearchRequest, TagMode, TranslateRequest};
use crate::types::tags::TagBundle;

/// Orchestrates the AI request flows.
///
/// `invoker` is `None` when no model credential is configured; research
/// requests then serve the static fallback payload and the tag/translate
/// endpoints fail with a Config-class error.
#[derive(Clone)]
pub struct Pipeline {
    invoker: Option<Arc<dyn ModelInvoker>>,
    diag: DiagnosticLog,
}

impl Pipeline {
    pub fn new(invoker: Option<Arc<dyn ModelInvoker>>, diag: DiagnosticLog) -> Self {
        Self { invoker, diag }
    }

    /// Full location research flow.
    pub async fn research(&self, req: &ResearchRequest) -> ApiEnvelope<LocationReport> {
        match self.research_inner(req).await {
            Ok(report) => ApiEnvelope::success(report),
            Err(e) => self.classify(e).await,
        }
    }

    async fn research_inner(&self, req: &ResearchRequest) -> Result<LocationReport, AiError> {
        info!(location = %req.location_name, variant = ?req.variant, "research request");

        let Some(invoker) = &self.invoker else {
            warn!("GEMINI_API_KEY not configured, serving fallback payload");
            return Ok(fallback::sample_report(&req.location_name));
        };

        let prompt = prompt::build(&PromptMode::FullReport {
            variant: req.variant,
            location_name: &req.location_name,
            region: req.region.as_deref(),
            targets: &req.targets,
            user_instructions: req.user_instructions.as_deref(),
        });

        let raw = invoker.generate(&prompt, &InvokeOptions::json()).await?;
        let mut report: LocationReport = self.extract(&raw)?;

        if let Some(tags) = &report.tags {
            warn_on_vocabulary_violations(tags);
        }

        // Merge precedence: caller-supplied identity wins over the model's
        // same-named field. Shallow, top level only.
        report.name = req.location_name.clone();
        Ok(report)
    }

    /// Tag-generation flow (wizard / seo / full).
    pub async fn generate_tags(&self, req: &GenerateTagsRequest) -> ApiEnvelope<Value> {
        match self.generate_tags_inner(req).await {
            Ok(data) => ApiEnvelope::success(data),
            Err(e) => self.classify(e).await,
        }
    }

    async fn generate_tags_inner(&self, req: &GenerateTagsRequest) -> Result<Value, AiError> {
        info!(location = %req.location_name, mode = ?req.mode, "tag generation request");
        let invoker = self.require_invoker()?;

        let language = req.language.as_deref().unwrap_or("Italian");
        let mode = match req.mode {
            TagMode::Wizard => PromptMode::TagWizard {
                location_name: &req.location_name,
                description: req.description.as_deref(),
                services: req.services.as_ref(),
                current_tags: req.current_tags.as_ref(),
            },
            TagMode::Seo => PromptMode::TagSeo {
                location_name: &req.location_name,
                description: req.description.as_deref(),
                language,
                include_descriptors: false,
            },
            TagMode::Full => PromptMode::TagSeo {
                location_name: &req.location_name,
                description: req.description.as_deref(),
                language: "English",
                include_descriptors: true,
            },
        };

        let raw = invoker.generate(&prompt::build(&mode), &InvokeOptions::json()).await?;
        let data: Value = self.extract(&raw)?;

        if req.mode == TagMode::Wizard {
            // Soft validation: out-of-vocabulary IDs are reported, not rejected
            if let Ok(bundle) = serde_json::from_value::<TagBundle>(data.clone()) {
                warn_on_vocabulary_violations(&bundle);
            }
        }
        Ok(data)
    }

    /// Translation flow: same-shaped object with translated values.
    pub async fn translate(&self, req: &TranslateRequest) -> ApiEnvelope<Value> {
        match self.translate_inner(req).await {
            Ok(data) => ApiEnvelope::success(data),
            Err(e) => self.classify(e).await,
        }
    }

    async fn translate_inner(&self, req: &TranslateRequest) -> Result<Value, AiError> {
        info!(target_language = %req.target_language, "translate request");
        let invoker = self.require_invoker()?;

        if !req.content.is_object() {
            return Err(AiError::ConfigurationError(
                "translate content must be a JSON object".to_string(),
            ));
        }

        let prompt = prompt::build(&PromptMode::Translate {
            content: &req.content,
            target_language: &req.target_language,
        });
        let raw = invoker.generate(&prompt, &InvokeOptions::json()).await?;
        self.extract(&raw)
    }

    fn require_invoker(&self) -> Result<&Arc<dyn ModelInvoker>, AiError> {
        self.invoker
            .as_ref()
            .ok_or_else(|| AiError::MissingApiKey("GEMINI_API_KEY not configured".to_string()))
    }

    /// Sanitize raw model output and parse it into the target shape.
    fn extract<T: serde::de::DeserializeOwned>(&self, raw: &str) -> Result<T, AiError> {
        debug!(raw_len = raw.len(), raw = %truncate(raw, 500), "raw model output");
        let clean = sanitize(raw);
        debug!(clean = %truncate(&clean, 500), "sanitized model output");
        parse_json(&clean)
    }

    /// Convert a failure to an error envelope, appending a diagnostic record
    /// for everything except missing-credential failures.
    async fn classify<T>(&self, error: AiError) -> ApiEnvelope<T> {
        let category = error.category();
        warn!(?category, error = %error, "AI pipeline failure");
        if let AiError::SchemaError { raw, .. } = &error {
            debug!(unparsed = %truncate(raw, 1000), "unparsed model output");
        }
        if category != ErrorCategory::Config {
            self.diag
                .append(&error.to_string(), &error.diagnostic_detail())
                .await;
        }
        ApiEnvelope::failure(&error)
    }
}

fn warn_on_vocabulary_violations(tags: &TagBundle) {
    let violations = tags.vocabulary_violations();
    if !violations.is_empty() {
        warn!(violations = ?violations, "closed-vocabulary tags outside fixed set");
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedInvoker(String);

    #[async_trait]
    impl ModelInvoker for CannedInvoker {
        async fn generate(&self, _prompt: &str, _opts: &InvokeOptions) -> Result<String, AiError> {
            Ok(self.0.clone())
        }
    }

    fn pipeline_with(output: &str) -> (Pipeline, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let diag = DiagnosticLog::new(dir.path().join("diag.log"));
        (
            Pipeline::new(Some(Arc::new(CannedInvoker(output.to_string()))), diag),
            dir,
        )
    }

    fn offline_pipeline() -> (Pipeline, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let diag = DiagnosticLog::new(dir.path().join("diag.log"));
        (Pipeline::new(None, diag), dir)
    }

    #[tokio::test]
    async fn caller_identity_wins_over_model_name() {
        let (pipeline, _dir) = pipeline_with(
            r#"{"name": "Wrong Name", "description": {
                "winter": "w", "summer": "s", "spring": "p", "autumn": "a"
            }}"#,
        );
        let req: ResearchRequest =
            serde_json::from_str(r#"{"location_name": "Livigno"}"#).unwrap();
        match pipeline.research(&req).await {
            ApiEnvelope::Success { data } => assert_eq!(data.name, "Livigno"),
            ApiEnvelope::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[tokio::test]
    async fn offline_tags_fail_with_config_message() {
        let (pipeline, _dir) = offline_pipeline();
        let req: GenerateTagsRequest =
            serde_json::from_str(r#"{"location_name": "Livigno"}"#).unwrap();
        match pipeline.generate_tags(&req).await {
            ApiEnvelope::Error { message } => {
                assert_eq!(message, crate::error::CONFIG_USER_MESSAGE)
            }
            ApiEnvelope::Success { .. } => panic!("expected error envelope"),
        }
    }

    #[tokio::test]
    async fn non_object_translate_content_is_rejected() {
        let (pipeline, _dir) = pipeline_with("{}");
        let req = TranslateRequest {
            content: serde_json::json!([1, 2, 3]),
            target_language: "German".to_string(),
        };
        match pipeline.translate(&req).await {
            ApiEnvelope::Error { message } => assert!(message.contains("JSON object")),
            ApiEnvelope::Success { .. } => panic!("expected error envelope"),
        }
    }
}
