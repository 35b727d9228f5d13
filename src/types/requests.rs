//! Request payloads for the HTTP surface

use serde::Deserialize;
use serde_json::Value;

use crate::prompt::ReportVariant;

fn default_targets() -> Vec<String> {
    vec!["tourism".to_string(), "accommodation".to_string()]
}

fn default_target_language() -> String {
    "Italian".to_string()
}

/// Body of `POST /api/ai/research`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchRequest {
    pub location_name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
    #[serde(default)]
    pub user_instructions: Option<String>,
    /// Prompt breadth variant; defaults to the full Italian schema
    #[serde(default)]
    pub variant: ReportVariant,
}

/// Tag-generation prompt mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Closed-vocabulary IDs only, 1-3 per category
    Wizard,
    /// Free-text SEO keywords, 5-8 per category, in the requested language
    Seo,
    /// Nine-category free-tag bundle in English
    #[default]
    Full,
}

/// Body of `POST /api/ai/generate-tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTagsRequest {
    pub location_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub services: Option<Value>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub current_tags: Option<Value>,
    #[serde(default)]
    pub mode: TagMode,
}

/// Body of `POST /api/ai/translate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    pub content: Value,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_request_defaults() {
        let req: ResearchRequest =
            serde_json::from_str(r#"{"location_name": "Bormio"}"#).unwrap();
        assert_eq!(req.location_name, "Bormio");
        assert_eq!(req.targets, vec!["tourism", "accommodation"]);
        assert_eq!(req.variant, ReportVariant::Extended);
        assert!(req.user_instructions.is_none());
    }

    #[test]
    fn tag_mode_parses_lowercase() {
        let req: GenerateTagsRequest =
            serde_json::from_str(r#"{"location_name": "Bormio", "mode": "wizard"}"#).unwrap();
        assert_eq!(req.mode, TagMode::Wizard);

        let req: GenerateTagsRequest =
            serde_json::from_str(r#"{"location_name": "Bormio"}"#).unwrap();
        assert_eq!(req.mode, TagMode::Full);
    }

    #[test]
    fn translate_request_default_language() {
        let req: TranslateRequest =
            serde_json::from_str(r#"{"content": {"a": "hello"}}"#).unwrap();
        assert_eq!(req.target_language, "Italian");
    }
}
