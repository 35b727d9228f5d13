//! Prompt construction
//!
//! One enumerated mode per instruction template, one construction function
//! per variant, selected by exhaustive matching: adding a mode is a
//! compile-time-checked extension point. Every variant's instruction text
//! demands JSON-only output with no markdown; the sanitizer compensates when
//! the model violates that contract anyway.

pub mod report;
pub mod tags;
pub mod translate;

pub use report::ReportVariant;

use serde_json::Value;

/// The instruction template to send, with its contextual parameters.
#[derive(Debug, Clone)]
pub enum PromptMode<'a> {
    /// Full structured location report
    FullReport {
        variant: ReportVariant,
        location_name: &'a str,
        region: Option<&'a str>,
        targets: &'a [String],
        user_instructions: Option<&'a str>,
    },
    /// Closed-vocabulary tag selection, 1-3 IDs per category
    TagWizard {
        location_name: &'a str,
        description: Option<&'a str>,
        services: Option<&'a Value>,
        current_tags: Option<&'a Value>,
    },
    /// Free-text keyword lists in a target natural language
    TagSeo {
        location_name: &'a str,
        description: Option<&'a str>,
        language: &'a str,
        /// Also ask for vibe/target adjectives (the nine-category bundle)
        include_descriptors: bool,
    },
    /// Translate all values of a JSON object, preserving every key
    Translate {
        content: &'a Value,
        target_language: &'a str,
    },
}

/// Compose a model-ready prompt. Pure and side-effect-free.
pub fn build(mode: &PromptMode<'_>) -> String {
    match mode {
        PromptMode::FullReport {
            variant,
            location_name,
            region,
            targets,
            user_instructions,
        } => report::build(*variant, location_name, *region, targets, *user_instructions),
        PromptMode::TagWizard {
            location_name,
            description,
            services,
            current_tags,
        } => tags::build_wizard(location_name, *description, *services, *current_tags),
        PromptMode::TagSeo {
            location_name,
            description,
            language,
            include_descriptors,
        } => tags::build_seo(location_name, *description, language, *include_descriptors),
        PromptMode::Translate {
            content,
            target_language,
        } => translate::build(content, target_language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_demands_json_only() {
        let targets = vec!["tourism".to_string()];
        let content = serde_json::json!({"a": 1});
        let modes = [
            PromptMode::FullReport {
                variant: ReportVariant::Minimal,
                location_name: "Livigno",
                region: None,
                targets: &targets,
                user_instructions: None,
            },
            PromptMode::FullReport {
                variant: ReportVariant::Extended,
                location_name: "Livigno",
                region: Some("Lombardia"),
                targets: &targets,
                user_instructions: Some("focus sci"),
            },
            PromptMode::FullReport {
                variant: ReportVariant::Translated,
                location_name: "Livigno",
                region: None,
                targets: &targets,
                user_instructions: None,
            },
            PromptMode::TagWizard {
                location_name: "Livigno",
                description: None,
                services: None,
                current_tags: None,
            },
            PromptMode::TagSeo {
                location_name: "Livigno",
                description: None,
                language: "Italian",
                include_descriptors: false,
            },
            PromptMode::Translate {
                content: &content,
                target_language: "German",
            },
        ];
        for mode in &modes {
            let prompt = build(mode);
            let lower = prompt.to_lowercase();
            assert!(lower.contains("json"), "prompt missing JSON demand: {prompt}");
            assert!(lower.contains("markdown"), "prompt missing markdown ban: {prompt}");
        }
    }

    #[test]
    fn full_report_embeds_location_and_guidance() {
        let targets = vec!["tourism".to_string(), "accommodation".to_string()];
        let prompt = build(&PromptMode::FullReport {
            variant: ReportVariant::Extended,
            location_name: "Madonna di Campiglio",
            region: Some("Trentino"),
            targets: &targets,
            user_instructions: Some("Approfondisci le piste nere."),
        });
        assert!(prompt.contains("Madonna di Campiglio"));
        assert!(prompt.contains("Trentino"));
        assert!(prompt.contains("Approfondisci le piste nere."));
    }
}
