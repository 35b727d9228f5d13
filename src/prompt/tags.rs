//! Tag-generation prompts
//!
//! Wizard mode restricts the model to the fixed closed vocabularies; SEO mode
//! asks for free-text keyword lists in a target language. The nine-category
//! English bundle used by the admin frontend is the SEO prompt with the
//! descriptor categories included.

use serde_json::Value;

use crate::types::tags::{ACTIVITY_IDS, FREE_TAG_CATEGORIES, TARGET_IDS, VIBE_IDS};

/// Closed-vocabulary selection prompt: 1-3 IDs per category.
pub fn build_wizard(
    location_name: &str,
    description: Option<&str>,
    services: Option<&Value>,
    current_tags: Option<&Value>,
) -> String {
    let mut prompt = format!(
        "Analyze the mountain tourism location: \"{location_name}\".\n\n\
         Select the tags that best describe it. Choose ONLY from these fixed \
         vocabularies, using the lowercase IDs exactly as written:\n\
         - vibe: {}\n\
         - target: {}\n\
         - activities: {}\n\n\
         Pick between 1 and 3 IDs per category. Do NOT invent new IDs.\n",
        VIBE_IDS.join(", "),
        TARGET_IDS.join(", "),
        ACTIVITY_IDS.join(", "),
    );
    if let Some(description) = description {
        prompt.push_str("\nLocation description for context:\n");
        prompt.push_str(description);
        prompt.push('\n');
    }
    if let Some(services) = services {
        prompt.push_str("\nKnown services (JSON):\n");
        prompt.push_str(&services.to_string());
        prompt.push('\n');
    }
    if let Some(current_tags) = current_tags {
        prompt.push_str("\nTags currently assigned (may be revised):\n");
        prompt.push_str(&current_tags.to_string());
        prompt.push('\n');
    }
    prompt.push_str(
        "\nRequired format (strictly JSON):\n\
         {\n\
             \"vibe\": [\"id\"],\n\
             \"target\": [\"id\"],\n\
             \"activities\": [\"id\"]\n\
         }\n\n\
         Respond ONLY with valid JSON. No markdown, no code fences.",
    );
    prompt
}

/// Free-text keyword prompt: 5-8 items per category in the given language.
///
/// With `include_descriptors` the vibe/target categories are added as free
/// adjective lists, producing the nine-category bundle.
pub fn build_seo(
    location_name: &str,
    description: Option<&str>,
    language: &str,
    include_descriptors: bool,
) -> String {
    let mut prompt = format!(
        "Analyze the mountain tourism location: \"{location_name}\".\n\n\
         CRITICAL INSTRUCTION: output ALL tag values in {language} only. \
         Do NOT use any other language.\n\n\
         Generate a set of TAGS to categorize it, 5 to 8 items per category.\n"
    );
    if let Some(description) = description {
        prompt.push_str("\nLocation description for context:\n");
        prompt.push_str(description);
        prompt.push('\n');
    }
    prompt.push_str("\nRequired format (strictly JSON):\n{\n");
    if include_descriptors {
        prompt.push_str("    \"vibe\": [\"Adjective 1\", \"Adjective 2\"],\n");
        prompt.push_str("    \"target\": [\"Target 1\", \"Target 2\"],\n");
    }
    for (i, category) in FREE_TAG_CATEGORIES.iter().enumerate() {
        let hint = match *category {
            "highlights" => "Highlight 1\", \"Highlight 2",
            "tourism" => "Activity tags e.g. Freeride, Snowshoeing, MTB",
            "accommodation" => "Hospitality tags e.g. Luxury, Glamping, Mountain Huts",
            "infrastructure" => "Infrastructure tags e.g. Cable Car, Ski Bus, Rental",
            "sport" => "Sport tags e.g. Padel, Tennis, Swimming",
            "info" => "Info tags e.g. Guide Office, App, WiFi",
            _ => "General tags e.g. Panoramic, Historic, Food & Wine",
        };
        let comma = if i + 1 < FREE_TAG_CATEGORIES.len() { "," } else { "" };
        prompt.push_str(&format!("    \"{category}\": [\"{hint}\"]{comma}\n"));
    }
    prompt.push_str("}\n\nRespond ONLY with valid JSON. No markdown, no code fences.");
    prompt
}
