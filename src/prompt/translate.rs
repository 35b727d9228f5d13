//! Translation prompt
//!
//! Translates every value of an arbitrary JSON object while preserving key
//! names exactly; URLs and numbers pass through unchanged.

use serde_json::Value;

/// Build the translation prompt for the given content object.
pub fn build(content: &Value, target_language: &str) -> String {
    format!(
        "You are a professional translator for a mountain tourism portal.\n\n\
         Task: translate the following JSON content into {target_language}.\n\n\
         Rules:\n\
         1. Translate ALL values (descriptions, names where appropriate, labels).\n\
         2. DO NOT translate keys. Keep the JSON structure exactly the same.\n\
         3. If a value is a URL or a number, keep it as is.\n\
         4. Output ONLY valid JSON. No markdown, no code fences.\n\n\
         Content to translate:\n{content}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embeds_content_and_language() {
        let content = json!({"description": "Una valle tranquilla", "url": "https://example.com"});
        let prompt = build(&content, "German");
        assert!(prompt.contains("into German"));
        assert!(prompt.contains("Una valle tranquilla"));
        assert!(prompt.contains("https://example.com"));
        assert!(prompt.contains("DO NOT translate keys"));
    }
}
