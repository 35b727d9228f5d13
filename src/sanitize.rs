//! Best-effort JSON extraction
//!
//! Model output is unstructured natural-language generation wrapped around a
//! JSON intent: fenced code blocks, leading/trailing prose, trailing commas.
//! `sanitize` applies three repair tiers in order and never fails; when no
//! plausible JSON region exists the input is returned unchanged for the
//! parser to reject explicitly. Re-sanitizing already-clean JSON is a no-op.

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::AiError;

/// Extract the best single-shot JSON candidate from raw model output.
///
/// Tiers, in order:
/// 1. strip fenced code-block delimiters, with or without a language tag;
/// 2. slice from the first `{` to the last `}` when both exist in order;
/// 3. remove trailing commas immediately preceding `}` or `]`.
pub fn sanitize(raw: &str) -> String {
    let unfenced = strip_fences(raw);
    let sliced = slice_outer_braces(unfenced.trim());
    strip_trailing_commas(sliced)
}

/// Parse sanitized text, signalling a schema failure with the original
/// serde error text and the unparsed input preserved for diagnostics.
pub fn parse_json<T: DeserializeOwned>(sanitized: &str) -> Result<T, AiError> {
    serde_json::from_str(sanitized).map_err(|e| AiError::SchemaError {
        raw: sanitized.to_string(),
        message: e.to_string(),
    })
}

/// Remove ``` fences anywhere in the text, keeping inner content.
fn strip_fences(text: &str) -> String {
    // Language tags are stripped with the opening fence (```json, ```JSON, ...)
    match Regex::new(r"```[A-Za-z]*") {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(_) => text.replace("```", ""),
    }
}

/// Slice to the span between the first `{` and the last `}`, discarding
/// surrounding prose. Absent either brace, the text passes through unchanged.
fn slice_outer_braces(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Remove commas that immediately precede a closing `}` or `]`.
///
/// Tracks string literals and escapes so commas inside strings are never
/// touched; nothing else in the input is altered.
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_str = false;
    let mut escape = false;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if in_str {
            if escape {
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == '"' {
                in_str = false;
            }
            out.push(c);
            i += 1;
            continue;
        }
        match c {
            '"' => {
                in_str = true;
                out.push(c);
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if !(j < chars.len() && (chars[j] == '}' || chars[j] == ']')) {
                    out.push(',');
                }
            }
            _ => out.push(c),
        }
        i += 1;
    }
    out
}
