//! Sanitizer property tests: the three repair tiers, idempotence and
//! total tolerance of arbitrary input.

use alpscout::sanitize::{parse_json, sanitize};
use serde_json::{Value, json};

#[test]
fn never_fails_for_any_input() {
    let inputs: Vec<String> = vec![
        String::new(),
        " ".to_string(),
        "plain prose, no json".to_string(),
        "}{".to_string(),
        "{".to_string(),
        "]".to_string(),
        "```rust\nfn main() {}\n```".to_string(),
        (0u8..=255).map(|b| b as char).collect(),
        "\u{fffd}\u{0}\u{7}".repeat(100),
    ];
    for input in &inputs {
        // Must return a string without panicking; validity is not promised
        let _ = sanitize(input);
    }
}

#[test]
fn fence_tag_is_irrelevant() {
    let body = r#"{"resort": "Cervinia", "lifts": 19}"#;
    let with_tag = format!("```json\n{body}\n```");
    let with_upper_tag = format!("```JSON\n{body}\n```");
    let with_odd_tag = format!("```text\n{body}\n```");
    let bare_fence = format!("```\n{body}\n```");

    let expected = sanitize(body);
    assert_eq!(sanitize(&with_tag), expected);
    assert_eq!(sanitize(&with_upper_tag), expected);
    assert_eq!(sanitize(&with_odd_tag), expected);
    assert_eq!(sanitize(&bare_fence), expected);
}

#[test]
fn prose_wrapped_object_with_trailing_comma() {
    let raw = r#"prefix {"a":1,"b":[1,2,]} suffix"#;
    let parsed: Value = parse_json(&sanitize(raw)).unwrap();
    assert_eq!(parsed, json!({"a": 1, "b": [1, 2]}));
}

#[test]
fn already_clean_json_is_returned_unchanged() {
    let clean = r#"{"a":1,"b":[1,2],"nested":{"c":[{"d":null}]}}"#;
    assert_eq!(sanitize(clean), clean);
    // And a second pass over any sanitized output is a no-op
    let noisy = "Sure! Here is the JSON:\n```json\n{\"x\": [1,2,],}\n```";
    let once = sanitize(noisy);
    assert_eq!(sanitize(&once), once);
}

#[test]
fn string_literals_are_never_altered() {
    let raw = r#"{"tip": "Take bus 3, then lift, ] and enjoy", "n": [5,]}"#;
    let parsed: Value = parse_json(&sanitize(raw)).unwrap();
    assert_eq!(parsed["tip"], "Take bus 3, then lift, ] and enjoy");
    assert_eq!(parsed["n"], json!([5]));
}

#[test]
fn unparseable_input_surfaces_in_schema_error() {
    let err = parse_json::<Value>(&sanitize("the model refused to answer")).unwrap_err();
    let detail = err.diagnostic_detail();
    assert!(detail.contains("the model refused to answer"));
}
