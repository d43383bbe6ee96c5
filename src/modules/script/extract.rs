use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No JSON object found in reply")]
    NoJson { raw: String },

    #[error("Selected span is not valid JSON: {source}")]
    InvalidJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Pulls a JSON object out of free-form model text.
///
/// Strategies, in priority order:
/// 1. a ```json fenced block,
/// 2. any fenced block (a leading `json` language tag is stripped),
/// 3. the first balanced `{...}` span. The balance count is string-aware:
///    braces inside JSON string literals do not affect it.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let span = fenced_json(text)
        .or_else(|| fenced_any(text))
        .or_else(|| balanced_braces(text))
        .ok_or_else(|| ExtractError::NoJson {
            raw: text.to_string(),
        })?;

    serde_json::from_str(span.trim()).map_err(|source| ExtractError::InvalidJson {
        raw: text.to_string(),
        source,
    })
}

fn fenced_json(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(&rest[..end])
}

fn fenced_any(text: &str) -> Option<&str> {
    let start = text.find("```")? + "```".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    let inner = rest[..end].trim();
    match inner.strip_prefix("json") {
        Some(stripped) => Some(stripped.trim_start()),
        None => Some(inner),
    }
}

fn balanced_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in text.as_bytes().iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_fence_returns_exact_object() {
        let reply = "Here is your script:\n```json\n{\"title\": \"Coffee\", \"segments\": []}\n```\nEnjoy!";
        let value = extract_json(reply).unwrap();
        assert_eq!(value, json!({"title": "Coffee", "segments": []}));
    }

    #[test]
    fn json_fence_wins_over_earlier_generic_fence() {
        let reply = "```\nnot the payload\n```\n```json\n{\"a\": 1}\n```";
        // Priority 1 looks for the tagged fence anywhere in the reply.
        let value = extract_json(reply).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn generic_fence_with_language_tag_is_stripped() {
        let reply = "```\njson\n{\"title\": \"T\"}\n```";
        let value = extract_json(reply).unwrap();
        assert_eq!(value, json!({"title": "T"}));
    }

    #[test]
    fn generic_fence_without_tag() {
        let reply = "Result:\n```\n{\"x\": [1, 2]}\n```";
        let value = extract_json(reply).unwrap();
        assert_eq!(value, json!({"x": [1, 2]}));
    }

    #[test]
    fn bare_braces_take_first_balanced_span() {
        let reply = "Sure thing! {\"a\": {\"b\": 2}} and some trailing {junk";
        let value = extract_json(reply).unwrap();
        assert_eq!(value, json!({"a": {"b": 2}}));
    }

    #[test]
    fn braces_inside_string_literals_do_not_break_the_scan() {
        let reply = r#"Output: {"title": "a } tricky { one", "n": 1} done"#;
        let value = extract_json(reply).unwrap();
        assert_eq!(value, json!({"title": "a } tricky { one", "n": 1}));
    }

    #[test]
    fn escaped_quotes_inside_strings_are_handled() {
        let reply = r#"{"quote": "she said \"}\" loudly", "ok": true}"#;
        let value = extract_json(reply).unwrap();
        assert_eq!(value, json!({"quote": "she said \"}\" loudly", "ok": true}));
    }

    #[test]
    fn no_braces_is_no_json() {
        let err = extract_json("I could not produce a script, sorry.").unwrap_err();
        assert!(matches!(err, ExtractError::NoJson { .. }));
    }

    #[test]
    fn unparseable_span_is_invalid_json_and_keeps_raw_text() {
        let reply = "{definitely not json}";
        let err = extract_json(reply).unwrap_err();
        match err {
            ExtractError::InvalidJson { raw, .. } => assert_eq!(raw, reply),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unterminated_object_is_no_json() {
        let err = extract_json("{\"title\": \"never closed\"").unwrap_err();
        assert!(matches!(err, ExtractError::NoJson { .. }));
    }
}
