//! Recovery of a JSON object from free-form judge output.
//!
//! Judges are asked for bare JSON but routinely wrap it in code fences or
//! surround it with prose. [`sanitize_response`] strips the decoration and
//! [`extract_json_object`] finds the first balanced `{...}` block that
//! decodes as a JSON object.

use std::collections::HashMap;

use serde_json::value::RawValue;
use serde_json::{Map, Value};

/// Trims whitespace and removes a surrounding Markdown code fence.
///
/// Handles an opening fence with or without a language tag (```` ```json ````)
/// and a missing closing fence (truncated output).
#[must_use]
pub fn sanitize_response(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the language tag: everything up to the first newline, provided it
    // is a bare word like `json`. A fence with inline content keeps it.
    let rest = match rest.split_once('\n') {
        Some((tag, body)) if tag.trim().chars().all(char::is_alphanumeric) => body,
        _ => rest,
    };

    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Returns the first balanced `{...}` block in `text` that decodes as a
/// JSON object.
///
/// Brace matching is string- and escape-aware, so braces inside JSON string
/// values do not end the block early. A candidate that balances but does not
/// decode (prose like `{see below}`) is skipped and the scan resumes at the
/// next opening brace.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_end(&text[start..]) {
            if let Some(map) = decode_object(&text[start..start + end]) {
                return Some(map);
            }
        }
        search_from = start + 1;
    }
    None
}

/// Decode `candidate` as a JSON object.
///
/// serde_json rejects a whole document over one value it cannot represent,
/// such as `1e400`. When the strict decode fails, the object is re-read with
/// each value kept as raw text, and values that do not decode on their own
/// are dropped. Callers then see those keys as absent.
fn decode_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(_) => {
            let fields: HashMap<String, &RawValue> = serde_json::from_str(candidate).ok()?;
            Some(
                fields
                    .into_iter()
                    .filter_map(|(key, raw)| {
                        serde_json::from_str::<Value>(raw.get())
                            .ok()
                            .map(|value| (key, value))
                    })
                    .collect(),
            )
        }
    }
}

/// Byte length of the balanced block starting at `text[0] == '{'`, or `None`
/// if the block never closes.
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}
