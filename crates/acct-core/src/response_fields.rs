//! Lookups for the handful of fields the client reads out of otherwise
//! opaque response bodies.

use serde_json::Value;

const KEY_FIELDS: [&str; 3] = ["apiKey", "api_key", "key"];
const HAS_KEY_FIELDS: [&str; 4] = ["hasKey", "has_key", "hasApiKey", "exists"];

/// Issued API key from a generate/regenerate response
pub fn api_key(body: &Value) -> Option<String> {
    find_in_envelope(body, &KEY_FIELDS)
        .and_then(Value::as_str)
        .map(String::from)
}

/// "Has key" flag from the key-existence response
pub fn has_api_key(body: &Value) -> Option<bool> {
    if let Some(flag) = body.as_bool() {
        return Some(flag);
    }
    find_in_envelope(body, &HAS_KEY_FIELDS).and_then(Value::as_bool)
}

/// Server-supplied error text: `message`, `error` (string) or `error.message`.
/// Blank strings count as absent.
pub fn error_message(body: &Value) -> Option<String> {
    let non_blank = |value: Option<&Value>| {
        value
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(String::from)
    };

    non_blank(body.get("message"))
        .or_else(|| non_blank(body.get("error")))
        .or_else(|| non_blank(body.get("error").and_then(|e| e.get("message"))))
}

fn find_in_envelope<'a>(body: &'a Value, fields: &[&str]) -> Option<&'a Value> {
    let lookup = |value: &'a Value| fields.iter().find_map(|field| value.get(*field));
    lookup(body).or_else(|| body.get("data").and_then(lookup))
}
