//! JSON-LD Image Lookup
//!
//! Pulls a logo or image URL out of a Schema.org JSON-LD block. Organization
//! markup usually carries `logo`, article and product markup carries `image`,
//! so `logo` anywhere in the block wins over `image` anywhere in the block.

use serde_json::{Map, Value};

/// Nesting limit for the field search. Deeper values are ignored.
const MAX_DEPTH: usize = 32;

/// Extract an image URL from the text of a JSON-LD script block.
///
/// Returns `None` for malformed JSON, a missing field, or an empty value.
///
/// # Examples
/// ```
/// use logo_extract::helpers::json_ld::extract_image;
///
/// let block = r#"{"@type": "Organization", "logo": {"@type": "ImageObject", "url": "/logo.png"}}"#;
/// assert_eq!(extract_image(block), Some("/logo.png".to_string()));
/// assert_eq!(extract_image("{not json"), None);
/// ```
#[must_use]
pub fn extract_image(block: &str) -> Option<String> {
    let block = block.trim();
    if block.is_empty() {
        return None;
    }

    let data: Value = match serde_json::from_str(block) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(error = %err, "skipping malformed JSON-LD block");
            return None;
        }
    };

    find_field(&data, "logo", 0).or_else(|| find_field(&data, "image", 0))
}

/// Depth-first search for the first usable value of `field`.
///
/// Objects are checked for the field before their children are visited, so
/// a top-level `logo` beats one nested inside `publisher`.
fn find_field(value: &Value, field: &str, depth: usize) -> Option<String> {
    if depth > MAX_DEPTH {
        return None;
    }

    match value {
        Value::Object(map) => {
            if let Some(url) = map.get(field).and_then(image_url) {
                return Some(url);
            }
            map.values().find_map(|child| find_field(child, field, depth + 1))
        }
        Value::Array(arr) => arr
            .iter()
            .find_map(|item| find_field(item, field, depth + 1)),
        _ => None,
    }
}

/// Interpret a `logo`/`image` value: a URL string, an `ImageObject`, or a
/// list whose first usable entry is taken.
fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Object(obj) => object_url(obj),
        Value::Array(arr) => arr.iter().find_map(|item| match item {
            Value::String(s) => non_empty(s),
            Value::Object(obj) => object_url(obj),
            _ => None,
        }),
        _ => None,
    }
}

fn object_url(obj: &Map<String, Value>) -> Option<String> {
    ["url", "contentUrl"]
        .iter()
        .filter_map(|key| obj.get(*key).and_then(Value::as_str))
        .find_map(non_empty)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
