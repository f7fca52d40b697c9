//! Reusable field filters
//!
//! These filters transform payload field values before validation

use serde_json::Value;

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Value::String(s.trim().to_string())
        } else {
            value
        }
    }
}

/// Filter: blank strings become null
///
/// Optional relations arrive from forms as `""`; the backend expects them absent.
pub fn blank_to_null() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value {
        Value::String(s) if s.trim().is_empty() => Value::Null,
        other => other,
    }
}

/// Apply a filter to every top-level field of an object payload
pub fn apply_to_fields<F>(payload: Value, filter: F) -> Value
where
    F: Fn(&str, Value) -> Value,
{
    match payload {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(field, value)| {
                    let filtered = filter(&field, value);
                    (field, filtered)
                })
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trim_removes_whitespace() {
        let f = trim();
        assert_eq!(f("name", json!("  Delta  ")), json!("Delta"));
    }

    #[test]
    fn test_trim_non_string_passthrough() {
        let f = trim();
        assert_eq!(f("crewSize", json!(42)), json!(42));
        assert_eq!(f("name", json!(null)), json!(null));
    }

    #[test]
    fn test_blank_to_null() {
        let f = blank_to_null();
        assert_eq!(f("qualification", json!("  ")), json!(null));
        assert_eq!(f("qualification", json!("Captain")), json!("Captain"));
    }

    #[test]
    fn test_apply_to_fields() {
        let payload = json!({"name": " Delta ", "country": "US ", "airlineId": 3});
        let filtered = apply_to_fields(payload, trim());
        assert_eq!(
            filtered,
            json!({"name": "Delta", "country": "US", "airlineId": 3})
        );
    }

    #[test]
    fn test_apply_to_fields_non_object_passthrough() {
        assert_eq!(apply_to_fields(json!("x"), trim()), json!("x"));
    }
}
