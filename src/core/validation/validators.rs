//! Reusable field validators
//!
//! These validators are used by [`PayloadRules`](super::PayloadRules) to
//! check form payloads before they are sent to the backend.

use crate::core::field::FieldFormat;
use serde_json::Value;

/// Validator: field is required (not null, not a blank string)
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null => Err(format!("'{}' is required", field)),
        Value::String(s) if s.trim().is_empty() => Err(format!("'{}' is required", field)),
        _ => Ok(()),
    }
}

/// Validator: number must be strictly positive
///
/// Non-numbers pass; pair with [`required`] when the field must exist.
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num <= 0.0 {
                Err(format!("'{}' must be positive (value: {})", field, num))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must match a format
///
/// Null and empty strings pass, so optional fields are only checked when filled.
pub fn format(
    format: FieldFormat,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| match value.as_str() {
        Some(s) if !s.is_empty() && !format.validate(s) => {
            Err(format!("'{}' has an invalid format (value: {})", field, s))
        }
        _ => Ok(()),
    }
}

/// Validator: date must match format
pub fn date_format(
    format: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            match chrono::NaiveDate::parse_from_str(s, format) {
                Ok(_) => Ok(()),
                Err(_) => Err(format!(
                    "'{}' must use the format {} (value: {})",
                    field, format, s
                )),
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must parse as a date or date-time
pub fn instant() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if crate::core::field::parse_instant(s).is_none() => {
            Err(format!("'{}' is not a valid date-time (value: {})", field, s))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === required() ===

    #[test]
    fn test_required_null_value_returns_error() {
        let v = required();
        let result = v("name", &json!(null));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("required"));
    }

    #[test]
    fn test_required_blank_string_returns_error() {
        let v = required();
        assert!(v("name", &json!("")).is_err());
        assert!(v("name", &json!("   ")).is_err());
    }

    #[test]
    fn test_required_values_return_ok() {
        let v = required();
        assert!(v("name", &json!("Delta")).is_ok());
        assert!(v("crewSize", &json!(2)).is_ok());
        assert!(v("model", &json!({"modelId": 1})).is_ok());
    }

    // === positive() ===

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        let v = positive();
        assert!(v("price", &json!(0)).is_err());
        let result = v("price", &json!(-5.0));
        assert!(result.unwrap_err().contains("positive"));
    }

    #[test]
    fn test_positive_accepts_positive_and_non_numbers() {
        let v = positive();
        assert!(v("price", &json!(100)).is_ok());
        assert!(v("price", &json!(0.5)).is_ok());
        assert!(v("price", &json!("n/a")).is_ok());
    }

    // === format() ===

    #[test]
    fn test_format_email() {
        let v = format(FieldFormat::Email);
        assert!(v("contactEmail", &json!("ops@delta.com")).is_ok());
        assert!(v("contactEmail", &json!("delta")).is_err());
    }

    #[test]
    fn test_format_skips_empty_and_null() {
        let v = format(FieldFormat::Phone);
        assert!(v("contactPhone", &json!("")).is_ok());
        assert!(v("contactPhone", &json!(null)).is_ok());
    }

    // === date_format() ===

    #[test]
    fn test_date_format() {
        let v = date_format("%Y-%m-%d");
        assert!(v("hireDate", &json!("2021-06-01")).is_ok());
        let result = v("hireDate", &json!("01/06/2021"));
        assert!(result.unwrap_err().contains("%Y-%m-%d"));
    }

    // === instant() ===

    #[test]
    fn test_instant() {
        let v = instant();
        assert!(v("departureTime", &json!("2024-05-01T08:15:00")).is_ok());
        assert!(v("departureTime", &json!("2024-05-01")).is_ok());
        assert!(v("departureTime", &json!("tomorrow")).is_err());
    }
}
