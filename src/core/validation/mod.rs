//! Validation and filtering of form payloads
//!
//! Payloads are serialized to JSON, passed through field filters, then
//! checked against a declarative list of per-field validators. Every failing
//! field is reported, not just the first.

pub mod filters;
pub mod validators;

use crate::core::error::{FieldError, ValidationError};
use serde::Serialize;
use serde_json::Value;

type Validator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Declarative validation rules for one payload type
#[derive(Default)]
pub struct PayloadRules {
    rules: Vec<(&'static str, Validator)>,
}

impl PayloadRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a validator to a field
    ///
    /// A field may carry several validators; they run in insertion order.
    pub fn field<V>(mut self, name: &'static str, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rules.push((name, Box::new(validator)));
        self
    }

    /// Check a JSON payload, missing fields read as null
    pub fn check(&self, payload: &Value) -> Result<(), ValidationError> {
        let mut errors: Vec<FieldError> = Vec::new();
        for (field, validator) in &self.rules {
            // One message per field is enough for a form
            if errors.iter().any(|e| e.field == *field) {
                continue;
            }
            let value = payload.get(*field).unwrap_or(&Value::Null);
            if let Err(message) = validator(field, value) {
                errors.push(FieldError {
                    field: field.to_string(),
                    message,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Payloads that can be checked before submission
pub trait Validate: Serialize {
    /// Field rules for this payload
    fn rules() -> PayloadRules;

    /// Validate the payload as it would be sent
    fn validate(&self) -> Result<(), ValidationError> {
        let value = serde_json::to_value(self).map_err(|e| ValidationError::InvalidPayload {
            message: e.to_string(),
        })?;
        Self::rules().check(&value)
    }
}

/// Trim the top-level string fields of a payload
///
/// Surrounding whitespace is never meaningful in this dataset.
pub fn normalize<T>(payload: &T) -> Result<T, ValidationError>
where
    T: Serialize + serde::de::DeserializeOwned,
{
    let value = serde_json::to_value(payload).map_err(|e| ValidationError::InvalidPayload {
        message: e.to_string(),
    })?;
    let value = filters::apply_to_fields(value, filters::trim());
    serde_json::from_value(value).map_err(|e| ValidationError::InvalidPayload {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::validators::{positive, required};
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_check_collects_every_failing_field() {
        let rules = PayloadRules::new()
            .field("name", required())
            .field("country", required())
            .field("price", required())
            .field("price", positive());

        let err = rules
            .check(&json!({"name": "", "price": -1}))
            .unwrap_err();
        assert_eq!(err.fields(), vec!["name", "country", "price"]);
    }

    #[test]
    fn test_check_reports_one_message_per_field() {
        let rules = PayloadRules::new()
            .field("price", required())
            .field("price", positive());
        let err = rules.check(&json!({})).unwrap_err();
        match err {
            ValidationError::FieldErrors(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].message.contains("required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_ok() {
        let rules = PayloadRules::new().field("name", required());
        assert!(rules.check(&json!({"name": "Delta"})).is_ok());
        assert_eq!(rules.len(), 1);
        assert!(PayloadRules::new().is_empty());
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        seats: u32,
    }

    impl Validate for Sample {
        fn rules() -> PayloadRules {
            PayloadRules::new()
                .field("name", required())
                .field("seats", positive())
        }
    }

    #[test]
    fn test_validate_trait() {
        let ok = Sample {
            name: "A320".to_string(),
            seats: 180,
        };
        assert!(ok.validate().is_ok());

        let bad = Sample {
            name: " ".to_string(),
            seats: 0,
        };
        assert_eq!(bad.validate().unwrap_err().fields(), vec!["name", "seats"]);
    }

    #[test]
    fn test_normalize_trims_strings() {
        let sample = Sample {
            name: "  A320 ".to_string(),
            seats: 180,
        };
        assert_eq!(
            normalize(&sample).unwrap(),
            Sample {
                name: "A320".to_string(),
                seats: 180
            }
        );
    }
}
