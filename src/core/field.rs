//! Field value classification and format checks

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

/// A record field seen through the table engine's comparison rules
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Missing field or JSON `null`
    Absent,
    Number(f64),
    /// A string that parses as an instant
    Date(DateTime<Utc>),
    Text(Cow<'a, str>),
}

impl<'a> FieldValue<'a> {
    /// Classify a field for sorting
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldValue::Absent,
            Some(Value::Number(n)) => n
                .as_f64()
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::Text(Cow::Owned(n.to_string()))),
            Some(Value::String(s)) => match parse_instant(s) {
                Some(instant) => FieldValue::Date(instant),
                None => FieldValue::Text(Cow::Borrowed(s.as_str())),
            },
            Some(Value::Bool(b)) => FieldValue::Text(Cow::Borrowed(if *b { "true" } else { "false" })),
            Some(other) => FieldValue::Text(Cow::Owned(other.to_string())),
        }
    }

    /// Check if the value is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Position of the value's kind when a column mixes kinds
    pub fn rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Absent => 3,
        }
    }
}

/// Render a scalar for substring search
///
/// `null`, arrays and objects never render.
pub fn search_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// Browser date-time inputs omit the seconds
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a date-like string into an instant
///
/// Accepts RFC 3339, naive date-times (read as UTC) and plain dates
/// (midnight UTC).
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    // Cheap reject before trying every format
    if s.len() < 10 || !s.as_bytes()[0].is_ascii_digit() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Field format validators for form payloads
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Phone,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a string against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Phone => Self::is_valid_phone(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        // Separators are tolerated, the digits must still fit E.164
        let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?[1-9]\d{6,14}$").unwrap());
        let compact: String = phone
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        regex.is_match(&compact)
    }
}
