//! Case-insensitive substring search over configured field paths

use crate::core::field::search_text;
use crate::core::record::{FieldPath, Record};
use serde_json::Value;

/// A prepared search term
///
/// A term that is blank after trimming matches everything. Otherwise the
/// untrimmed term is lowercased once and matched as a substring.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    needle: Option<String>,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        let needle = if term.trim().is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        Self { needle }
    }

    /// Whether this term filters anything at all
    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    /// Check a record against the configured search fields
    pub fn matches<R: Record + ?Sized>(&self, record: &R, fields: &[FieldPath]) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        fields
            .iter()
            .any(|path| record.resolve(path).is_some_and(|v| value_matches(v, needle)))
    }
}

/// A scalar matches on its own text, a mapping (or list) on any direct member
fn value_matches(value: &Value, needle: &str) -> bool {
    match value {
        Value::Object(map) => map.values().any(|v| scalar_matches(v, needle)),
        Value::Array(items) => items.iter().any(|v| scalar_matches(v, needle)),
        other => scalar_matches(other, needle),
    }
}

fn scalar_matches(value: &Value, needle: &str) -> bool {
    search_text(value).is_some_and(|text| text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(paths: &[&str]) -> Vec<FieldPath> {
        paths.iter().map(|p| FieldPath::parse(p)).collect()
    }

    #[test]
    fn test_blank_term_matches_everything() {
        let term = SearchTerm::new("   ");
        assert!(!term.is_active());
        assert!(term.matches(&json!({}), &fields(&["name"])));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let term = SearchTerm::new("us");
        let record = json!({"name": "Delta", "country": "US"});
        assert!(term.matches(&record, &fields(&["name", "country"])));
        assert!(!term.matches(&record, &fields(&["name"])));
    }

    #[test]
    fn test_untrimmed_term_is_matched_verbatim() {
        let term = SearchTerm::new("air ");
        assert!(term.matches(&json!({"name": "Air France"}), &fields(&["name"])));
        assert!(!term.matches(&json!({"name": "Lufthansa Air"}), &fields(&["name"])));
    }

    #[test]
    fn test_null_and_missing_never_match() {
        let term = SearchTerm::new("null");
        let record = json!({"qualification": null});
        assert!(!term.matches(&record, &fields(&["qualification", "missing"])));
    }

    #[test]
    fn test_numbers_match_on_their_text() {
        let term = SearchTerm::new("18");
        assert!(term.matches(&json!({"capacity": 180}), &fields(&["capacity"])));
    }

    #[test]
    fn test_nested_path_resolves_scalar() {
        let term = SearchTerm::new("737");
        let record = json!({"model": {"name": "737", "manufacturer": "Boeing"}});
        assert!(term.matches(&record, &fields(&["model.name"])));
    }

    #[test]
    fn test_mapping_field_scans_its_values() {
        let term = SearchTerm::new("boeing");
        let record = json!({"model": {"name": "737", "manufacturer": "Boeing"}});
        assert!(term.matches(&record, &fields(&["model"])));
    }

    #[test]
    fn test_mapping_scan_is_one_level_deep() {
        let term = SearchTerm::new("narrow");
        let record = json!({"model": {"aircraftClass": {"name": "narrow-body"}}});
        assert!(!term.matches(&record, &fields(&["model"])));
        assert!(term.matches(&record, &fields(&["model.aircraftClass"])));
    }
}
