//! Record ordering for the table engine

use crate::core::field::FieldValue;
use crate::core::query::SortSpec;
use crate::core::record::Record;
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Classify a value and fold text to lowercase
fn sort_key(value: Option<&Value>) -> FieldValue<'_> {
    match FieldValue::classify(value) {
        FieldValue::Text(text) => FieldValue::Text(Cow::Owned(text.to_lowercase())),
        other => other,
    }
}

fn compare_keys(left: &FieldValue<'_>, right: &FieldValue<'_>, descending: bool) -> Ordering {
    let ordering = match (left, right) {
        (FieldValue::Absent, FieldValue::Absent) => return Ordering::Equal,
        (FieldValue::Absent, _) => return Ordering::Greater,
        (_, FieldValue::Absent) => return Ordering::Less,
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        // Kinds never interleave: numbers, then dates, then text
        _ => left.rank().cmp(&right.rank()),
    };

    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Compare two field values under a sort direction
///
/// Absent values always sort last, whatever the direction. Two numbers
/// compare numerically, two dates by instant, two texts case-insensitively.
/// Values of different kinds order numbers before dates before text.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, descending: bool) -> Ordering {
    compare_keys(&sort_key(a), &sort_key(b), descending)
}

/// Stable sort of record references by a top-level field
pub fn sort_records<'a, R: Record + ?Sized>(records: &mut [&'a R], spec: &SortSpec) {
    let descending = spec.is_descending();
    let mut keyed: Vec<(FieldValue<'a>, &'a R)> = records
        .iter()
        .map(|&record| (sort_key(record.field(&spec.field)), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, descending));

    for (slot, (_, record)) in records.iter_mut().zip(keyed) {
        *slot = record;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_sorts_last_both_directions() {
        let present = json!(100);
        assert_eq!(compare_values(None, Some(&present), false), Ordering::Greater);
        assert_eq!(compare_values(None, Some(&present), true), Ordering::Greater);
        assert_eq!(compare_values(Some(&present), None, true), Ordering::Less);
        assert_eq!(
            compare_values(Some(&json!(null)), Some(&present), true),
            Ordering::Greater
        );
        assert_eq!(compare_values(None, Some(&json!(null)), false), Ordering::Equal);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let nine = json!(9);
        let ten = json!(10.5);
        assert_eq!(compare_values(Some(&nine), Some(&ten), false), Ordering::Less);
        assert_eq!(compare_values(Some(&nine), Some(&ten), true), Ordering::Greater);
    }

    #[test]
    fn test_dates_compare_by_instant() {
        let early = json!("2024-01-02T23:00:00+00:00");
        let late = json!("2024-01-03T00:30:00+02:00");
        // Text order would agree; the offset makes `late` the earlier instant
        assert_eq!(compare_values(Some(&early), Some(&late), false), Ordering::Greater);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let a = json!("alpha");
        let b = json!("Bravo");
        assert_eq!(compare_values(Some(&a), Some(&b), false), Ordering::Less);
        assert_eq!(compare_values(Some(&a), Some(&b), true), Ordering::Greater);
        assert_eq!(
            compare_values(Some(&json!("DELTA")), Some(&json!("delta")), false),
            Ordering::Equal
        );
    }

    #[test]
    fn test_mixed_kinds_order_by_kind() {
        let number = json!(5);
        let date = json!("2024-01-05");
        let text = json!("abc");
        assert_eq!(compare_values(Some(&number), Some(&date), false), Ordering::Less);
        assert_eq!(compare_values(Some(&date), Some(&text), false), Ordering::Less);
        assert_eq!(compare_values(Some(&number), Some(&text), true), Ordering::Greater);
        assert_eq!(compare_values(Some(&text), None, true), Ordering::Less);
    }

    #[test]
    fn test_mixed_kinds_are_transitive() {
        // 9 < 10 numerically, while "10a" sits between them as text
        let nine = json!(9);
        let ten = json!(10);
        let text = json!("10a");
        assert_eq!(compare_values(Some(&nine), Some(&ten), false), Ordering::Less);
        assert_eq!(compare_values(Some(&ten), Some(&text), false), Ordering::Less);
        assert_eq!(compare_values(Some(&nine), Some(&text), false), Ordering::Less);
    }

    #[test]
    fn test_sort_mixed_column_groups_kinds() {
        let records: Vec<Value> = (0..600)
            .map(|i| match i % 4 {
                0 => json!({"id": i, "v": i}),
                1 => json!({"id": i, "v": format!("{}a", i)}),
                2 => json!({"id": i, "v": format!("2024-01-{:02}", i % 28 + 1)}),
                _ => json!({"id": i, "v": null}),
            })
            .collect();
        let mut refs: Vec<&Value> = records.iter().collect();
        sort_records(&mut refs, &SortSpec::parse("v:desc").unwrap());

        let kinds: Vec<u8> = refs
            .iter()
            .map(|r| FieldValue::classify(r.get("v")).rank())
            .collect();
        // Descending reverses the kinds but keeps absent values last
        let absent = FieldValue::Absent.rank();
        let present = kinds.iter().take_while(|k| **k != absent).count();
        assert_eq!(present, 450);
        assert!(kinds[present..].iter().all(|k| *k == absent));
        assert!(kinds[..present].windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(refs.len(), 600);
    }

    #[test]
    fn test_sort_records_is_stable() {
        let records = [
            json!({"id": 1, "country": "US"}),
            json!({"id": 2, "country": "FR"}),
            json!({"id": 3, "country": "us"}),
            json!({"id": 4, "country": "FR"}),
        ];
        let mut refs: Vec<&Value> = records.iter().collect();
        sort_records(&mut refs, &SortSpec::parse("country").unwrap());
        let ids: Vec<i64> = refs.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_ignores_nested_paths() {
        let records = [json!({"model": {"name": "B"}}), json!({"model": {"name": "A"}})];
        let mut refs: Vec<&Value> = records.iter().collect();
        // "model.name" is a top-level key lookup, absent on both records
        sort_records(&mut refs, &SortSpec::parse("model.name").unwrap());
        assert_eq!(refs[0]["model"]["name"], "B");
    }
}
