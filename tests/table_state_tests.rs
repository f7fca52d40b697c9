//! Behaviour of the table engine over plain JSON records

use airops::prelude::*;
use serde_json::{Value, json};

fn names(records: &[&Value]) -> Vec<String> {
    records
        .iter()
        .map(|r| r["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn three_airlines() -> Vec<Value> {
    vec![
        json!({"name": "Delta", "country": "US"}),
        json!({"name": "Alpha", "country": "FR"}),
        json!({"name": "Charlie", "country": "US"}),
    ]
}

fn name_country_table(page_size: usize) -> TableState {
    TableState::new(
        TableConfig::new(["name", "country"])
            .with_default_sort("name:asc")
            .with_page_size(page_size),
    )
}

// === Scenarios ===

#[test]
fn test_sorted_pages() {
    let records = three_airlines();
    let mut state = name_country_table(2);

    let view = state.view(&records);
    assert_eq!(view.total_pages, 2);
    assert_eq!(names(view.visible()), vec!["Alpha", "Charlie"]);

    state.next_page(view.total_pages);
    let view = state.view(&records);
    assert_eq!(names(view.visible()), vec!["Delta"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let records = three_airlines();
    let mut state = name_country_table(10);
    state.set_search_term("us");

    let view = state.view(&records);
    assert_eq!(view.filtered_count, 2);
    assert_eq!(view.total_items, 3);
    assert_eq!(names(view.visible()), vec!["Charlie", "Delta"]);
}

#[test]
fn test_search_reaches_nested_fields() {
    let records = vec![
        json!({"registrationNumber": "RA-1", "model": {"name": "737", "manufacturer": "Boeing"}}),
        json!({"registrationNumber": "RA-2", "model": {"name": "A320", "manufacturer": "Airbus"}}),
    ];
    let mut state = TableState::new(TableConfig::new(["model.name"]));
    state.set_search_term("737");

    let view = state.view(&records);
    assert_eq!(view.filtered_count, 1);
    assert_eq!(view.visible()[0]["registrationNumber"], "RA-1");
}

#[test]
fn test_object_field_matches_through_its_members() {
    let records = vec![
        json!({"id": 1, "model": {"name": "737"}}),
        json!({"id": 2, "model": {"name": "A320"}}),
    ];
    let mut state = TableState::new(TableConfig::new(["model"]));
    state.set_search_term("a32");

    let view = state.view(&records);
    assert_eq!(view.filtered_count, 1);
    assert_eq!(view.visible()[0]["id"], 2);
}

#[test]
fn test_absent_values_sort_last_when_descending() {
    let records = vec![
        json!({"name": "A", "price": null}),
        json!({"name": "B", "price": 100}),
    ];
    let state = TableState::new(TableConfig::new(["name"]).with_default_sort("price:desc"));

    let view = state.view(&records);
    assert_eq!(names(view.visible()), vec!["B", "A"]);
}

// === View state ===

#[test]
fn test_setters_reset_to_first_page() {
    let records: Vec<Value> = (0..30).map(|i| json!({"name": format!("n{:02}", i)})).collect();
    let mut state = TableState::new(TableConfig::new(["name"]).with_page_size(5));

    state.set_current_page(4);
    state.set_search_term("");
    assert_eq!(state.current_page(), 1);

    state.set_current_page(4);
    state.set_sort(state.sort().to_string());
    assert_eq!(state.current_page(), 1);

    state.set_current_page(4);
    state.set_page_size(5);
    assert_eq!(state.current_page(), 1);

    assert_eq!(state.view(&records).visible().len(), 5);
}

#[test]
fn test_empty_search_keeps_input_order() {
    let records = three_airlines();
    let state = TableState::new(TableConfig::new(["name"]));

    let view = state.view(&records);
    assert_eq!(names(view.matched()), vec!["Delta", "Alpha", "Charlie"]);
}

#[test]
fn test_blank_search_is_no_filter() {
    let records = three_airlines();
    let mut state = name_country_table(10);
    state.set_search_term("   ");
    assert_eq!(state.view(&records).filtered_count, 3);
}

#[test]
fn test_no_match_gives_zero_pages() {
    let records = three_airlines();
    let mut state = name_country_table(2);
    state.set_search_term("zzz");

    let view = state.view(&records);
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert!(view.visible().is_empty());
    assert_eq!(view.pagination().item_range(), None);
}

#[test]
fn test_page_past_end_renders_empty() {
    let records = three_airlines();
    let mut state = name_country_table(2);
    state.set_current_page(9);

    let view = state.view(&records);
    assert!(view.visible().is_empty());
    assert_eq!(view.filtered_count, 3);
}

#[test]
fn test_navigation_stays_in_bounds() {
    let records = three_airlines();
    let mut state = name_country_table(2);

    state.previous_page();
    assert_eq!(state.current_page(), 1);

    let total = state.view(&records).total_pages;
    state.next_page(total);
    state.next_page(total);
    assert_eq!(state.current_page(), 2);
}

#[test]
fn test_reset_restores_construction_state() {
    let mut state = name_country_table(2);
    state.set_search_term("us");
    state.set_sort("country:desc");
    state.set_page_size(50);
    state.set_current_page(3);

    state.reset();
    assert_eq!(state.search_term(), "");
    assert_eq!(state.sort(), "name:asc");
    assert_eq!(state.page_size(), 2);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_date_fields_sort_chronologically() {
    let records = vec![
        json!({"name": "late", "departureTime": "2024-03-10T08:00:00Z"}),
        json!({"name": "early", "departureTime": "2024-03-02T21:15:00"}),
        json!({"name": "middle", "departureTime": "2024-03-05"}),
    ];
    let state =
        TableState::new(TableConfig::new(["name"]).with_default_sort("departureTime:asc"));
    assert_eq!(
        names(state.view(&records).visible()),
        vec!["early", "middle", "late"]
    );
}

// === Typed rows ===

#[test]
fn test_rows_of_typed_entities() {
    let airlines = vec![
        Airline {
            airline_id: Some(1),
            name: "Pobeda".to_string(),
            country: "Russia".to_string(),
            ..Default::default()
        },
        Airline {
            airline_id: Some(2),
            name: "Air France".to_string(),
            country: "France".to_string(),
            ..Default::default()
        },
    ];
    let rows: Vec<Row<Airline>> = airlines.into_iter().map(|a| Row::new(a).unwrap()).collect();

    let mut state = TableState::new(TableConfig::new(["name", "country"]).with_default_sort("name"));
    state.set_search_term("FRANCE");

    let view = state.view(&rows);
    assert_eq!(view.filtered_count, 1);
    assert_eq!(view.visible()[0].entity().airline_id, Some(2));
}
