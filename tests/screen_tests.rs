//! Entity screens driven through the REST client

mod backend_harness;

use airops::config::{ConsoleConfig, ScreenOverride};
use airops::entities::TicketCreateRequest;
use airops::prelude::*;
use backend_harness::{FakeBackend, dead_base_url};
use serde_json::json;

fn seed_airlines(backend: &FakeBackend) {
    let airlines = (1..=15)
        .map(|i| {
            json!({
                "airlineId": i,
                "name": format!("Airline {:02}", i),
                "country": if i % 3 == 0 { "France" } else { "Russia" },
                "contactEmail": format!("ops{}@example.com", i),
            })
        })
        .collect();
    backend.seed("airlines", airlines);
}

#[tokio::test]
async fn test_refresh_and_browse() {
    let backend = FakeBackend::start().await;
    seed_airlines(&backend);
    let api = ApiClient::new(backend.base_url()).unwrap();
    let mut screen = EntityScreen::<Airline, _>::new(api.resource::<Airline>());

    assert_eq!(screen.refresh().await.unwrap(), 15);

    let view = screen.view();
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.visible().len(), 12);
    assert_eq!(view.visible()[0].entity().name, "Airline 01");

    screen.table_mut().set_search_term("france");
    screen.table_mut().set_sort("name:desc");
    let view = screen.view();
    assert_eq!(view.filtered_count, 5);
    assert_eq!(view.visible()[0].entity().name, "Airline 15");
}

#[tokio::test]
async fn test_configured_page_size() {
    let backend = FakeBackend::start().await;
    seed_airlines(&backend);
    let api = ApiClient::new(backend.base_url()).unwrap();

    let mut config = ConsoleConfig::default();
    config.screens.insert(
        "airlines".to_string(),
        ScreenOverride {
            page_size: Some(5),
            ..Default::default()
        },
    );
    let mut screen = EntityScreen::<Airline, _>::with_config(api.resource::<Airline>(), &config);
    screen.refresh().await.unwrap();
    assert_eq!(screen.view().total_pages, 3);
}

#[tokio::test]
async fn test_edit_keeps_view_state() {
    let backend = FakeBackend::start().await;
    seed_airlines(&backend);
    let api = ApiClient::new(backend.base_url()).unwrap();
    let mut screen = EntityScreen::<Airline, _>::new(api.resource::<Airline>());
    screen.refresh().await.unwrap();
    screen.table_mut().set_search_term("airline 0");

    screen.open_edit(4).unwrap();
    let mut draft = screen.form().draft.clone();
    draft.name = "  Airline 04 Cargo ".to_string();
    let saved = screen.submit(draft).await.unwrap();

    assert_eq!(saved.name, "Airline 04 Cargo");
    assert_eq!(backend.records("airlines")[3]["name"], "Airline 04 Cargo");
    assert_eq!(screen.table().search_term(), "airline 0");
    assert!(!screen.form().open);
    assert!(!screen.notice().unwrap().is_error());
}

#[tokio::test]
async fn test_invalid_form_is_not_sent() {
    let backend = FakeBackend::start().await;
    let api = ApiClient::new(backend.base_url()).unwrap();
    let mut screen = EntityScreen::<Airline, _>::new(api.resource::<Airline>());

    screen.open_create();
    let draft = Airline {
        name: "Pobeda".to_string(),
        country: " ".to_string(),
        contact_email: "not-an-email".to_string(),
        ..Default::default()
    };
    let err = screen.submit(draft).await.unwrap_err();

    match err {
        ConsoleError::Validation(e) => {
            let fields = e.fields();
            assert!(fields.contains(&"country"));
            assert!(fields.contains(&"contactEmail"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(screen.form().open);
    assert_eq!(screen.form().draft.name, "Pobeda");
    assert!(screen.notice().unwrap().is_error());
    assert!(backend.records("airlines").is_empty());
}

#[tokio::test]
async fn test_create_only_resource_refuses_edit() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "tickets",
        vec![json!({ "ticketId": 1, "passengerName": "Ivan Petrov", "seatNumber": "12A", "price": 5400.0 })],
    );
    let api = ApiClient::new(backend.base_url()).unwrap();
    let mut screen = EntityScreen::<Ticket, _>::new(api.resource::<Ticket>());
    screen.refresh().await.unwrap();

    let err = screen.open_edit(1).unwrap_err();
    assert!(matches!(err, ConsoleError::Api(ApiError::Unsupported { .. })));

    screen.open_create();
    let saved = screen
        .submit(TicketCreateRequest {
            flight_id: Some(3),
            passenger_name: "Anna Smirnova".to_string(),
            passenger_passport: "4510 123456".to_string(),
            seat_number: "14C".to_string(),
            price: 6100.0,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(saved.ticket_id, Some(2));
    assert_eq!(screen.records().count(), 2);
}

#[tokio::test]
async fn test_delete_and_backend_failure() {
    let backend = FakeBackend::start().await;
    seed_airlines(&backend);
    let api = ApiClient::new(backend.base_url()).unwrap();
    let mut screen = EntityScreen::<Airline, _>::new(api.resource::<Airline>());
    screen.refresh().await.unwrap();

    screen.delete(1).await.unwrap();
    assert_eq!(screen.records().count(), 14);

    let err = screen.delete(1).await.unwrap_err();
    assert!(matches!(err, ConsoleError::Api(ApiError::Status { status: 404, .. })));
    assert!(screen.notice().unwrap().is_error());
}

#[tokio::test]
async fn test_unreachable_backend_sets_notice() {
    let api = ApiClient::new(dead_base_url().await).unwrap();
    let mut screen = EntityScreen::<Flight, _>::new(api.resource::<Flight>());

    assert!(screen.refresh().await.is_err());
    let notice = screen.notice().unwrap();
    assert!(notice.is_error());
    assert!(notice.message.starts_with("Failed to load flights"));

    screen.dismiss_notice();
    assert!(screen.notice().is_none());
}
