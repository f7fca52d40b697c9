//! In-process stand-in for the airline REST backend
//!
//! Serves `/api/{collection}` and `/api/{collection}/{id}` from memory on
//! an ephemeral port, assigning ids on create the way the real backend
//! does, plus one search endpoint that echoes its query string.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod backend_harness;
//! use backend_harness::FakeBackend;
//! ```

#![allow(dead_code)]

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

type Collections = Arc<Mutex<HashMap<String, Vec<Value>>>>;

/// Id key of each collection's records
pub fn id_field(collection: &str) -> &'static str {
    match collection {
        "airlines" => "airlineId",
        "aircrafts" => "aircraftId",
        "aircraft-models" => "modelId",
        "aircraft-classes" => "classId",
        "airports" => "airportId",
        "flights" => "flightId",
        "crew-members" => "crewId",
        "crew-assignments" => "assignmentId",
        "tickets" => "ticketId",
        _ => "id",
    }
}

pub struct FakeBackend {
    pub addr: SocketAddr,
    collections: Collections,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let collections: Collections = Arc::default();
        let app = Router::new()
            .route("/api/flights/search", get(echo_query))
            .route("/api/broken", get(broken))
            .route("/api/{collection}", get(list).post(create))
            .route(
                "/api/{collection}/{id}",
                get(fetch).patch(update).delete(remove),
            )
            .with_state(collections.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, collections }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Insert records as if they already existed
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .extend(records);
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response()
}

async fn list(State(db): State<Collections>, Path(collection): Path<String>) -> Json<Value> {
    let db = db.lock().unwrap();
    Json(Value::Array(db.get(&collection).cloned().unwrap_or_default()))
}

async fn create(
    State(db): State<Collections>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    let key = id_field(&collection);
    let mut db = db.lock().unwrap();
    let records = db.entry(collection).or_default();
    let next = records
        .iter()
        .filter_map(|r| r[key].as_i64())
        .max()
        .unwrap_or(0)
        + 1;
    body[key] = json!(next);
    records.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn fetch(
    State(db): State<Collections>,
    Path((collection, id)): Path<(String, i64)>,
) -> Response {
    let key = id_field(&collection);
    let db = db.lock().unwrap();
    db.get(&collection)
        .and_then(|records| records.iter().find(|r| r[key] == json!(id)))
        .map(|r| Json(r.clone()).into_response())
        .unwrap_or_else(not_found)
}

async fn update(
    State(db): State<Collections>,
    Path((collection, id)): Path<(String, i64)>,
    Json(body): Json<Value>,
) -> Response {
    let key = id_field(&collection);
    let mut db = db.lock().unwrap();
    let Some(record) = db
        .get_mut(&collection)
        .and_then(|records| records.iter_mut().find(|r| r[key] == json!(id)))
    else {
        return not_found();
    };
    if let (Some(target), Some(changes)) = (record.as_object_mut(), body.as_object()) {
        for (field, value) in changes {
            target.insert(field.clone(), value.clone());
        }
    }
    Json(record.clone()).into_response()
}

async fn remove(
    State(db): State<Collections>,
    Path((collection, id)): Path<(String, i64)>,
) -> StatusCode {
    let key = id_field(&collection);
    let mut db = db.lock().unwrap();
    match db.get_mut(&collection) {
        Some(records) if records.iter().any(|r| r[key] == json!(id)) => {
            records.retain(|r| r[key] != json!(id));
            StatusCode::NO_CONTENT
        }
        _ => StatusCode::NOT_FOUND,
    }
}

async fn echo_query(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!([{ "flightId": 1, "echo": query }]))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::OK, "not json")
}

/// A base URL nothing listens on
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}
