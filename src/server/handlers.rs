//! HTTP handlers of the console server

use crate::client::{ApiClient, ForwardRequest};
use crate::core::error::{ApiError, ConsoleError, QueryError};
use crate::queries::{QueryDispatcher, QueryRequest, ReportQuery};
use crate::screens::{ScreenSpec, catalog};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

/// State shared by all handlers
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Report query dispatcher, absent when no database is configured
    pub dispatcher: Option<QueryDispatcher>,
    /// REST backend behind `/api/proxy`
    pub upstream: Option<ApiClient>,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "airops-console"
    }))
}

#[derive(Debug, Serialize)]
struct QueryInfo {
    tag: &'static str,
    title: &'static str,
}

/// `GET /api/sql-queries`: the report menu
pub async fn list_queries() -> Json<Value> {
    let queries: Vec<QueryInfo> = ReportQuery::ALL
        .iter()
        .map(|q| QueryInfo {
            tag: q.tag(),
            title: q.title(),
        })
        .collect();
    Json(json!({ "data": queries }))
}

/// `POST /api/sql-queries`: run one report
pub async fn run_query(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ConsoleError> {
    let body: Value = serde_json::from_slice(&body).map_err(|e| QueryError::InvalidRequest {
        message: e.to_string(),
    })?;
    let request = QueryRequest::from_json(body)?;

    let dispatcher = state.dispatcher.as_ref().ok_or(QueryError::Unavailable)?;
    let rows = dispatcher.run(request).await?;
    Ok(Json(json!({ "data": rows })))
}

/// `GET /api/screens`: layout of every entity screen
pub async fn list_screens() -> Json<Value> {
    let screens: [ScreenSpec; 9] = catalog();
    Json(json!({ "data": screens }))
}

/// `ANY /api/proxy/{*path}`: relay a request to the REST backend
///
/// Backend statuses and bodies are passed through untouched.
pub async fn proxy(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Response, ConsoleError> {
    let upstream = state.upstream.as_ref().ok_or_else(|| ApiError::Unavailable {
        message: "no REST backend configured".to_string(),
    })?;

    let forwarded = upstream
        .forward(ForwardRequest {
            method,
            path,
            query,
            body: Some(body.to_vec()),
        })
        .await?;

    let mut headers = HeaderMap::new();
    if let Some(content_type) = forwarded.content_type {
        headers.insert(CONTENT_TYPE, content_type);
    }
    Ok((forwarded.status, headers, forwarded.body).into_response())
}
