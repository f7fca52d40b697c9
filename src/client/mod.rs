//! REST client for the airline-operations backend
//!
//! [`ApiClient`] owns one `reqwest::Client` and the backend base URL.
//! Typed CRUD goes through [`ResourceClient`], which is also the production
//! [`ResourceStore`]. Failures are reported once and never retried.

pub mod search;

pub use search::FlightSearch;

use crate::config::ApiConfig;
use crate::core::error::ApiError;
use crate::entities::{Operation, Resource};
use crate::storage::{ResourceStore, ensure_supported};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::time::Duration;

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for a backend base URL such as `http://localhost:8080/api`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        reqwest::Url::parse(&base_url).map_err(|e| ApiError::Unavailable {
            message: format!("invalid backend URL '{}': {}", base_url, e),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Unavailable {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the `api` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.as_deref().ok_or_else(|| ApiError::Unavailable {
            message: "no backend URL configured".to_string(),
        })?;
        Self::with_timeout(base_url, Duration::from_secs(config.timeout_secs.max(1)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Typed CRUD access to one collection
    pub fn resource<T: Resource>(&self) -> ResourceClient<T> {
        ResourceClient {
            api: self.clone(),
            _marker: PhantomData,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(method = %method, path, "backend request");

        let mut request = self.http.request(method, self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| {
            tracing::warn!(path, error = %source, "backend unreachable");
            ApiError::Transport {
                path: path.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path, status = status.as_u16(), "backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
                body,
            });
        }

        Ok(response)
    }

    async fn decode<R: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<R, ApiError> {
        let bytes = response.bytes().await.map_err(|source| {
            tracing::warn!(path, error = %source, "backend response interrupted");
            ApiError::Transport {
                path: path.to_string(),
                source,
            }
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// GET a JSON document
    pub async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let response = self.send(Method::GET, path, query, None).await?;
        Self::decode(path, response).await
    }

    /// Send a JSON body and decode the JSON answer
    pub async fn send_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: format!("failed to encode request body: {}", e),
        })?;
        let response = self.send(method, path, &[], Some(body)).await?;
        Self::decode(path, response).await
    }

    /// DELETE, ignoring any response body
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// Relay a raw request to the backend
    ///
    /// Unlike the typed calls, a non-success status is not an error here:
    /// status and body are handed back as they came.
    pub async fn forward(&self, request: ForwardRequest) -> Result<ForwardResponse, ApiError> {
        let url = match request.query.as_deref() {
            Some(query) if !query.is_empty() => format!("{}?{}", self.url(&request.path), query),
            _ => self.url(&request.path),
        };
        tracing::debug!(method = %request.method, path = %request.path, "forwarding to backend");

        let mut builder = self.http.request(request.method, url);
        if let Some(body) = request.body.filter(|b| !b.is_empty()) {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = builder.send().await.map_err(|source| {
            tracing::warn!(path = %request.path, error = %source, "backend unreachable");
            ApiError::Transport {
                path: request.path.clone(),
                source,
            }
        })?;

        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(|source| {
            tracing::warn!(path = %request.path, error = %source, "backend response interrupted");
            ApiError::Transport {
                path: request.path.clone(),
                source,
            }
        })?;

        Ok(ForwardResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

/// A request relayed verbatim by [`ApiClient::forward`]
#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    /// Path relative to the backend base URL
    pub path: String,
    /// Raw query string, without the leading `?`
    pub query: Option<String>,
    pub body: Option<Vec<u8>>,
}

/// The backend's answer to a forwarded request
#[derive(Debug, Clone)]
pub struct ForwardResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Vec<u8>,
}

/// Typed CRUD client for one resource collection
#[derive(Debug)]
pub struct ResourceClient<T> {
    api: ApiClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for ResourceClient<T> {
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        ensure_supported::<T>(Operation::List)?;
        self.api.get_json(T::PATH, &[]).await
    }

    async fn get(&self, id: i64) -> Result<T, ApiError> {
        ensure_supported::<T>(Operation::Get)?;
        self.api.get_json(&format!("{}/{}", T::PATH, id), &[]).await
    }

    async fn create(&self, payload: &T::Payload) -> Result<T, ApiError> {
        ensure_supported::<T>(Operation::Create)?;
        self.api.send_json(Method::POST, T::PATH, payload).await
    }

    async fn update(&self, id: i64, payload: &T::Payload) -> Result<T, ApiError> {
        ensure_supported::<T>(Operation::Update)?;
        self.api
            .send_json(Method::PATCH, &format!("{}/{}", T::PATH, id), payload)
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        ensure_supported::<T>(Operation::Delete)?;
        self.api.delete(&format!("{}/{}", T::PATH, id)).await
    }
}
