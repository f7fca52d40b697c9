//! Typed error handling for the console
//!
//! The table engine is total and never fails. Everything that talks to the
//! outside world (REST backend, database, configuration, form input) reports
//! through the types below. Errors are surfaced to the user and never
//! retried automatically.
//!
//! # Error Categories
//!
//! - [`ApiError`]: REST backend and proxy failures
//! - [`QueryError`]: report query dispatch and execution
//! - [`ValidationError`]: form payload validation
//! - [`ConfigError`]: configuration loading

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The main error type of the console
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// REST backend errors
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Report query errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Form validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ConsoleError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConsoleError::Api(e) => e.status_code(),
            ConsoleError::Query(e) => e.status_code(),
            ConsoleError::Validation(_) => StatusCode::BAD_REQUEST,
            ConsoleError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ConsoleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::Api(e) => e.error_code(),
            ConsoleError::Query(e) => e.error_code(),
            ConsoleError::Validation(_) => "VALIDATION_ERROR",
            ConsoleError::Config(_) => "CONFIG_ERROR",
            ConsoleError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ConsoleError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            ConsoleError::Query(QueryError::UnknownQuery { tag }) => Some(serde_json::json!({
                "query_type": tag,
                "supported": crate::queries::ReportQuery::TAGS,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            let cause = std::error::Error::source(&self).map(ToString::to_string);
            tracing::error!(
                code = self.error_code(),
                error = %self,
                cause = ?cause,
                "request failed"
            );
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// API Errors
// =============================================================================

/// Errors talking to the REST backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    ///
    /// The message leaves out `source`, which carries the backend URL.
    #[error("Request to '{path}' failed")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("'{path}' returned HTTP {status}")]
    Status {
        status: u16,
        path: String,
        body: String,
    },

    /// The response body did not match the expected shape
    #[error("Failed to decode response from '{path}': {message}")]
    Decode { path: String, message: String },

    /// The backend does not expose this operation for the resource
    #[error("Operation '{operation}' is not supported for {resource}")]
    Unsupported {
        resource: &'static str,
        operation: &'static str,
    },

    /// Record not found
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: i64 },

    /// No backend is configured
    #[error("Backend unavailable: {message}")]
    Unavailable { message: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Transport { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Status { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Decode { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Unsupported { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "API_TRANSPORT_ERROR",
            ApiError::Status { .. } => "API_STATUS_ERROR",
            ApiError::Decode { .. } => "API_DECODE_ERROR",
            ApiError::Unsupported { .. } => "API_UNSUPPORTED_OPERATION",
            ApiError::NotFound { .. } => "API_NOT_FOUND",
            ApiError::Unavailable { .. } => "API_UNAVAILABLE",
        }
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors of the report query dispatcher
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The query tag is not one of the fixed report queries
    #[error("Invalid query type '{tag}'")]
    UnknownQuery { tag: String },

    /// A filter value is malformed or inconsistent
    #[error("Invalid filter '{field}': {message}")]
    InvalidFilter { field: &'static str, message: String },

    /// The request body could not be read
    #[error("Invalid query request: {message}")]
    InvalidRequest { message: String },

    /// The database rejected or failed the statement
    ///
    /// The driver message is kept for logs only.
    #[error("Database query '{query}' failed")]
    Execution { query: &'static str, message: String },

    /// No database is configured
    #[error("Query execution is not configured")]
    Unavailable,
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::UnknownQuery { .. } => StatusCode::BAD_REQUEST,
            QueryError::InvalidFilter { .. } => StatusCode::BAD_REQUEST,
            QueryError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            QueryError::Execution { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            QueryError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::UnknownQuery { .. } => "UNKNOWN_QUERY",
            QueryError::InvalidFilter { .. } => "INVALID_FILTER",
            QueryError::InvalidRequest { .. } => "INVALID_QUERY_REQUEST",
            QueryError::Execution { .. } => "QUERY_EXECUTION_FAILED",
            QueryError::Unavailable => "QUERY_UNAVAILABLE",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors related to form payload validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields failed validation
    #[error("Validation failed: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldError>),

    /// The payload could not be inspected at all
    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Names of the fields that failed
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
            ValidationError::InvalidPayload { .. } => Vec::new(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be parsed
    #[error("Failed to parse config{}: {message}", .file.as_deref().map(|f| format!(" '{}'", f)).unwrap_or_default())]
    Parse {
        file: Option<String>,
        message: String,
    },

    /// A configuration value is invalid
    #[error("Invalid config value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

/// Result alias used across the console
pub type ConsoleResult<T> = Result<T, ConsoleError>;
