//! Report query execution

use super::{BoundQuery, QueryRequest, ReportQuery};
use crate::core::error::QueryError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

#[cfg(feature = "postgres")]
use crate::config::DatabaseConfig;
#[cfg(feature = "postgres")]
use crate::core::error::ConfigError;
#[cfg(feature = "postgres")]
use sqlx::PgPool;

/// Runs a bound report query and returns its rows as JSON objects
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn fetch_rows(&self, query: &BoundQuery) -> Result<Vec<Value>, QueryError>;
}

/// Wrap a report statement so each row comes back as one JSON object
///
/// The ordering sits on the outer query; PostgreSQL does not carry a
/// subquery's order through to the enclosing select.
pub fn row_json_sql(query: ReportQuery) -> String {
    format!(
        "SELECT row_to_json(r) AS row FROM ({}) r ORDER BY r.{}",
        query.statement(),
        query.order_by()
    )
}

/// PostgreSQL executor backed by a `sqlx::PgPool`
///
/// Rows are converted with `row_to_json` so column names become object
/// keys and numeric/timestamp columns keep their JSON types.
#[cfg(feature = "postgres")]
#[derive(Clone, Debug)]
pub struct PgQueryExecutor {
    pool: PgPool,
}

#[cfg(feature = "postgres")]
impl PgQueryExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a pool that connects on first use
    ///
    /// Returns `None` when no database is configured.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Option<Self>, ConfigError> {
        let Some(url) = config.connection_url()? else {
            return Ok(None);
        };
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&url)
            .map_err(|e| ConfigError::Invalid {
                field: "database".to_string(),
                message: e.to_string(),
            })?;
        Ok(Some(Self::new(pool)))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(feature = "postgres")]
#[async_trait]
impl QueryExecutor for PgQueryExecutor {
    async fn fetch_rows(&self, query: &BoundQuery) -> Result<Vec<Value>, QueryError> {
        let sql = row_json_sql(query.query);
        let filters = &query.filters;

        let rows = sqlx::query_as::<_, (Value,)>(&sql)
            .bind(filters.start_date)
            .bind(filters.end_date)
            .bind(filters.airline_id)
            .bind(filters.airport_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| QueryError::Execution {
                query: query.query.tag(),
                message: e.to_string(),
            })?;

        Ok(rows.into_iter().map(|(row,)| row).collect())
    }
}

/// Entry point of the report endpoint
///
/// Parses the request, binds the filters and runs the statement. Driver
/// errors are logged here and reduced to a generic message for the caller.
#[derive(Clone)]
pub struct QueryDispatcher {
    executor: Arc<dyn QueryExecutor>,
}

impl QueryDispatcher {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    pub async fn run(&self, request: QueryRequest) -> Result<Vec<Value>, QueryError> {
        let bound = request.bind()?;
        self.execute(&bound).await
    }

    pub async fn execute(&self, bound: &BoundQuery) -> Result<Vec<Value>, QueryError> {
        tracing::info!(query = %bound.query, filters = ?bound.filters, "running report query");

        match self.executor.fetch_rows(bound).await {
            Ok(rows) => {
                tracing::debug!(query = %bound.query, rows = rows.len(), "report query finished");
                Ok(rows)
            }
            Err(e) => {
                if let QueryError::Execution { message, .. } = &e {
                    tracing::error!(query = %bound.query, error = %message, "database query failed");
                }
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for QueryDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryDispatcher").finish_non_exhaustive()
    }
}
