//! ConsoleServer: fluent builder for the console HTTP server

use super::handlers::{self, AppState};
use crate::client::ApiClient;
use crate::config::ConsoleConfig;
use crate::queries::{QueryDispatcher, QueryExecutor};
use anyhow::Result;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{any, get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the console server
///
/// Both backends are optional: without a query executor the report endpoint
/// answers 503, without an upstream the proxy does.
///
/// # Example
///
/// ```ignore
/// ConsoleServer::new()
///     .with_query_executor(PgQueryExecutor::new(pool))
///     .with_upstream(ApiClient::new("http://localhost:8080/api")?)
///     .serve("127.0.0.1:3000")
///     .await?;
/// ```
pub struct ConsoleServer {
    executor: Option<Arc<dyn QueryExecutor>>,
    upstream: Option<ApiClient>,
    allowed_origins: Vec<String>,
    custom_routes: Vec<Router>,
}

impl ConsoleServer {
    pub fn new() -> Self {
        Self {
            executor: None,
            upstream: None,
            allowed_origins: Vec::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Take CORS origins from the configuration
    pub fn with_config(mut self, config: &ConsoleConfig) -> Self {
        self.allowed_origins = config.server.allowed_origins.clone();
        self
    }

    /// Set the database behind `/api/sql-queries`
    pub fn with_query_executor(mut self, executor: impl QueryExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Set the REST backend behind `/api/proxy`
    pub fn with_upstream(mut self, client: ApiClient) -> Self {
        self.upstream = Some(client);
        self
    }

    /// Allow cross-origin requests; `"*"` allows any origin
    pub fn with_allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    /// Add routes that are merged next to the built-in ones
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the router
    pub fn build(self) -> Result<Router> {
        let state = AppState {
            dispatcher: self.executor.map(QueryDispatcher::new),
            upstream: self.upstream,
        };
        tracing::info!(
            queries = state.dispatcher.is_some(),
            upstream = ?state.upstream.as_ref().map(ApiClient::base_url),
            "building console router"
        );

        let mut app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/healthz", get(handlers::health_check))
            .route(
                "/api/sql-queries",
                get(handlers::list_queries).post(handlers::run_query),
            )
            .route("/api/screens", get(handlers::list_screens))
            .route("/api/proxy/{*path}", any(handlers::proxy))
            .with_state(state);

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        if let Some(cors) = cors_layer(&self.allowed_origins)? {
            app = app.layer(cors);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve with graceful shutdown on SIGTERM and Ctrl+C
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Console listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ConsoleServer {
    fn default() -> Self {
        Self::new()
    }
}

fn cors_layer(origins: &[String]) -> Result<Option<CorsLayer>> {
    if origins.is_empty() {
        return Ok(None);
    }
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return Ok(Some(layer.allow_origin(Any)));
    }

    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("invalid CORS origin: {}", e))?;
    Ok(Some(layer.allow_origin(AllowOrigin::list(origins))))
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
