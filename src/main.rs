//! AirOps console server
//!
//! Serves the report endpoint and the REST proxy the console frontend uses.

use airops::client::ApiClient;
use airops::config::ConsoleConfig;
use airops::server::ConsoleServer;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line arguments of the console server
#[derive(Parser, Debug)]
#[command(name = "airops-console")]
#[command(about = "Management console backend for airline operations")]
#[command(version)]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "AIROPS_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides the configuration
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("airops=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    tracing::info!(config_file = ?args.config, "Starting AirOps console");

    let mut config = ConsoleConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
        config.validate()?;
    }
    tracing::debug!(?config, "configuration loaded");

    let mut server = ConsoleServer::new().with_config(&config);

    #[cfg(feature = "postgres")]
    {
        match airops::queries::PgQueryExecutor::connect_lazy(&config.database)? {
            Some(executor) => server = server.with_query_executor(executor),
            None => tracing::warn!("no database configured, report queries are disabled"),
        }
    }

    if config.api.base_url.is_some() {
        let client = ApiClient::from_config(&config.api)?;
        tracing::info!(base_url = client.base_url(), "proxying to REST backend");
        server = server.with_upstream(client);
    } else {
        tracing::warn!("no REST backend configured, the proxy is disabled");
    }

    server.serve(&config.server.bind).await
}
