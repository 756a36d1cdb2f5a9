//! Tradewind API Server
//!
//! Serves the read-only climate endpoints over a pre-populated SQLite
//! dataset.
//!
//! # Configuration
//!
//! Loaded from a TOML file (see `--config`) with environment overrides:
//! - `TRADEWIND_DATABASE_PATH`: Path to the SQLite climate dataset
//! - `TRADEWIND_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `TRADEWIND_API_PORT`: Port to listen on (default: 8087)
//! - `TRADEWIND_LOG_LEVEL`: Log level (default: info)
//! - `TRADEWIND_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely when set

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tradewind::api::{serve, ApiConfig, AppState};
use tradewind::config::{Config, LoggingConfig};
use tradewind::query::ClimateQueries;
use tradewind::store::ClimateStore;

/// Climate observations API server
#[derive(Debug, Parser)]
#[command(name = "tradewind", version, about)]
struct Args {
    /// Path to a TOML config file (default locations searched when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the SQLite climate dataset (overrides config)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    // CLI flags win over file and environment
    if let Some(database) = &args.database {
        config.database.path = database.display().to_string();
    }
    if let Some(host) = &args.host {
        config.api.host = host.clone();
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Tradewind API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Climate dataset: {}", config.database.path);

    // Store-connectivity failures are fatal here, never per-request
    let store = Arc::new(
        ClimateStore::open(&config.database.path)
            .with_context(|| format!("opening climate dataset at {}", config.database.path))?,
    );
    let queries = Arc::new(ClimateQueries::new(Arc::clone(&store)));

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(store, queries, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Tradewind API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "tradewind={},tower_http=debug",
            logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
