//! Tradewind REST API
//!
//! HTTP API layer for the climate dataset, built with Axum.
//!
//! # Endpoints
//!
//! ## Climate
//! - `GET /` - Plain-text route index
//! - `GET /api/v1.0/precipitation` - Precipitation over the trailing year
//! - `GET /api/v1.0/stations` - Flat list of station codes
//! - `GET /api/v1.0/tobs` - Most-active station's temperatures over the trailing year
//! - `GET /api/v1.0/:start` - TMIN/TAVG/TMAX for dates >= start
//! - `GET /api/v1.0/:start/:end` - TMIN/TAVG/TMAX for dates in [start, end]
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use tradewind::api::{build_router, serve, ApiConfig, AppState};
//! use tradewind::query::ClimateQueries;
//! use tradewind::store::ClimateStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ClimateStore::open("climate.sqlite")?);
//!     let queries = Arc::new(ClimateQueries::new(Arc::clone(&store)));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, queries, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    // Static segments win over the :start capture, so /precipitation and
    // friends never shadow the date routes.
    let api_routes = Router::new()
        .route("/precipitation", get(routes::precipitation::precipitation))
        .route("/stations", get(routes::stations::stations))
        .route("/tobs", get(routes::tobs::tobs))
        .route("/:start", get(routes::temperature::stats_from))
        .route("/:start/:end", get(routes::temperature::stats_between));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::index::index))
        .nest("/api/v1.0", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Tradewind API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Tradewind API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
