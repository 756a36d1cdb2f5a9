//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 if the service is ready to accept traffic.
/// Checks that the store answers a trivial query.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_store_health(&state) {
        true => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store_ok = check_store_health(&state);

    let status = if store_ok { "healthy" } else { "unhealthy" };
    let store_status = if store_ok { "ok" } else { "error" };

    Json(HealthResponse {
        status: status.to_string(),
        store: store_status.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Check store health
///
/// The max-date lookup is the cheapest query that exercises the connection
/// and the measurement table. An empty table is healthy; a failed query is
/// not.
fn check_store_health(state: &AppState) -> bool {
    state.store.max_measurement_date().is_ok()
}
