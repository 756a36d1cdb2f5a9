//! Stations Route
//!
//! - GET /api/v1.0/stations - Flat list of station codes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1.0/stations
///
/// Returns every station code as a JSON array, in store iteration order.
pub async fn stations(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    let ids = state.queries.station_ids()?;
    Ok(Json(ids))
}
