//! Range Temperature Statistics Routes
//!
//! - GET /api/v1.0/:start - TMIN/TAVG/TMAX for dates >= start
//! - GET /api/v1.0/:start/:end - TMIN/TAVG/TMAX for dates in [start, end]

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::TemperatureStatsResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::DateRange;

/// GET /api/v1.0/:start
///
/// Min/avg/max temperature over all measurements with date >= start.
/// All fields null when nothing matches; 400 when the date is malformed.
pub async fn stats_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<TemperatureStatsResponse>> {
    let range = DateRange::parse(&start, None)?;
    let stats = state.queries.temperature_stats(&range)?;
    Ok(Json(stats.into()))
}

/// GET /api/v1.0/:start/:end
///
/// Min/avg/max temperature over measurements with start <= date <= end.
/// An inverted range matches nothing and yields all-null fields.
pub async fn stats_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<TemperatureStatsResponse>> {
    let range = DateRange::parse(&start, Some(&end))?;
    let stats = state.queries.temperature_stats(&range)?;
    Ok(Json(stats.into()))
}
