//! Temperature Observations Route
//!
//! - GET /api/v1.0/tobs - Most-active station's temperatures over the
//!   trailing year

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1.0/tobs
///
/// Returns the temperature observations of the station with the most
/// measurement rows, restricted to the trailing-year window, as a flat JSON
/// array. 404 when the dataset is empty.
pub async fn tobs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Option<f64>>>> {
    let observations = state.queries.most_active_station_tobs()?;
    Ok(Json(observations))
}
