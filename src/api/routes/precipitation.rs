//! Precipitation Route
//!
//! - GET /api/v1.0/precipitation - Precipitation over the trailing year

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::PrecipitationResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1.0/precipitation
///
/// Returns a date → precipitation mapping covering the 365 days up to the
/// most recent observation in the dataset. 404 when the dataset is empty.
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PrecipitationResponse>> {
    let readings = state.queries.precipitation_last_year()?;
    Ok(Json(readings))
}
