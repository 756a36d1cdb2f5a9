//! Index Route
//!
//! Human-readable listing of the available routes.
//!
//! - GET / - Plain-text route index

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

const ROUTE_INDEX: &str = "\
Welcome to the Tradewind Climate API
Available routes:
  /api/v1.0/precipitation
  /api/v1.0/stations
  /api/v1.0/tobs
  /api/v1.0/<start>
  /api/v1.0/<start>/<end>
Dates use the YYYY-MM-DD format.
";

/// GET /
///
/// Returns the route index as plain text.
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        ROUTE_INDEX,
    )
}
