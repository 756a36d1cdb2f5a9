//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON. Every endpoint
//! returns an explicitly typed record rather than an ad hoc map built at the
//! handler site.

use crate::query::TemperatureStats;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Precipitation endpoint body: observation date → precipitation in inches
///
/// Sorted keys keep repeated responses byte-identical over an unchanged
/// store.
pub type PrecipitationResponse = BTreeMap<NaiveDate, Option<f64>>;

/// Temperature statistics body for the range endpoints
///
/// Field names follow the dataset's climatological convention. All three
/// are null when no measurement matched the range.
#[derive(Debug, Serialize, PartialEq)]
pub struct TemperatureStatsResponse {
    /// Minimum temperature observation (°F)
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    /// Average of non-null temperature observations (°F)
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    /// Maximum temperature observation (°F)
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl From<TemperatureStats> for TemperatureStatsResponse {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            tmin: stats.min,
            tavg: stats.avg,
            tmax: stats.max,
        }
    }
}

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Store status
    pub store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
