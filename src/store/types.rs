//! Record types for the climate dataset
//!
//! Explicit mappings from the two fixed tables:
//! - `Station`: a weather-observation site (`station` table)
//! - `Measurement`: one dated observation at a station (`measurement` table)
//!
//! Columns are addressed positionally by the store's SELECT statements; the
//! schema is versioned with the dataset, not reflected at runtime.

use chrono::NaiveDate;
use rusqlite::Row;
use serde::Serialize;

/// A fixed weather-observation site
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Station {
    /// Row id
    pub id: i64,
    /// Unique station code, e.g. "USC00519397"
    pub station: String,
    /// Human-readable site name
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Elevation in meters
    pub elevation: Option<f64>,
}

impl Station {
    /// Map a `SELECT id, station, name, latitude, longitude, elevation` row
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            station: row.get(1)?,
            name: row.get(2)?,
            latitude: row.get(3)?,
            longitude: row.get(4)?,
            elevation: row.get(5)?,
        })
    }
}

/// One dated observation at a station
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Measurement {
    /// Row id
    pub id: i64,
    /// Station code this observation belongs to
    pub station: String,
    /// Observation date
    pub date: NaiveDate,
    /// Precipitation in inches, absent when not recorded
    pub prcp: Option<f64>,
    /// Temperature observation in degrees Fahrenheit, absent when not recorded
    pub tobs: Option<f64>,
}

impl Measurement {
    /// Map a `SELECT id, station, date, prcp, tobs` row
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            station: row.get(1)?,
            date: row.get(2)?,
            prcp: row.get(3)?,
            tobs: row.get(4)?,
        })
    }
}
