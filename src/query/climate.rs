//! The four read operations over the climate dataset
//!
//! Each operation is a pure read composed from the store's typed queries.
//! The precipitation and tobs operations share a trailing-year observation
//! window anchored at the most recent date in the dataset.

use crate::query::error::{QueryError, QueryResult};
use crate::query::range::DateRange;
use crate::store::ClimateStore;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Length of the trailing observation window, in days
const WINDOW_DAYS: i64 = 365;

/// Minimum, average, and maximum temperature over a queried date range
///
/// All fields are `None` when no rows matched the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    /// Lowest temperature observation (°F)
    pub min: Option<f64>,
    /// Mean of non-null temperature observations (°F)
    pub avg: Option<f64>,
    /// Highest temperature observation (°F)
    pub max: Option<f64>,
}

/// Executes the read operations against a shared store
pub struct ClimateQueries {
    store: Arc<ClimateStore>,
}

impl ClimateQueries {
    /// Create a query layer over the given store
    pub fn new(store: Arc<ClimateStore>) -> Self {
        Self { store }
    }

    /// Start of the trailing-year window: 365 days before the most recent
    /// observation date in the dataset
    ///
    /// Signals [`QueryError::EmptyDataset`] when there are no measurements
    /// to anchor the window on.
    fn window_start(&self) -> QueryResult<NaiveDate> {
        let latest = self
            .store
            .max_measurement_date()?
            .ok_or(QueryError::EmptyDataset)?;
        Ok(latest - Duration::days(WINDOW_DAYS))
    }

    /// Precipitation readings over the trailing year, as a date → amount
    /// mapping
    ///
    /// When two measurements share a date, the last row encountered wins.
    /// Keys are sorted, so repeated calls over an unchanged store serialize
    /// identically.
    pub fn precipitation_last_year(&self) -> QueryResult<BTreeMap<NaiveDate, Option<f64>>> {
        let since = self.window_start()?;
        let mut by_date = BTreeMap::new();
        for measurement in self.store.measurements_since(since)? {
            by_date.insert(measurement.date, measurement.prcp);
        }
        Ok(by_date)
    }

    /// Every station code, in store iteration order
    pub fn station_ids(&self) -> QueryResult<Vec<String>> {
        let stations = self.store.stations()?;
        Ok(stations.into_iter().map(|s| s.station).collect())
    }

    /// The station with the highest measurement count, with that count
    ///
    /// Ties are non-deterministic: whichever group the store returns first.
    pub fn most_active_station(&self) -> QueryResult<(String, u64)> {
        self.store
            .most_active_station()?
            .ok_or(QueryError::EmptyDataset)
    }

    /// Temperature observations of the most active station over the
    /// trailing year
    ///
    /// Values only, no dates; null observations are preserved so the list
    /// length equals the station's row count within the window.
    pub fn most_active_station_tobs(&self) -> QueryResult<Vec<Option<f64>>> {
        let since = self.window_start()?;
        let (station, _) = self.most_active_station()?;
        let measurements = self.store.measurements_for_station_since(&station, since)?;
        Ok(measurements.into_iter().map(|m| m.tobs).collect())
    }

    /// Min/avg/max temperature over all measurements in the range
    ///
    /// An inverted range or an empty store yields all-`None` fields, never
    /// an error.
    pub fn temperature_stats(&self, range: &DateRange) -> QueryResult<TemperatureStats> {
        let (min, avg, max) = self.store.temperature_stats(range.start, range.end)?;
        Ok(TemperatureStats { min, avg, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::{params, Connection};
    use tempfile::TempDir;

    fn fixture(rows: &[(&str, &str, Option<f64>, Option<f64>)]) -> (ClimateQueries, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("climate.sqlite");

        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "
            CREATE TABLE station (
                id INTEGER PRIMARY KEY,
                station TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                latitude REAL,
                longitude REAL,
                elevation REAL
            );
            CREATE TABLE measurement (
                id INTEGER PRIMARY KEY,
                station TEXT NOT NULL,
                date TEXT NOT NULL,
                prcp REAL,
                tobs REAL
            );
            ",
        )
        .unwrap();

        let mut codes: Vec<&str> = rows.iter().map(|r| r.0).collect();
        codes.sort_unstable();
        codes.dedup();
        for code in codes {
            conn.execute(
                "INSERT INTO station (station, name) VALUES (?1, ?2)",
                params![code, format!("{code} TEST SITE")],
            )
            .unwrap();
        }
        for (station, date, prcp, tobs) in rows {
            conn.execute(
                "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
                params![station, date, prcp, tobs],
            )
            .unwrap();
        }
        drop(conn);

        let store = Arc::new(ClimateStore::open(&path).unwrap());
        (ClimateQueries::new(store), dir)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_precipitation_window_bounds() {
        // Max date 2017-08-23; window opens 2016-08-23 inclusive.
        let (queries, _dir) = fixture(&[
            ("USC001", "2016-08-22", Some(1.0), Some(70.0)),
            ("USC001", "2016-08-23", Some(0.8), Some(71.0)),
            ("USC001", "2017-08-23", Some(0.1), Some(80.0)),
        ]);
        let map = queries.precipitation_last_year().unwrap();

        assert_eq!(map.len(), 2);
        assert!(!map.contains_key(&date("2016-08-22")));
        assert_eq!(map[&date("2016-08-23")], Some(0.8));

        let max = date("2017-08-23");
        for key in map.keys() {
            assert!(*key >= max - Duration::days(365));
            assert!(*key <= max);
        }
    }

    #[test]
    fn test_precipitation_duplicate_date_last_wins() {
        let (queries, _dir) = fixture(&[
            ("USC001", "2017-08-23", Some(0.1), Some(80.0)),
            ("USC002", "2017-08-23", Some(0.7), Some(78.0)),
        ]);
        let map = queries.precipitation_last_year().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&date("2017-08-23")], Some(0.7));
    }

    #[test]
    fn test_precipitation_empty_dataset() {
        let (queries, _dir) = fixture(&[]);
        let err = queries.precipitation_last_year().unwrap_err();
        assert!(matches!(err, QueryError::EmptyDataset));
    }

    #[test]
    fn test_station_ids_distinct() {
        let (queries, _dir) = fixture(&[
            ("USC001", "2017-08-22", Some(0.0), Some(79.0)),
            ("USC001", "2017-08-23", Some(0.1), Some(80.0)),
            ("USC002", "2017-08-23", Some(0.7), Some(78.0)),
            ("USC003", "2017-08-23", None, None),
        ]);
        let ids = queries.station_ids().unwrap();
        assert_eq!(ids.len(), 3);

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_most_active_station_tobs_counts_window_rows() {
        // USC002 has the most rows overall, but only two fall in the window.
        let (queries, _dir) = fixture(&[
            ("USC001", "2017-08-23", Some(0.1), Some(80.0)),
            ("USC002", "2015-01-01", Some(0.2), Some(70.0)),
            ("USC002", "2015-01-02", Some(0.2), Some(70.5)),
            ("USC002", "2017-08-22", Some(0.3), Some(76.0)),
            ("USC002", "2017-08-23", Some(0.4), None),
        ]);
        let (station, count) = queries.most_active_station().unwrap();
        assert_eq!(station, "USC002");
        assert_eq!(count, 4);

        let tobs = queries.most_active_station_tobs().unwrap();
        assert_eq!(tobs, vec![Some(76.0), None]);
    }

    #[test]
    fn test_tobs_empty_dataset() {
        let (queries, _dir) = fixture(&[]);
        assert!(matches!(
            queries.most_active_station_tobs().unwrap_err(),
            QueryError::EmptyDataset
        ));
    }

    #[test]
    fn test_temperature_stats_ordering_invariant() {
        let (queries, _dir) = fixture(&[
            ("USC001", "2017-08-21", Some(0.0), Some(74.0)),
            ("USC001", "2017-08-22", Some(0.0), Some(79.0)),
            ("USC001", "2017-08-23", Some(0.1), Some(80.0)),
        ]);
        let stats = queries
            .temperature_stats(&DateRange::from(date("2017-08-21")))
            .unwrap();
        let (min, avg, max) = (stats.min.unwrap(), stats.avg.unwrap(), stats.max.unwrap());
        assert!(min <= avg && avg <= max);
        assert_eq!(min, 74.0);
        assert_eq!(max, 80.0);
    }

    #[test]
    fn test_temperature_stats_concrete_scenario() {
        let (queries, _dir) = fixture(&[
            ("USC001", "2017-08-22", Some(0.0), Some(79.0)),
            ("USC001", "2017-08-23", Some(0.10), Some(80.0)),
        ]);
        let stats = queries
            .temperature_stats(&DateRange::from(date("2017-08-23")))
            .unwrap();
        assert_eq!(stats.min, Some(80.0));
        assert_eq!(stats.avg, Some(80.0));
        assert_eq!(stats.max, Some(80.0));
    }

    #[test]
    fn test_temperature_stats_inverted_range_is_empty_not_error() {
        let (queries, _dir) = fixture(&[
            ("USC001", "2017-08-22", Some(0.0), Some(79.0)),
            ("USC001", "2017-08-23", Some(0.10), Some(80.0)),
        ]);
        let stats = queries
            .temperature_stats(&DateRange::between(date("2017-08-23"), date("2017-08-22")))
            .unwrap();
        assert_eq!(stats.min, None);
        assert_eq!(stats.avg, None);
        assert_eq!(stats.max, None);
    }

    #[test]
    fn test_temperature_stats_empty_store_is_all_none() {
        let (queries, _dir) = fixture(&[]);
        let stats = queries
            .temperature_stats(&DateRange::from(date("2017-01-01")))
            .unwrap();
        assert_eq!(stats, TemperatureStats { min: None, avg: None, max: None });
    }
}
