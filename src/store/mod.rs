//! Data store accessor for the climate dataset
//!
//! Opens the pre-populated SQLite database read-only and exposes typed
//! queries over the `station` and `measurement` tables. The dataset is
//! loaded once, outside this system; nothing here creates, mutates, or
//! deletes rows.
//!
//! The expected schema is validated once at [`ClimateStore::open`] so that
//! a missing or mismatched database aborts process startup instead of
//! failing per-request.

pub mod error;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use types::{Measurement, Station};

use chrono::NaiveDate;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Tables the dataset must contain
const REQUIRED_TABLES: [&str; 2] = ["station", "measurement"];

/// Read-only accessor over the climate dataset
///
/// The rusqlite connection is not `Sync`, so it sits behind a mutex and the
/// store is shared as `Arc<ClimateStore>` across request handlers.
pub struct ClimateStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl std::fmt::Debug for ClimateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClimateStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ClimateStore {
    /// Open the dataset and validate its schema
    ///
    /// Fails when the file cannot be opened as a SQLite database or when a
    /// required table is missing. Callers treat this as fatal at startup.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // Read-only workload
        conn.execute_batch(
            "
            PRAGMA cache_size = 10000;
            PRAGMA temp_store = MEMORY;
            ",
        )?;

        for table in REQUIRED_TABLES {
            let present: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
                params![table],
                |row| row.get(0),
            )?;
            if !present {
                return Err(StoreError::SchemaMismatch {
                    table: table.to_string(),
                });
            }
        }

        tracing::debug!(path = %path.display(), "Opened climate dataset");

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Path of the underlying database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Lock)
    }

    /// Most recent observation date across all measurements
    ///
    /// `None` when the measurement table is empty.
    pub fn max_measurement_date(&self) -> StoreResult<Option<NaiveDate>> {
        let conn = self.conn()?;
        let max = conn.query_row("SELECT MAX(date) FROM measurement", [], |row| row.get(0))?;
        Ok(max)
    }

    /// All stations, in store iteration order
    pub fn stations(&self) -> StoreResult<Vec<Station>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, station, name, latitude, longitude, elevation FROM station",
        )?;
        let rows = stmt.query_map([], Station::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Measurements with `date >= since`, in store iteration order
    pub fn measurements_since(&self, since: NaiveDate) -> StoreResult<Vec<Measurement>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, station, date, prcp, tobs FROM measurement WHERE date >= ?1",
        )?;
        let rows = stmt.query_map(params![since], Measurement::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Measurements for one station with `date >= since`
    pub fn measurements_for_station_since(
        &self,
        station: &str,
        since: NaiveDate,
    ) -> StoreResult<Vec<Measurement>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, station, date, prcp, tobs FROM measurement
             WHERE station = ?1 AND date >= ?2",
        )?;
        let rows = stmt.query_map(params![station, since], Measurement::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Station code with the highest measurement count, with that count
    ///
    /// Ties are resolved by whichever group the store returns first.
    /// `None` when the measurement table is empty.
    pub fn most_active_station(&self) -> StoreResult<Option<(String, u64)>> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT station, COUNT(*) AS observations FROM measurement
                 GROUP BY station
                 ORDER BY observations DESC
                 LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        Ok(row)
    }

    /// MIN/AVG/MAX of `tobs` over `date >= start` (and `date <= end` when given)
    ///
    /// SQLite aggregates skip NULL observations; all three are `None` when no
    /// rows match.
    pub fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> StoreResult<(Option<f64>, Option<f64>, Option<f64>)> {
        let conn = self.conn()?;
        let stats = match end {
            Some(end) => conn.query_row(
                "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement
                 WHERE date >= ?1 AND date <= ?2",
                params![start, end],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )?,
            None => conn.query_row(
                "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement
                 WHERE date >= ?1",
                params![start],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )?,
        };
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Create a dataset file with the fixed schema and the given measurement
    /// rows. Stations are registered for every distinct code that appears.
    fn fixture(rows: &[(&str, &str, Option<f64>, Option<f64>)]) -> (ClimateStore, TempDir) {
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
                "INSERT INTO station (station, name, latitude, longitude, elevation)
                 VALUES (?1, ?2, 21.27, -157.81, 3.0)",
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

        (ClimateStore::open(&path).unwrap(), dir)
    }

    #[test]
    fn test_open_missing_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.sqlite");

        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT)")
            .unwrap();
        drop(conn);

        let err = ClimateStore::open(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::SchemaMismatch { ref table } if table == "measurement"
        ));
    }

    #[test]
    fn test_max_date_empty() {
        let (store, _dir) = fixture(&[]);
        assert_eq!(store.max_measurement_date().unwrap(), None);
    }

    #[test]
    fn test_max_date() {
        let (store, _dir) = fixture(&[
            ("USC001", "2017-08-22", Some(0.0), Some(79.0)),
            ("USC001", "2017-08-23", Some(0.10), Some(80.0)),
            ("USC002", "2017-01-01", Some(1.2), Some(71.0)),
        ]);
        let max = store.max_measurement_date().unwrap().unwrap();
        assert_eq!(max, NaiveDate::from_ymd_opt(2017, 8, 23).unwrap());
    }

    #[test]
    fn test_stations_have_full_records() {
        let (store, _dir) = fixture(&[
            ("USC001", "2017-08-22", Some(0.0), Some(79.0)),
            ("USC002", "2017-08-23", None, Some(80.0)),
        ]);
        let stations = store.stations().unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station, "USC001");
        assert_eq!(stations[0].name, "USC001 TEST SITE");
        assert_eq!(stations[0].latitude, Some(21.27));
    }

    #[test]
    fn test_measurements_since_bound_is_inclusive() {
        let (store, _dir) = fixture(&[
            ("USC001", "2017-08-21", Some(0.5), Some(78.0)),
            ("USC001", "2017-08-22", Some(0.0), Some(79.0)),
            ("USC001", "2017-08-23", None, Some(80.0)),
        ]);
        let since = NaiveDate::from_ymd_opt(2017, 8, 22).unwrap();
        let rows = store.measurements_since(since).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, since);
        assert_eq!(rows[0].prcp, Some(0.0));
        assert_eq!(rows[1].prcp, None);
    }

    #[test]
    fn test_most_active_station() {
        let (store, _dir) = fixture(&[
            ("USC001", "2017-08-21", Some(0.5), Some(78.0)),
            ("USC002", "2017-08-21", Some(0.1), Some(75.0)),
            ("USC002", "2017-08-22", Some(0.2), Some(76.0)),
            ("USC002", "2017-08-23", Some(0.3), Some(77.0)),
        ]);
        let (code, count) = store.most_active_station().unwrap().unwrap();
        assert_eq!(code, "USC002");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_most_active_station_empty() {
        let (store, _dir) = fixture(&[]);
        assert_eq!(store.most_active_station().unwrap(), None);
    }

    #[test]
    fn test_temperature_stats_skips_nulls() {
        let (store, _dir) = fixture(&[
            ("USC001", "2017-08-22", Some(0.0), Some(79.0)),
            ("USC001", "2017-08-23", Some(0.10), None),
            ("USC001", "2017-08-24", Some(0.10), Some(81.0)),
        ]);
        let start = NaiveDate::from_ymd_opt(2017, 8, 22).unwrap();
        let (min, avg, max) = store.temperature_stats(start, None).unwrap();
        assert_eq!(min, Some(79.0));
        assert_eq!(avg, Some(80.0));
        assert_eq!(max, Some(81.0));
    }

    #[test]
    fn test_temperature_stats_no_rows() {
        let (store, _dir) = fixture(&[("USC001", "2017-08-22", Some(0.0), Some(79.0))]);
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let stats = store.temperature_stats(start, None).unwrap();
        assert_eq!(stats, (None, None, None));
    }
}
