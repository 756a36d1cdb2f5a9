//! Tradewind Query Layer
//!
//! The four parametrized read operations over the climate dataset:
//!
//! - **Precipitation window**: date → precipitation mapping over the
//!   trailing year
//! - **Station list**: every distinct station code
//! - **Most-active-station observations**: temperature history of the
//!   busiest station over the trailing year
//! - **Range temperature stats**: min/avg/max temperature over a
//!   caller-supplied date range
//!
//! All operations are pure reads; the trailing-year window is anchored at
//! the most recent observation date in the dataset.
//!
//! # Example
//!
//! ```rust,ignore
//! use tradewind::query::{ClimateQueries, DateRange};
//! use tradewind::store::ClimateStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(ClimateStore::open("climate.sqlite")?);
//! let queries = ClimateQueries::new(store);
//!
//! let rainfall = queries.precipitation_last_year()?;
//! let stats = queries.temperature_stats(&DateRange::parse("2017-08-23", None)?)?;
//! ```

pub mod climate;
pub mod error;
pub mod range;

pub use climate::{ClimateQueries, TemperatureStats};
pub use error::{QueryError, QueryResult};
pub use range::{parse_date, DateRange, DATE_FORMAT};
