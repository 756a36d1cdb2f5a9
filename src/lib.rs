//! # Tradewind
//!
//! Read-only climate observations API. Serves date-range and aggregate
//! queries over a fixed dataset of precipitation and temperature readings
//! tied to weather stations, persisted in a pre-populated SQLite database.
//!
//! ## Modules
//!
//! - [`store`]: Read-only typed accessor over the `station` and
//!   `measurement` tables
//! - [`query`]: The four read operations (precipitation window, station
//!   list, most-active-station observations, range temperature stats)
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tradewind::api::{serve, ApiConfig, AppState};
//! use tradewind::query::ClimateQueries;
//! use tradewind::store::ClimateStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ClimateStore::open("climate.sqlite")?);
//!     let queries = Arc::new(ClimateQueries::new(Arc::clone(&store)));
//!
//!     let config = ApiConfig::default();
//!     let state = AppState::new(store, queries, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod query;
pub mod store;

// Re-export top-level types for convenience
pub use store::{ClimateStore, Measurement, Station, StoreError, StoreResult};

pub use query::{ClimateQueries, DateRange, QueryError, QueryResult, TemperatureStats};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, ApiConfig as ConfigApiConfig, DatabaseConfig, LoggingConfig};
