//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::query::ClimateQueries;
use crate::store::ClimateStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only store over the climate dataset
    pub store: Arc<ClimateStore>,
    /// Query layer for the read operations
    pub queries: Arc<ClimateQueries>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(store: Arc<ClimateStore>, queries: Arc<ClimateQueries>, config: ApiConfig) -> Self {
        Self {
            store,
            queries,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8087,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
