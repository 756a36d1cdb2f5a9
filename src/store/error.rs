//! Store error types
//!
//! Defines all errors that can occur in the data store accessor.

use thiserror::Error;

/// Errors that can occur while reading the climate dataset
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite failure, including row conversion failures
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The database is missing an expected table
    #[error("Schema mismatch: missing table '{table}'")]
    SchemaMismatch { table: String },

    /// Connection lock acquisition failed
    #[error("Lock error: connection mutex poisoned")]
    Lock,
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
