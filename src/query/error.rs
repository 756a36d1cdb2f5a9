//! Query error types
//!
//! Defines all error conditions that can occur while answering the read
//! operations.

use thiserror::Error;

/// Errors that can occur during query operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// The dataset holds no measurements, so no observation window exists
    #[error("no measurements in the dataset")]
    EmptyDataset,

    /// A caller-supplied date did not parse
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Store layer error
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryError::InvalidDate {
            value: "08/23/2017".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date '08/23/2017': expected YYYY-MM-DD"
        );
    }
}
