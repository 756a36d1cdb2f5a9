//! Date parsing and caller-supplied date ranges

use crate::query::error::{QueryError, QueryResult};
use chrono::NaiveDate;

/// Calendar date format used throughout the dataset and the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a caller-supplied calendar date
///
/// Strict `YYYY-MM-DD` only; anything else is an invalid-parameter
/// condition, not a best-effort guess.
pub fn parse_date(value: &str) -> QueryResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| QueryError::InvalidDate {
        value: value.to_string(),
    })
}

/// A caller-supplied date range: closed at the start, optionally closed at
/// the end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound
    pub start: NaiveDate,
    /// Inclusive upper bound, unbounded when `None`
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Range from `start` onward
    pub fn from(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Range over `[start, end]`
    ///
    /// An inverted range (`start > end`) is accepted; it simply matches no
    /// rows.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Parse path-parameter strings into a range
    pub fn parse(start: &str, end: Option<&str>) -> QueryResult<Self> {
        let start = parse_date(start)?;
        let end = end.map(parse_date).transpose()?;
        Ok(Self { start, end })
    }
}
