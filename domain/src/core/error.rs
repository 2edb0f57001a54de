//! Domain error types

use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Choice not counted for agreement: {0}")]
    ExcludedChoice(String),

    #[error("Invalid orientation: {0} (expected 'directed' or 'undirected')")]
    InvalidOrientation(String),

    #[error("Invalid output format: {0} (expected 'text' or 'json')")]
    InvalidOutputFormat(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
