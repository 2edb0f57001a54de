//! Roll-call listing query

use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date range selecting which roll-calls a remote run covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl ListingQuery {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, DomainError> {
        if let Some(end) = end
            && end < start
        {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` dates.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, DomainError> {
        let start = parse_date(start)?;
        let end = end.map(parse_date).transpose()?;
        Self::new(start, end)
    }

    /// Label used to name output artifacts, e.g. `2023-01-01` or `2023-01-01_2023-06-30`.
    pub fn label(&self) -> String {
        match self.end {
            Some(end) => format!("{}_{}", self.start, end),
            None => self.start.to_string(),
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_only() {
        let q = ListingQuery::parse("2023-01-01", None).unwrap();
        assert_eq!(q.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(q.end.is_none());
        assert_eq!(q.label(), "2023-01-01");
    }

    #[test]
    fn test_parse_range() {
        let q = ListingQuery::parse("2023-01-01", Some("2023-06-30")).unwrap();
        assert_eq!(q.label(), "2023-01-01_2023-06-30");
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            ListingQuery::parse("01/01/2023", None),
            Err(DomainError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_end_before_start() {
        assert!(matches!(
            ListingQuery::parse("2023-06-30", Some("2023-01-01")),
            Err(DomainError::InvalidDateRange { .. })
        ));
    }
}
