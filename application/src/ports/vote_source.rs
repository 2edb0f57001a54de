//! Vote record source port
//!
//! Both ingestion strategies (remote paginated API and tabular export)
//! implement [`VoteRecordSource`], so grouping and aggregation never know
//! where the votes came from.

use crate::ports::progress::BuildProgressNotifier;
use async_trait::async_trait;
use thiserror::Error;
use votegraph_domain::{DataQualityReport, PaginationError, VoteRecord};

/// Fatal errors while assembling the vote set. Any of them aborts the run.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Could not discover page count: {0}")]
    PaginationDiscovery(String),

    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Could not parse {what}: {reason}")]
    Parse { what: String, reason: String },
}

impl SourceError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        SourceError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(what: impl Into<String>, reason: impl ToString) -> Self {
        SourceError::Parse {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the stage that failed, for user-facing reporting.
    pub fn stage(&self) -> &'static str {
        match self {
            SourceError::PaginationDiscovery(_) => "discovery",
            SourceError::Fetch { .. } => "fetch",
            SourceError::Parse { .. } => "parse",
        }
    }
}

impl From<PaginationError> for SourceError {
    fn from(err: PaginationError) -> Self {
        SourceError::PaginationDiscovery(err.to_string())
    }
}

/// Fully materialized input for one run.
#[derive(Debug, Clone, Default)]
pub struct VoteStream {
    /// Included triples only (Yes / No / Abstain).
    pub records: Vec<VoteRecord>,
    /// What was dropped on the way, and why.
    pub quality: DataQualityReport,
}

/// A strategy that produces the complete vote set for a run.
#[async_trait]
pub trait VoteRecordSource: Send + Sync {
    /// Short human-readable description (used in logs and summaries).
    fn describe(&self) -> String;

    /// Load every included vote, or fail without partial output.
    async fn load(&self, progress: &dyn BuildProgressNotifier) -> Result<VoteStream, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(
            SourceError::PaginationDiscovery("x".to_string()).stage(),
            "discovery"
        );
        assert_eq!(SourceError::fetch("http://x", "timeout").stage(), "fetch");
        assert_eq!(SourceError::parse("votes.csv", "bad row").stage(), "parse");
    }

    #[test]
    fn test_pagination_error_converts_to_discovery() {
        let err: SourceError = PaginationError::MissingLastLink.into();
        assert!(matches!(err, SourceError::PaginationDiscovery(_)));
        assert_eq!(
            err.to_string(),
            "Could not discover page count: response has no 'last' link"
        );
    }
}
