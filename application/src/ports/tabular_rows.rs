//! Tabular export port
//!
//! Reads a pre-exported vote table into raw rows. Column mapping and file
//! format are adapter concerns.

use crate::ports::vote_source::SourceError;
use std::path::Path;

/// One row of a vote export, values as recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularRow {
    pub roll_call_id: String,
    pub voter_id: String,
    pub voter_name: String,
    pub choice: String,
}

impl TabularRow {
    pub fn new(
        roll_call_id: impl Into<String>,
        voter_id: impl Into<String>,
        voter_name: impl Into<String>,
        choice: impl Into<String>,
    ) -> Self {
        Self {
            roll_call_id: roll_call_id.into(),
            voter_id: voter_id.into(),
            voter_name: voter_name.into(),
            choice: choice.into(),
        }
    }
}

/// Loads every row of a tabular vote export.
///
/// Fails with [`SourceError::Parse`] if the file is unreadable or malformed.
pub trait TabularRowReader: Send + Sync {
    fn read_rows(&self, path: &Path) -> Result<Vec<TabularRow>, SourceError>;
}
