//! Tabular export vote source
//!
//! Loads every row of a pre-exported vote table, keeps rows whose choice is
//! Yes, No or Abstain, and maps them straight to vote triples.

use super::mapping::VoteMapper;
use crate::ports::progress::{BuildProgressNotifier, Stage};
use crate::ports::tabular_rows::TabularRowReader;
use crate::ports::vote_source::{SourceError, VoteRecordSource, VoteStream};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use votegraph_domain::RollCallId;

pub struct TabularVoteSource {
    reader: Arc<dyn TabularRowReader>,
    path: PathBuf,
}

impl TabularVoteSource {
    pub fn new(reader: Arc<dyn TabularRowReader>, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl VoteRecordSource for TabularVoteSource {
    fn describe(&self) -> String {
        format!("tabular export {}", self.path.display())
    }

    async fn load(&self, progress: &dyn BuildProgressNotifier) -> Result<VoteStream, SourceError> {
        progress.on_stage_start(Stage::Loading, None);

        let rows = self.reader.read_rows(&self.path)?;
        info!("Read {} row(s) from {}", rows.len(), self.path.display());

        let mut mapper = VoteMapper::new();
        let mut skipped = 0usize;
        for row in &rows {
            if row.roll_call_id.trim().is_empty() {
                skipped += 1;
                continue;
            }
            let roll_call = RollCallId::new(row.roll_call_id.as_str());
            mapper.push(&roll_call, Some(&row.voter_id), &row.voter_name, &row.choice);
        }
        if skipped > 0 {
            warn!("Skipped {} row(s) without a roll-call id", skipped);
        }

        progress.on_step(Stage::Loading, &format!("{} rows", rows.len()));
        progress.on_stage_complete(Stage::Loading);

        let (records, quality) = mapper.finish();
        Ok(VoteStream { records, quality })
    }
}
