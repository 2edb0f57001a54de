//! Raw vote → [`VoteRecord`] mapping shared by every source strategy.
//!
//! Keeping normalization in one place guarantees that a legislator gets the
//! same [`VoterKey`] whether their votes came from the API or from a table.

use std::collections::HashMap;
use tracing::{debug, warn};
use votegraph_domain::{Choice, DataQualityReport, RollCallId, VoteRecord, VoterKey};

/// Accumulates included records and data-quality findings.
#[derive(Debug, Default)]
pub(crate) struct VoteMapper {
    records: Vec<VoteRecord>,
    quality: DataQualityReport,
    ids_by_key: HashMap<VoterKey, String>,
}

impl VoteMapper {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Map one raw vote. Excluded choices and unnamed voters are tallied and skipped.
    pub(crate) fn push(
        &mut self,
        roll_call: &RollCallId,
        voter_id: Option<&str>,
        voter_name: &str,
        raw_choice: &str,
    ) {
        let Some(choice) = Choice::from_recorded(raw_choice) else {
            debug!(
                "Excluding '{}' cast by {} on {}",
                raw_choice.trim(),
                voter_name.trim(),
                roll_call
            );
            self.quality.record_excluded(raw_choice);
            return;
        };

        let voter = VoterKey::from_display_name(voter_name);
        if voter.is_empty() {
            warn!("Skipping vote with blank voter name on {}", roll_call);
            self.quality.record_unnamed();
            return;
        }

        if let Some(id) = voter_id.map(str::trim).filter(|id| !id.is_empty()) {
            self.check_collision(&voter, id);
        }

        self.records.push(VoteRecord::new(roll_call.clone(), voter, choice));
    }

    fn check_collision(&mut self, voter: &VoterKey, id: &str) {
        match self.ids_by_key.get(voter) {
            Some(known) if known != id => {
                if !self.quality.name_collisions.contains(voter.as_str()) {
                    warn!(
                        "Legislators {} and {} share the name key {}; their votes are merged",
                        known, id, voter
                    );
                }
                self.quality.record_collision(voter.as_str());
            }
            Some(_) => {}
            None => {
                self.ids_by_key.insert(voter.clone(), id.to_string());
            }
        }
    }

    pub(crate) fn finish(self) -> (Vec<VoteRecord>, DataQualityReport) {
        (self.records, self.quality)
    }
}
