//! Roll-call grouping
//!
//! Buckets the flat triple stream by roll-call id, then by choice. The whole
//! stream for a run is materialized up front, so grouping happens in one pass
//! with no early eviction.

use crate::vote::{RollCall, RollCallId, VoteRecord, VoterKey};
use std::collections::{HashMap, HashSet};

/// Incremental grouper over [`VoteRecord`]s.
///
/// Roll-calls come out in first-seen order. A voter recorded more than once
/// on the same roll-call keeps the first recorded choice; later records are
/// rejected by [`push`](Self::push) and counted as duplicates.
#[derive(Debug, Default)]
pub struct RollCallGrouper {
    roll_calls: Vec<RollCall>,
    index: HashMap<RollCallId, usize>,
    seen: Vec<HashSet<VoterKey>>,
    duplicates: usize,
}

impl RollCallGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record. Returns `false` when the voter already voted on this roll-call.
    pub fn push(&mut self, record: VoteRecord) -> bool {
        let slot = match self.index.get(&record.roll_call) {
            Some(&slot) => slot,
            None => {
                let slot = self.roll_calls.len();
                self.index.insert(record.roll_call.clone(), slot);
                self.roll_calls.push(RollCall::new(record.roll_call));
                self.seen.push(HashSet::new());
                slot
            }
        };

        if !self.seen[slot].insert(record.voter.clone()) {
            self.duplicates += 1;
            return false;
        }

        self.roll_calls[slot].push(record.choice, record.voter);
        true
    }

    pub fn duplicate_votes(&self) -> usize {
        self.duplicates
    }

    pub fn finish(self) -> Vec<RollCall> {
        self.roll_calls
    }
}

/// Group a complete stream in one call.
pub fn group_by_roll_call(records: impl IntoIterator<Item = VoteRecord>) -> Vec<RollCall> {
    let mut grouper = RollCallGrouper::new();
    for record in records {
        grouper.push(record);
    }
    grouper.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vote::Choice;

    fn record(rc: &str, voter: &str, choice: Choice) -> VoteRecord {
        VoteRecord::new(rc.into(), VoterKey::from_display_name(voter), choice)
    }

    fn key(name: &str) -> VoterKey {
        VoterKey::from_display_name(name)
    }

    #[test]
    fn test_groups_by_roll_call_then_choice() {
        let grouped = group_by_roll_call(vec![
            record("R1", "A", Choice::Yes),
            record("R2", "A", Choice::No),
            record("R1", "B", Choice::Yes),
            record("R1", "C", Choice::No),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].id.as_str(), "R1");
        assert_eq!(grouped[0].voters_for(Choice::Yes), &[key("A"), key("B")]);
        assert_eq!(grouped[0].voters_for(Choice::No), &[key("C")]);
        assert_eq!(grouped[1].id.as_str(), "R2");
        assert_eq!(grouped[1].voters_for(Choice::No), &[key("A")]);
    }

    #[test]
    fn test_duplicate_vote_keeps_first_choice() {
        let mut grouper = RollCallGrouper::new();
        assert!(grouper.push(record("R1", "A", Choice::Yes)));
        assert!(!grouper.push(record("R1", "A", Choice::No)));
        assert!(grouper.push(record("R2", "A", Choice::No)));

        assert_eq!(grouper.duplicate_votes(), 1);

        let grouped = grouper.finish();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].voters_for(Choice::Yes), &[key("A")]);
        assert!(grouped[0].voters_for(Choice::No).is_empty());
    }

    #[test]
    fn test_empty_stream() {
        assert!(group_by_roll_call(Vec::new()).is_empty());
    }
}
