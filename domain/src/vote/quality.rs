//! Non-fatal data-quality findings collected while sourcing votes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Tally of input that was dropped without failing the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityReport {
    /// Recorded choice values outside {Yes, No, Abstain}, with occurrence counts.
    pub excluded_choices: BTreeMap<String, usize>,
    /// Repeated votes by the same voter on the same roll-call (first one kept).
    pub duplicate_votes: usize,
    /// Votes whose voter name normalized to an empty key.
    pub unnamed_voters: usize,
    /// Keys shared by more than one source-side legislator id. Not resolved;
    /// the affected legislators are merged into one node.
    pub name_collisions: BTreeSet<String>,
}

impl DataQualityReport {
    pub fn record_excluded(&mut self, raw_choice: &str) {
        let label = match raw_choice.trim() {
            "" => "<blank>".to_string(),
            other => other.to_string(),
        };
        *self.excluded_choices.entry(label).or_insert(0) += 1;
    }

    pub fn record_duplicates(&mut self, count: usize) {
        self.duplicate_votes += count;
    }

    pub fn record_unnamed(&mut self) {
        self.unnamed_voters += 1;
    }

    pub fn record_collision(&mut self, key: &str) {
        self.name_collisions.insert(key.to_string());
    }

    pub fn excluded_total(&self) -> usize {
        self.excluded_choices.values().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.excluded_choices.is_empty()
            && self.duplicate_votes == 0
            && self.unnamed_voters == 0
            && self.name_collisions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_choices_tallied_by_label() {
        let mut report = DataQualityReport::default();
        report.record_excluded("Obstrução");
        report.record_excluded(" Obstrução ");
        report.record_excluded("");

        assert_eq!(report.excluded_choices["Obstrução"], 2);
        assert_eq!(report.excluded_choices["<blank>"], 1);
        assert_eq!(report.excluded_total(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_counters_accumulate() {
        let mut report = DataQualityReport::default();
        report.record_duplicates(2);
        report.record_duplicates(0);
        report.record_unnamed();
        report.record_collision("Ana_Paula");
        report.record_collision("Ana_Paula");

        assert_eq!(report.duplicate_votes, 2);
        assert_eq!(report.unnamed_voters, 1);
        assert_eq!(report.name_collisions.len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_default_is_clean() {
        assert!(DataQualityReport::default().is_clean());
    }
}
