//! Roll-call identifiers, vote triples and grouped roll-calls

use super::choice::Choice;
use super::voter::VoterKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one recorded vote event (e.g. `"2265603-43"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollCallId(String);

impl RollCallId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RollCallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RollCallId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single included vote: who cast which choice on which roll-call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub roll_call: RollCallId,
    pub voter: VoterKey,
    pub choice: Choice,
}

impl VoteRecord {
    pub fn new(roll_call: RollCallId, voter: VoterKey, choice: Choice) -> Self {
        Self {
            roll_call,
            voter,
            choice,
        }
    }
}

/// One roll-call's voters bucketed by the choice they cast.
///
/// Groups and the voters inside them keep first-seen order. A voter appears
/// in at most one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollCall {
    pub id: RollCallId,
    pub groups: Vec<(Choice, Vec<VoterKey>)>,
}

impl RollCall {
    pub fn new(id: RollCallId) -> Self {
        Self {
            id,
            groups: Vec::new(),
        }
    }

    /// Voters who cast `choice`, empty if nobody did.
    pub fn voters_for(&self, choice: Choice) -> &[VoterKey] {
        self.groups
            .iter()
            .find(|(c, _)| *c == choice)
            .map(|(_, voters)| voters.as_slice())
            .unwrap_or(&[])
    }

    /// Every voter on this roll-call, across all groups.
    pub fn voters(&self) -> impl Iterator<Item = &VoterKey> {
        self.groups.iter().flat_map(|(_, voters)| voters.iter())
    }

    pub fn voter_count(&self) -> usize {
        self.groups.iter().map(|(_, voters)| voters.len()).sum()
    }

    pub(crate) fn push(&mut self, choice: Choice, voter: VoterKey) {
        match self.groups.iter_mut().find(|(c, _)| *c == choice) {
            Some((_, voters)) => voters.push(voter),
            None => self.groups.push((choice, vec![voter])),
        }
    }
}
