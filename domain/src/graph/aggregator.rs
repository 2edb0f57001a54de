//! Pairwise agreement aggregation
//!
//! For every roll-call, each choice group contributes one increment per
//! unordered pair `{v_i, v_j}, i < j` inside the group. Pairs are never formed
//! across different choices. Every distinct voter on the roll-call gains one
//! participation, however many pairs it ends up in.
//!
//! Voters are interned to dense indices while folding so that the hot pair
//! loop only touches integers; keys are resolved back when the graph is
//! finalized.

use super::agreement::{AgreementEdge, AgreementGraph, Participation};
use super::orientation::Orientation;
use crate::vote::{RollCall, VoterKey};
use std::collections::{HashMap, HashSet};

type VoterId = usize;

/// Accumulator owned by a single aggregation pass.
#[derive(Debug)]
pub struct AgreementAggregator {
    orientation: Orientation,
    voters: Vec<VoterKey>,
    ids: HashMap<VoterKey, VoterId>,
    participation: Vec<u64>,
    weights: HashMap<(VoterId, VoterId), u64>,
    roll_calls: usize,
}

impl AgreementAggregator {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            voters: Vec::new(),
            ids: HashMap::new(),
            participation: Vec::new(),
            weights: HashMap::new(),
            roll_calls: 0,
        }
    }

    /// Fold every roll-call and finalize in one call.
    pub fn aggregate<'a>(
        orientation: Orientation,
        roll_calls: impl IntoIterator<Item = &'a RollCall>,
    ) -> AgreementGraph {
        let mut aggregator = Self::new(orientation);
        for roll_call in roll_calls {
            aggregator.fold(roll_call);
        }
        aggregator.finish()
    }

    /// Fold one roll-call's choice groups into the counters.
    pub fn fold(&mut self, roll_call: &RollCall) {
        self.roll_calls += 1;

        // A voter listed twice (in one group or across groups) only counts once.
        let mut present: HashSet<VoterId> = HashSet::with_capacity(roll_call.voter_count());

        for (_, voters) in &roll_call.groups {
            let group: Vec<VoterId> = voters
                .iter()
                .map(|voter| self.intern(voter))
                .filter(|id| present.insert(*id))
                .collect();

            for id in &group {
                self.participation[*id] += 1;
            }

            for (i, &a) in group.iter().enumerate() {
                for &b in &group[i + 1..] {
                    self.record_agreement(a, b);
                }
            }
        }
    }

    /// Single symmetric update for one agreeing pair.
    ///
    /// Directed mode writes both mirrored counters; undirected mode keeps one
    /// counter under the lower id first.
    fn record_agreement(&mut self, a: VoterId, b: VoterId) {
        if a == b {
            return;
        }
        match self.orientation {
            Orientation::Directed => {
                *self.weights.entry((a, b)).or_insert(0) += 1;
                *self.weights.entry((b, a)).or_insert(0) += 1;
            }
            Orientation::Undirected => {
                *self.weights.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
    }

    fn intern(&mut self, voter: &VoterKey) -> VoterId {
        if let Some(&id) = self.ids.get(voter) {
            return id;
        }
        let id = self.voters.len();
        self.voters.push(voter.clone());
        self.ids.insert(voter.clone(), id);
        self.participation.push(0);
        id
    }

    /// Resolve ids back to keys and sort everything for stable emission.
    pub fn finish(self) -> AgreementGraph {
        let Self {
            orientation,
            voters,
            participation,
            weights,
            roll_calls,
            ..
        } = self;

        let mut edges: Vec<AgreementEdge> = weights
            .into_iter()
            .map(|((a, b), weight)| {
                let (mut source, mut target) = (&voters[a], &voters[b]);
                if orientation == Orientation::Undirected && target < source {
                    std::mem::swap(&mut source, &mut target);
                }
                AgreementEdge {
                    source: source.clone(),
                    target: target.clone(),
                    weight,
                }
            })
            .collect();
        edges.sort_by(|x, y| (&x.source, &x.target).cmp(&(&y.source, &y.target)));

        let mut participation: Vec<Participation> = voters
            .into_iter()
            .zip(participation)
            .filter(|(_, count)| *count > 0)
            .map(|(voter, roll_calls)| Participation { voter, roll_calls })
            .collect();
        participation.sort_by(|x, y| x.voter.cmp(&y.voter));

        AgreementGraph {
            orientation,
            roll_call_count: roll_calls,
            edges,
            participation,
        }
    }
}
