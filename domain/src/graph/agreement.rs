//! Finalized agreement graph handed to emitters

use super::orientation::Orientation;
use crate::vote::VoterKey;
use serde::{Deserialize, Serialize};

/// A weighted agreement edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementEdge {
    pub source: VoterKey,
    pub target: VoterKey,
    /// Number of roll-calls on which both voters cast the same choice.
    pub weight: u64,
}

/// Number of included roll-calls a voter took part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    pub voter: VoterKey,
    pub roll_calls: u64,
}

/// Aggregation result in deterministic order.
///
/// `participation` is sorted by voter, `edges` by `(source, target)`. In
/// undirected graphs every edge has `source < target`; directed graphs carry
/// both `(a, b)` and `(b, a)` with equal weights.
///
/// # Example
///
/// ```
/// use votegraph_domain::{AgreementAggregator, Choice, Orientation, VoteRecord, VoterKey};
/// use votegraph_domain::graph::group_by_roll_call;
///
/// let votes = vec![
///     VoteRecord::new("R1".into(), VoterKey::from_display_name("A"), Choice::Yes),
///     VoteRecord::new("R1".into(), VoterKey::from_display_name("B"), Choice::Yes),
///     VoteRecord::new("R1".into(), VoterKey::from_display_name("C"), Choice::No),
/// ];
/// let roll_calls = group_by_roll_call(votes);
///
/// let graph = AgreementAggregator::aggregate(Orientation::Undirected, &roll_calls);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementGraph {
    pub orientation: Orientation,
    /// Roll-calls folded into this graph (including ones with a single voter).
    pub roll_call_count: usize,
    pub edges: Vec<AgreementEdge>,
    pub participation: Vec<Participation>,
}

impl AgreementGraph {
    /// Voters with at least one included roll-call.
    pub fn node_count(&self) -> usize {
        self.participation.len()
    }

    /// Edges as reported: directed graphs count both directions.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Distinct unordered voter pairs that agreed at least once.
    pub fn unordered_pair_count(&self) -> usize {
        match self.orientation {
            Orientation::Directed => self.edges.len() / 2,
            Orientation::Undirected => self.edges.len(),
        }
    }

    /// Agreement weight between two voters, 0 if they never agreed.
    ///
    /// Undirected graphs answer for either argument order.
    pub fn weight(&self, a: &VoterKey, b: &VoterKey) -> u64 {
        let (source, target) = match self.orientation {
            Orientation::Undirected if b < a => (b, a),
            _ => (a, b),
        };
        self.edges
            .binary_search_by(|e| (&e.source, &e.target).cmp(&(source, target)))
            .map(|i| self.edges[i].weight)
            .unwrap_or(0)
    }

    pub fn participation_of(&self, voter: &VoterKey) -> u64 {
        self.participation
            .binary_search_by(|p| p.voter.cmp(voter))
            .map(|i| self.participation[i].roll_calls)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.participation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> VoterKey {
        VoterKey::from_display_name(name)
    }

    fn edge(a: &str, b: &str, weight: u64) -> AgreementEdge {
        AgreementEdge {
            source: key(a),
            target: key(b),
            weight,
        }
    }

    #[test]
    fn test_undirected_weight_either_order() {
        let graph = AgreementGraph {
            orientation: Orientation::Undirected,
            roll_call_count: 1,
            edges: vec![edge("A", "B", 2)],
            participation: vec![],
        };
        assert_eq!(graph.weight(&key("A"), &key("B")), 2);
        assert_eq!(graph.weight(&key("B"), &key("A")), 2);
        assert_eq!(graph.weight(&key("A"), &key("C")), 0);
    }

    #[test]
    fn test_directed_pair_count_halves_edges() {
        let graph = AgreementGraph {
            orientation: Orientation::Directed,
            roll_call_count: 1,
            edges: vec![edge("A", "B", 1), edge("B", "A", 1)],
            participation: vec![],
        };
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.unordered_pair_count(), 1);
    }

    #[test]
    fn test_participation_lookup() {
        let graph = AgreementGraph {
            orientation: Orientation::Undirected,
            roll_call_count: 2,
            edges: vec![],
            participation: vec![
                Participation {
                    voter: key("A"),
                    roll_calls: 2,
                },
                Participation {
                    voter: key("B"),
                    roll_calls: 1,
                },
            ],
        };
        assert_eq!(graph.participation_of(&key("A")), 2);
        assert_eq!(graph.participation_of(&key("Z")), 0);
        assert_eq!(graph.node_count(), 2);
    }
}
