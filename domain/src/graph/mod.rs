//! Agreement graph construction
//!
//! ```text
//! VoteRecord stream ──▶ RollCallGrouper ──▶ AgreementAggregator ──▶ AgreementGraph
//!                       (roll-call, choice)   (pairs, participation)   (sorted)
//! ```

pub mod agreement;
pub mod aggregator;
pub mod grouper;
pub mod orientation;

pub use agreement::{AgreementEdge, AgreementGraph, Participation};
pub use aggregator::AgreementAggregator;
pub use grouper::{RollCallGrouper, group_by_roll_call};
pub use orientation::Orientation;
