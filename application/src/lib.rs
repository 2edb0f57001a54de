//! Application layer for votegraph
//!
//! This crate contains use cases, vote source strategies, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod sources;
pub mod use_cases;

// Re-export commonly used types
pub use config::RemoteSourceParams;
pub use ports::{
    graph_emitter::{EmitError, EmittedArtifacts, GraphEmitter, OutputTarget},
    progress::{BuildProgressNotifier, NoProgress, Stage},
    roll_call_api::{CastVote, ListingPage, RollCallApi},
    tabular_rows::{TabularRow, TabularRowReader},
    vote_source::{SourceError, VoteRecordSource, VoteStream},
};
pub use sources::{PaginationWalker, RemoteVoteSource, TabularVoteSource};
pub use use_cases::build_graph::{
    BuildGraphError, BuildGraphInput, BuildGraphOutput, BuildGraphUseCase,
};
