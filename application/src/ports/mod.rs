//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod graph_emitter;
pub mod progress;
pub mod roll_call_api;
pub mod tabular_rows;
pub mod vote_source;
