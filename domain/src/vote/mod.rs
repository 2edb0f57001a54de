//! Vote records
//!
//! - [`voter::VoterKey`]: normalized legislator identity
//! - [`choice::Choice`]: the three counted stances
//! - [`roll_call`]: roll-call ids, vote triples and grouped roll-calls
//! - [`quality::DataQualityReport`]: non-fatal findings about the input

pub mod choice;
pub mod quality;
pub mod roll_call;
pub mod voter;

pub use choice::Choice;
pub use quality::DataQualityReport;
pub use roll_call::{RollCall, RollCallId, VoteRecord};
pub use voter::VoterKey;
