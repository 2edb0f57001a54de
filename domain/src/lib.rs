//! Domain layer for votegraph
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Roll-calls and choices
//!
//! A roll-call is one recorded vote event. Each legislator ([`VoterKey`])
//! casts a [`Choice`] on it; only Yes, No and Abstain are counted.
//!
//! ## Agreement
//!
//! Two legislators agree on a roll-call when they cast the identical choice.
//! The [`AgreementAggregator`] counts agreements per pair and roll-calls per
//! legislator, producing an [`AgreementGraph`] in either [`Orientation`].
//!
//! ## Pagination
//!
//! The remote listing is paginated; [`last_page_from_links`] reads the total
//! page count out of the first response.

pub mod config;
pub mod core;
pub mod graph;
pub mod pagination;
pub mod vote;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use graph::{
    AgreementAggregator, AgreementEdge, AgreementGraph, Orientation, Participation,
    RollCallGrouper, group_by_roll_call,
};
pub use pagination::{ListingQuery, PageLink, PaginationError, last_page_from_links};
pub use vote::{Choice, DataQualityReport, RollCall, RollCallId, VoteRecord, VoterKey};
