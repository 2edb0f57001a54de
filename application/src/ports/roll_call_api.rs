//! Remote roll-call API port
//!
//! Defines the interface for the paginated open-data service. The adapter
//! owns transport and payload decoding; pagination and vote mapping stay in
//! the application layer.

use crate::ports::vote_source::SourceError;
use async_trait::async_trait;
use votegraph_domain::{ListingQuery, PageLink, RollCallId};

/// One page of the roll-call listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    pub roll_call_ids: Vec<RollCallId>,
    /// Navigation links (`self`, `first`, `next`, `last`, ...).
    pub links: Vec<PageLink>,
}

/// A vote as reported by the API, before normalization and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastVote {
    /// Source-side legislator id, when the payload carries one.
    pub voter_id: Option<String>,
    pub voter_name: String,
    /// Recorded value, e.g. `"Sim"` or `"Obstrução"`.
    pub choice: String,
}

impl CastVote {
    pub fn new(voter_name: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            voter_id: None,
            voter_name: voter_name.into(),
            choice: choice.into(),
        }
    }

    pub fn with_voter_id(mut self, id: impl Into<String>) -> Self {
        self.voter_id = Some(id.into());
        self
    }
}

/// Access to the remote roll-call listing and per-roll-call votes.
#[async_trait]
pub trait RollCallApi: Send + Sync {
    /// Fetch a listing page. `None` issues the bare query used to discover
    /// the page count; `Some(n)` requests page `n` (1-based).
    async fn fetch_listing(
        &self,
        query: &ListingQuery,
        page: Option<u32>,
    ) -> Result<ListingPage, SourceError>;

    /// Fetch every vote cast on one roll-call.
    async fn fetch_votes(&self, roll_call: &RollCallId) -> Result<Vec<CastVote>, SourceError>;
}
