//! Remote paginated vote source
//!
//! Walks every listing page for a date range, then fetches the votes of each
//! listed roll-call. Vote requests run one at a time unless
//! [`RemoteSourceParams::max_concurrent_requests`] allows more; results are
//! consumed in listing order either way. The first failed request aborts the
//! whole load and drops any requests still in flight.

use super::mapping::VoteMapper;
use super::pagination::PaginationWalker;
use crate::config::RemoteSourceParams;
use crate::ports::progress::{BuildProgressNotifier, Stage};
use crate::ports::roll_call_api::RollCallApi;
use crate::ports::vote_source::{SourceError, VoteRecordSource, VoteStream};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};
use votegraph_domain::ListingQuery;

pub struct RemoteVoteSource {
    api: Arc<dyn RollCallApi>,
    query: ListingQuery,
    params: RemoteSourceParams,
}

impl RemoteVoteSource {
    pub fn new(api: Arc<dyn RollCallApi>, query: ListingQuery) -> Self {
        Self {
            api,
            query,
            params: RemoteSourceParams::default(),
        }
    }

    pub fn with_params(mut self, params: RemoteSourceParams) -> Self {
        self.params = params;
        self
    }
}

#[async_trait]
impl VoteRecordSource for RemoteVoteSource {
    fn describe(&self) -> String {
        match self.query.end {
            Some(end) => format!("open-data API, {} to {}", self.query.start, end),
            None => format!("open-data API, since {}", self.query.start),
        }
    }

    async fn load(&self, progress: &dyn BuildProgressNotifier) -> Result<VoteStream, SourceError> {
        let api = self.api.as_ref();
        let roll_calls = PaginationWalker::new(api)
            .collect_roll_calls(&self.query, progress)
            .await?;

        let total = roll_calls.len();
        let limit = self.params.max_concurrent_requests.max(1);
        info!(
            "Fetching votes for {} roll-call(s), {} request(s) at a time",
            total, limit
        );
        progress.on_stage_start(Stage::Votes, Some(total));

        let mut fetches = stream::iter(roll_calls.into_iter().map(|id| async move {
            let votes = api.fetch_votes(&id).await?;
            Ok::<_, SourceError>((id, votes))
        }))
        .buffered(limit);

        let mut mapper = VoteMapper::new();
        let mut done = 0usize;
        while let Some(fetched) = fetches.next().await {
            let (id, votes) = fetched?;
            done += 1;
            debug!("[{}/{}] {}: {} vote(s)", done, total, id, votes.len());

            for vote in &votes {
                mapper.push(&id, vote.voter_id.as_deref(), &vote.voter_name, &vote.choice);
            }
            progress.on_step(Stage::Votes, id.as_str());
        }
        progress.on_stage_complete(Stage::Votes);

        let (records, quality) = mapper.finish();
        Ok(VoteStream { records, quality })
    }
}
