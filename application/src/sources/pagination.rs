//! Pagination walker
//!
//! Discovers the total page count from the `last` link of a bare listing
//! request, then requests pages `1..=N` in order. Discovery failures surface
//! as [`SourceError::PaginationDiscovery`] before any page is walked, so no
//! roll-call votes are ever fetched for an incompletely listed range.

use crate::ports::progress::{BuildProgressNotifier, Stage};
use crate::ports::roll_call_api::RollCallApi;
use crate::ports::vote_source::SourceError;
use std::collections::HashSet;
use tracing::{debug, info};
use votegraph_domain::{ListingQuery, RollCallId, last_page_from_links};

pub struct PaginationWalker<'a> {
    api: &'a dyn RollCallApi,
}

impl<'a> PaginationWalker<'a> {
    pub fn new(api: &'a dyn RollCallApi) -> Self {
        Self { api }
    }

    /// Read the total page count from the first response.
    pub async fn discover(
        &self,
        query: &ListingQuery,
        progress: &dyn BuildProgressNotifier,
    ) -> Result<u32, SourceError> {
        progress.on_stage_start(Stage::Discovery, None);

        let first = self.api.fetch_listing(query, None).await.map_err(|e| match e {
            SourceError::Parse { what, reason } => {
                SourceError::PaginationDiscovery(format!("unparsable {}: {}", what, reason))
            }
            other => other,
        })?;
        let last_page = last_page_from_links(&first.links)?;

        info!("Listing for {} spans {} page(s)", query.label(), last_page);
        progress.on_stage_complete(Stage::Discovery);
        Ok(last_page)
    }

    /// Discover the page count, then collect roll-call ids across all pages.
    ///
    /// Ids keep listing order; an id listed on more than one page is kept once.
    pub async fn collect_roll_calls(
        &self,
        query: &ListingQuery,
        progress: &dyn BuildProgressNotifier,
    ) -> Result<Vec<RollCallId>, SourceError> {
        let last_page = self.discover(query, progress).await?;

        progress.on_stage_start(Stage::Listing, Some(last_page as usize));

        let mut seen = HashSet::new();
        let mut ids = Vec::new();

        for page in 1..=last_page {
            let listing = self.api.fetch_listing(query, Some(page)).await?;
            debug!(
                "Page {}/{}: {} roll-call(s)",
                page,
                last_page,
                listing.roll_call_ids.len()
            );

            for id in listing.roll_call_ids {
                if seen.insert(id.clone()) {
                    ids.push(id);
                }
            }
            progress.on_step(Stage::Listing, &format!("page {}/{}", page, last_page));
        }

        progress.on_stage_complete(Stage::Listing);
        info!("Listed {} roll-call(s)", ids.len());
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::roll_call_api::{CastVote, ListingPage};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use votegraph_domain::PageLink;

    /// Serves `pages` listing pages, records every requested page number.
    struct PagedApi {
        last_href: Option<String>,
        pages: u32,
        per_page: usize,
        requested: Mutex<Vec<Option<u32>>>,
        fail_page: Option<u32>,
    }

    impl PagedApi {
        fn new(last_href: Option<&str>, pages: u32) -> Self {
            Self {
                last_href: last_href.map(str::to_string),
                pages,
                per_page: 2,
                requested: Mutex::new(Vec::new()),
                fail_page: None,
            }
        }

        fn requested(&self) -> Vec<Option<u32>> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RollCallApi for PagedApi {
        async fn fetch_listing(
            &self,
            _query: &ListingQuery,
            page: Option<u32>,
        ) -> Result<ListingPage, SourceError> {
            self.requested.lock().unwrap().push(page);
            if page.is_some() && page == self.fail_page {
                return Err(SourceError::fetch("listing", "HTTP 503"));
            }
            let n = page.unwrap_or(1);
            let roll_call_ids = if n <= self.pages {
                (0..self.per_page)
                    .map(|i| RollCallId::new(format!("{}-{}", n, i)))
                    .collect()
            } else {
                Vec::new()
            };
            let links = self
                .last_href
                .iter()
                .map(|href| PageLink::new("last", href.clone()))
                .collect();
            Ok(ListingPage {
                roll_call_ids,
                links,
            })
        }

        async fn fetch_votes(&self, _roll_call: &RollCallId) -> Result<Vec<CastVote>, SourceError> {
            panic!("the walker never fetches votes");
        }
    }

    fn query() -> ListingQuery {
        ListingQuery::parse("2023-01-01", None).unwrap()
    }

    #[tokio::test]
    async fn test_fetches_exactly_declared_pages() {
        let api = PagedApi::new(Some("https://api/votacoes?pagina=3&itens=2"), 3);
        let ids = PaginationWalker::new(&api)
            .collect_roll_calls(&query(), &NoProgress)
            .await
            .unwrap();

        assert_eq!(api.requested(), vec![None, Some(1), Some(2), Some(3)]);
        assert_eq!(ids.len(), 6);
        assert_eq!(ids[0].as_str(), "1-0");
        assert_eq!(ids[5].as_str(), "3-1");
    }

    #[tokio::test]
    async fn test_missing_hint_fails_before_walking() {
        let api = PagedApi::new(None, 3);
        let err = PaginationWalker::new(&api)
            .collect_roll_calls(&query(), &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::PaginationDiscovery(_)));
        assert_eq!(api.requested(), vec![None]);
    }

    #[tokio::test]
    async fn test_page_zero_fails_before_walking() {
        let api = PagedApi::new(Some("https://api/votacoes?pagina=0"), 0);
        let err = PaginationWalker::new(&api)
            .collect_roll_calls(&query(), &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::PaginationDiscovery(_)));
        assert_eq!(api.requested(), vec![None]);
    }

    #[tokio::test]
    async fn test_page_failure_aborts_walk() {
        let mut api = PagedApi::new(Some("https://api/votacoes?pagina=3"), 3);
        api.fail_page = Some(2);
        let err = PaginationWalker::new(&api)
            .collect_roll_calls(&query(), &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::Fetch { .. }));
        assert_eq!(api.requested(), vec![None, Some(1), Some(2)]);
    }

    #[tokio::test]
    async fn test_unparsable_first_response_is_discovery_error() {
        struct Garbled;

        #[async_trait]
        impl RollCallApi for Garbled {
            async fn fetch_listing(
                &self,
                _query: &ListingQuery,
                _page: Option<u32>,
            ) -> Result<ListingPage, SourceError> {
                Err(SourceError::parse("listing response", "expected value at line 1"))
            }

            async fn fetch_votes(
                &self,
                _roll_call: &RollCallId,
            ) -> Result<Vec<CastVote>, SourceError> {
                Ok(Vec::new())
            }
        }

        let err = PaginationWalker::new(&Garbled)
            .discover(&query(), &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::PaginationDiscovery(_)));
    }

    #[tokio::test]
    async fn test_repeated_ids_across_pages_kept_once() {
        struct Overlapping;

        #[async_trait]
        impl RollCallApi for Overlapping {
            async fn fetch_listing(
                &self,
                _query: &ListingQuery,
                page: Option<u32>,
            ) -> Result<ListingPage, SourceError> {
                let ids = match page {
                    Some(2) => vec!["b", "c"],
                    _ => vec!["a", "b"],
                };
                Ok(ListingPage {
                    roll_call_ids: ids.into_iter().map(RollCallId::from).collect(),
                    links: vec![PageLink::new("last", "https://api/votacoes?pagina=2")],
                })
            }

            async fn fetch_votes(
                &self,
                _roll_call: &RollCallId,
            ) -> Result<Vec<CastVote>, SourceError> {
                Ok(Vec::new())
            }
        }

        let ids = PaginationWalker::new(&Overlapping)
            .collect_roll_calls(&query(), &NoProgress)
            .await
            .unwrap();
        let ids: Vec<_> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
