//! HTTP adapter for the roll-call API port

use super::protocol::{ListingResponse, VotesResponse};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use votegraph_application::{CastVote, ListingPage, RollCallApi, SourceError};
use votegraph_domain::{ListingQuery, RollCallId};

/// Public endpoint of the Câmara dos Deputados open-data API
pub const DEFAULT_BASE_URL: &str = "https://dadosabertos.camara.leg.br/api/v2";

/// Largest page the listing endpoint serves
pub const MAX_PAGE_SIZE: u32 = 200;

/// Connection settings for [`CamaraApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamaraClientConfig {
    pub base_url: String,
    pub page_size: u32,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CamaraClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: MAX_PAGE_SIZE,
            timeout: Duration::from_secs(30),
            user_agent: format!("votegraph/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// [`RollCallApi`] over HTTP.
///
/// Each call is a single request. Transport failures and non-success
/// statuses become [`SourceError::Fetch`]; bodies that do not decode become
/// [`SourceError::Parse`].
pub struct CamaraApiClient {
    http: reqwest::Client,
    config: CamaraClientConfig,
}

impl CamaraApiClient {
    pub fn new(config: CamaraClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// `GET /votacoes` for the query, optionally pinned to one page.
    pub fn listing_url(&self, query: &ListingQuery, page: Option<u32>) -> String {
        let mut url = format!("{}/votacoes?dataInicio={}", self.base(), query.start);
        if let Some(end) = query.end {
            url.push_str(&format!("&dataFim={}", end));
        }
        url.push_str(&format!(
            "&ordem=DESC&ordenarPor=dataHoraRegistro&itens={}",
            self.config.page_size
        ));
        if let Some(page) = page {
            url.push_str(&format!("&pagina={}", page));
        }
        url
    }

    /// `GET /votacoes/{id}/votos`
    pub fn votes_url(&self, roll_call: &RollCallId) -> String {
        format!("{}/votacoes/{}/votos", self.base(), roll_call)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SourceError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::fetch(
                url,
                format!(
                    "HTTP error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::fetch(url, format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| SourceError::parse(url, e))
    }
}

#[async_trait]
impl RollCallApi for CamaraApiClient {
    async fn fetch_listing(
        &self,
        query: &ListingQuery,
        page: Option<u32>,
    ) -> Result<ListingPage, SourceError> {
        let url = self.listing_url(query, page);
        let response: ListingResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    async fn fetch_votes(&self, roll_call: &RollCallId) -> Result<Vec<CastVote>, SourceError> {
        let url = self.votes_url(roll_call);
        let response: VotesResponse = self.get_json(&url).await?;
        Ok(response.dados.into_iter().map(CastVote::from).collect())
    }
}
