//! Payload types of the Câmara dos Deputados open-data API (v2).
//!
//! Every response wraps its payload in `dados` and, for listings, carries
//! navigation `links`:
//!
//! ```json
//! {
//!   "dados": [{ "id": "2265603-43", "uri": "..." }],
//!   "links": [{ "rel": "last", "href": ".../votacoes?...&pagina=7&itens=200" }]
//! }
//! ```
//!
//! Only the fields the graph needs are decoded; everything else is ignored.

use serde::Deserialize;
use serde_json::Value;
use votegraph_application::{CastVote, ListingPage};
use votegraph_domain::{PageLink, RollCallId};

/// `GET /votacoes` response
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    pub dados: Vec<RollCallSummary>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One roll-call entry in a listing
#[derive(Debug, Clone, Deserialize)]
pub struct RollCallSummary {
    pub id: String,
}

/// Navigation link
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// `GET /votacoes/{id}/votos` response
#[derive(Debug, Clone, Deserialize)]
pub struct VotesResponse {
    pub dados: Vec<VoteEntry>,
}

/// One vote cast on a roll-call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEntry {
    #[serde(default)]
    pub tipo_voto: Option<String>,
    #[serde(rename = "deputado_")]
    pub deputado: Deputy,
}

/// Legislator block embedded in a vote
#[derive(Debug, Clone, Deserialize)]
pub struct Deputy {
    /// Numeric in practice; kept loose so a string id does not break decoding.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub nome: Option<String>,
}

impl Deputy {
    fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

impl From<ListingResponse> for ListingPage {
    fn from(response: ListingResponse) -> Self {
        ListingPage {
            roll_call_ids: response
                .dados
                .into_iter()
                .map(|entry| RollCallId::new(entry.id))
                .collect(),
            links: response
                .links
                .into_iter()
                .map(|link| PageLink::new(link.rel, link.href))
                .collect(),
        }
    }
}

impl From<VoteEntry> for CastVote {
    fn from(entry: VoteEntry) -> Self {
        let id = entry.deputado.id_string();
        let vote = CastVote::new(
            entry.deputado.nome.unwrap_or_default(),
            entry.tipo_voto.unwrap_or_default(),
        );
        match id {
            Some(id) => vote.with_voter_id(id),
            None => vote,
        }
    }
}
