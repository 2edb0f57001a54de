//! Last-page hint extraction
//!
//! The listing endpoint embeds navigation links in every response. The link
//! with `rel = "last"` points at the final page; its `pagina` query parameter
//! is the total page count.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query parameter carrying the page number in listing links.
pub const PAGE_PARAMETER: &str = "pagina";

/// Relation name of the link that points at the final page.
pub const LAST_RELATION: &str = "last";

/// Navigation link as returned alongside a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub rel: String,
    pub href: String,
}

impl PageLink {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// Why the total page count could not be discovered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("response has no 'last' link")]
    MissingLastLink,

    #[error("last-page link has no 'pagina' parameter: {0}")]
    MissingPageParameter(String),

    #[error("last-page link has an invalid page number '{0}'")]
    InvalidPageNumber(String),
}

/// Total page count declared by the `last` link.
///
/// Page numbers start at 1; a declared last page of 0 is rejected.
pub fn last_page_from_links(links: &[PageLink]) -> Result<u32, PaginationError> {
    let link = links
        .iter()
        .find(|l| l.rel == LAST_RELATION)
        .ok_or(PaginationError::MissingLastLink)?;

    let raw = page_parameter(&link.href)
        .ok_or_else(|| PaginationError::MissingPageParameter(link.href.clone()))?;

    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(PaginationError::InvalidPageNumber(raw.to_string())),
        Ok(page) => Ok(page),
    }
}

fn page_parameter(href: &str) -> Option<&str> {
    let query = href.split_once('?').map(|(_, q)| q)?;
    let query = query.split('#').next().unwrap_or(query);
    query.split('&').find_map(|pair| match pair.split_once('=') {
        Some((key, value)) if key == PAGE_PARAMETER => Some(value),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://dadosabertos.camara.leg.br/api/v2/votacoes";

    fn links(last_href: &str) -> Vec<PageLink> {
        vec![
            PageLink::new("self", format!("{BASE}?dataInicio=2023-01-01&pagina=1")),
            PageLink::new("next", format!("{BASE}?dataInicio=2023-01-01&pagina=2")),
            PageLink::new("first", format!("{BASE}?dataInicio=2023-01-01&pagina=1")),
            PageLink::new("last", last_href),
        ]
    }

    #[test]
    fn test_reads_page_from_middle_of_query() {
        let href = format!("{BASE}?dataInicio=2023-01-01&ordem=DESC&pagina=3&itens=200");
        assert_eq!(last_page_from_links(&links(&href)), Ok(3));
    }

    #[test]
    fn test_reads_page_at_end_of_query() {
        let href = format!("{BASE}?dataInicio=2023-01-01&pagina=17");
        assert_eq!(last_page_from_links(&links(&href)), Ok(17));
    }

    #[test]
    fn test_missing_last_link() {
        let only_self = vec![PageLink::new("self", format!("{BASE}?pagina=1"))];
        assert_eq!(
            last_page_from_links(&only_self),
            Err(PaginationError::MissingLastLink)
        );
        assert_eq!(last_page_from_links(&[]), Err(PaginationError::MissingLastLink));
    }

    #[test]
    fn test_missing_page_parameter() {
        let href = format!("{BASE}?dataInicio=2023-01-01");
        assert!(matches!(
            last_page_from_links(&links(&href)),
            Err(PaginationError::MissingPageParameter(_))
        ));
    }

    #[test]
    fn test_page_zero_rejected() {
        let href = format!("{BASE}?pagina=0");
        assert_eq!(
            last_page_from_links(&links(&href)),
            Err(PaginationError::InvalidPageNumber("0".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_page_rejected() {
        let href = format!("{BASE}?pagina=abc&itens=200");
        assert_eq!(
            last_page_from_links(&links(&href)),
            Err(PaginationError::InvalidPageNumber("abc".to_string()))
        );
    }

    #[test]
    fn test_similar_parameter_names_ignored() {
        let href = format!("{BASE}?subpagina=9&pagina=2");
        assert_eq!(last_page_from_links(&links(&href)), Ok(2));
    }
}
