//! Paginated listing concepts
//!
//! - [`hint`]: reading the total page count out of a listing response's links
//! - [`query::ListingQuery`]: the date range a remote run covers

pub mod hint;
pub mod query;

pub use hint::{LAST_RELATION, PAGE_PARAMETER, PageLink, PaginationError, last_page_from_links};
pub use query::ListingQuery;
