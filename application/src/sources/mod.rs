//! Vote record source strategies
//!
//! | Strategy | Input | Transport port |
//! |----------|-------|----------------|
//! | [`RemoteVoteSource`] | date range | [`RollCallApi`](crate::ports::roll_call_api::RollCallApi) |
//! | [`TabularVoteSource`] | exported table | [`TabularRowReader`](crate::ports::tabular_rows::TabularRowReader) |
//!
//! Both normalize voter names and filter choices through the same mapper.

mod mapping;
pub mod pagination;
pub mod remote;
pub mod tabular;

pub use pagination::PaginationWalker;
pub use remote::RemoteVoteSource;
pub use tabular::TabularVoteSource;
