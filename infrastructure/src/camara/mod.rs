//! Câmara dos Deputados open-data API adapter

pub mod client;
pub mod protocol;

pub use client::{CamaraApiClient, CamaraClientConfig, DEFAULT_BASE_URL, MAX_PAGE_SIZE};
