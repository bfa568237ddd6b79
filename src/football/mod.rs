//! API-Football v3 access: the HTTP client, raw payload types and the
//! mappers that turn them into domain records.

pub mod http;
pub mod mappers;
pub mod types;

#[cfg(test)]
pub(crate) mod canned;

pub use http::{fetch_all_pages, ApiClient, Endpoint, Envelope, FootballApi, Paging, Query};
