// src/fetch/mod.rs
// =============================================================================
// Page retrieval.
//
// The traversal engine only knows the Fetcher trait: give it a URL, get the
// page content back or an error. The default implementation talks HTTP with
// reqwest; tests plug in in-memory fetchers.
// =============================================================================

mod http;

use crate::error::Result;
use async_trait::async_trait;

pub use http::HttpFetcher;

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Returns the full page content, or fails with a transport error.
    async fn fetch(&self, url: &str) -> Result<String>;
}
