//! Page retrieval: one GET per record, no caching, no retries.

mod http;
mod url;

use async_trait::async_trait;

use crate::error::FetchError;

pub use http::{reconstitute_html, HttpFetcher};
pub use url::normalize_url;

/// Retrieves the markup of a single page.
///
/// Implementations must be shareable across pool units; they are only ever
/// used through `&self`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
