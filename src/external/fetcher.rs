use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Narrow view of the outbound HTTP client used by the extraction pipeline.
///
/// Implementations perform exactly one GET per call and never retry. Any
/// transport failure, timeout or non-success status is an
/// [`AppError::UpstreamFetch`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> AppResult<String>;

    /// GET `url` and parse the body as JSON.
    async fn fetch_json(&self, url: &str) -> AppResult<Value> {
        let body = self.fetch_text(url).await?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::parse(url, format!("invalid JSON from {}: {}", url, e), Some(e.into()))
        })
    }
}
