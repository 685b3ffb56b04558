//! Plain-text retrieval from raw file hosting.

use async_trait::async_trait;

use crate::error::ReadmeResult;

/// Fetches the body of a raw file URL.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait RawFetcher {
    /// Body text for a 200 response, `None` for any other status.
    ///
    /// Transport failures are errors.
    async fn fetch_text(&self, url: &str) -> ReadmeResult<Option<String>>;
}
