//! HTTP raw-content fetcher.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ReadmeError, ReadmeResult};
use crate::traits::fetcher::RawFetcher;

/// Fetches raw files with a plain HTTP GET.
#[derive(Clone, Default)]
pub struct HttpRawFetcher {
    client: reqwest::Client,
}

impl HttpRawFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client (timeouts, proxies, user agent).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl RawFetcher for HttpRawFetcher {
    async fn fetch_text(&self, url: &str) -> ReadmeResult<Option<String>> {
        let network = |e: reqwest::Error| ReadmeError::Network {
            url: url.to_string(),
            source: Box::new(e),
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!(url = %url, status = status.as_u16(), "raw file not found");
            return Ok(None);
        }

        let text = response.text().await.map_err(network)?;
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_ok_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foo/bar/main/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Bar"))
            .mount(&server)
            .await;

        let url = format!("{}/foo/bar/main/README.md", server.uri());
        let text = HttpRawFetcher::new().fetch_text(&url).await.unwrap();
        assert_eq!(text.as_deref(), Some("# Bar"));
    }

    #[tokio::test]
    async fn test_other_status_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/foo/bar/main/README.md", server.uri());
        assert!(HttpRawFetcher::new().fetch_text(&url).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        // Nothing listens on port 9 (discard) in the test environment.
        let result = HttpRawFetcher::new()
            .fetch_text("http://127.0.0.1:9/foo/bar/main/README.md")
            .await;
        assert!(matches!(result, Err(ReadmeError::Network { .. })));
    }
}
