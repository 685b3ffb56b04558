//! Typed errors for the cookbook library.
//!
//! Uses `thiserror` for library errors (not `anyhow`); the web binary
//! wraps these at its own boundary.

use thiserror::Error;

/// Top-level error for cookbook operations.
#[derive(Debug, Error)]
pub enum CookbookError {
    /// Content API query failed
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Readme probe or cache failed
    #[error("readme error: {0}")]
    Readme(#[from] ReadmeError),

    /// Key-value store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors returned by a content gateway.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP transport failed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Content API answered with a non-success status
    #[error("content API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Content API reported a query error in the response body
    #[error("query error: {0}")]
    Query(String),

    /// Response body could not be decoded
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Endpoint could not be built from configuration
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Response had no result payload
    #[error("no result returned")]
    NoResult,
}

/// Errors raised while resolving a project readme.
#[derive(Debug, Error)]
pub enum ReadmeError {
    /// HTTP transport failed while probing
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Cache lookup failed
    #[error("cache error: {0}")]
    Cache(#[from] StoreError),
}

/// Errors raised by a key-value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend is not available (e.g. no window in the browser)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Backend rejected the read or write
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result type alias for cookbook operations.
pub type Result<T> = std::result::Result<T, CookbookError>;

/// Result type alias for content gateway operations.
pub type ContentResult<T> = std::result::Result<T, ContentError>;

/// Result type alias for readme operations.
pub type ReadmeResult<T> = std::result::Result<T, ReadmeError>;

/// Result type alias for key-value store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
