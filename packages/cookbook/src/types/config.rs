//! Configuration types for content queries, readme probing and scoring.

use serde::{Deserialize, Serialize};

/// Connection settings for the hosted content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,

    /// API version date, sent as `v{api_version}` in the path.
    pub api_version: String,

    /// Query the edge-cached API host instead of the live one.
    pub use_cdn: bool,

    /// Override for the API origin (tests, proxies).
    ///
    /// When unset the origin is derived from `project_id` and `use_cdn`.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: "5f7a73bz".to_string(),
            dataset: "production".to_string(),
            api_version: "2025-02-06".to_string(),
            use_cdn: false,
            base_url: None,
        }
    }
}

impl ContentConfig {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            ..Default::default()
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_cdn(mut self, use_cdn: bool) -> Self {
        self.use_cdn = use_cdn;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// API origin, without a trailing slash.
    pub fn origin(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => {
                let host = if self.use_cdn { "apicdn" } else { "api" };
                format!("https://{}.{}.sanity.io", self.project_id, host)
            }
        }
    }

    /// Full query endpoint for the configured dataset.
    pub fn query_endpoint(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.origin(),
            self.api_version,
            self.dataset
        )
    }
}

/// Settings for probing and caching project readmes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeConfig {
    /// Raw content host, e.g. `https://raw.githubusercontent.com`.
    pub raw_host: String,

    /// Branches to probe, in priority order.
    pub branches: Vec<String>,

    /// Filenames to probe on each branch, in priority order.
    pub filenames: Vec<String>,

    /// Prefix for cache keys (`{prefix}{slug}`).
    pub cache_prefix: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            raw_host: "https://raw.githubusercontent.com".to_string(),
            branches: vec!["main".to_string(), "master".to_string()],
            filenames: vec!["README.md".to_string(), "readme.md".to_string()],
            cache_prefix: "readme-".to_string(),
        }
    }
}

impl ReadmeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw_host(mut self, host: impl Into<String>) -> Self {
        self.raw_host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_branches(mut self, branches: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.branches = branches.into_iter().map(|b| b.into()).collect();
        self
    }

    pub fn with_filenames(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.filenames = names.into_iter().map(|n| n.into()).collect();
        self
    }

    /// Cache key holding the raw readme text for an item.
    pub fn text_key(&self, slug: &str) -> String {
        format!("{}{}", self.cache_prefix, slug)
    }

    /// Cache key holding the branch the readme was found on.
    pub fn branch_key(&self, slug: &str) -> String {
        format!("{}{}:branch", self.cache_prefix, slug)
    }

    /// Branch assumed for cached entries written without a branch key.
    pub fn default_branch(&self) -> &str {
        self.branches.first().map(|b| b.as_str()).unwrap_or("main")
    }
}

/// Settings for the related-apps panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Maximum related apps shown. Default: 3.
    pub limit: usize,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self { limit: 3 }
    }
}

impl RelatedConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
