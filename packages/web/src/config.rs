//! Server configuration loaded from environment variables

use anyhow::{Context, Result};
use cookbook::{ContentConfig, ReadmeConfig};
use dotenvy::dotenv;
use std::env;

/// Web application configuration
#[derive(Debug, Clone, Default)]
pub struct WebConfig {
    pub content: ContentConfig,
    pub readme: ReadmeConfig,
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ContentConfig::default();

        let mut content = ContentConfig::new(
            lookup("SANITY_PROJECT_ID").unwrap_or(defaults.project_id),
            lookup("SANITY_DATASET").unwrap_or(defaults.dataset),
        )
        .with_api_version(lookup("SANITY_API_VERSION").unwrap_or(defaults.api_version));

        if let Some(use_cdn) = lookup("SANITY_USE_CDN") {
            let use_cdn = use_cdn
                .trim()
                .parse::<bool>()
                .context("SANITY_USE_CDN must be true or false")?;
            content = content.with_cdn(use_cdn);
        }

        if let Some(base) = lookup("SANITY_API_BASE") {
            content = content.with_base_url(base);
        }

        let mut readme = ReadmeConfig::default();
        if let Some(host) = lookup("README_RAW_HOST") {
            readme = readme.with_raw_host(host);
        }

        Ok(Self { content, readme })
    }
}
