//! Server functions wrapping the content gateway.
//!
//! Content is always loaded server-side; only readme probing runs in the
//! browser.

use cookbook::{AppLookup, GalleryApp, ReadmeConfig, Resource};
use dioxus::prelude::*;

#[cfg(feature = "server")]
mod backend {
    use std::sync::OnceLock;

    use cookbook::{Cookbook, ReadmeConfig, SanityClient};
    use dioxus::prelude::ServerFnError;

    use crate::config::WebConfig;

    pub struct Backend {
        pub cookbook: Cookbook<SanityClient>,
        pub readme: ReadmeConfig,
    }

    static BACKEND: OnceLock<Backend> = OnceLock::new();

    /// Shared backend, built from the environment on first use.
    pub fn get() -> Result<&'static Backend, ServerFnError> {
        if let Some(backend) = BACKEND.get() {
            return Ok(backend);
        }

        let config = WebConfig::from_env().map_err(|e| {
            tracing::error!(error = %e, "Invalid configuration");
            ServerFnError::new(e.to_string())
        })?;
        tracing::info!(
            project_id = %config.content.project_id,
            dataset = %config.content.dataset,
            "Content gateway configured"
        );

        let backend = Backend {
            cookbook: Cookbook::new(SanityClient::new(config.content)),
            readme: config.readme,
        };
        Ok(BACKEND.get_or_init(|| backend))
    }
}

/// All gallery apps, newest first
#[server]
pub async fn fetch_gallery_apps() -> Result<Vec<GalleryApp>, ServerFnError> {
    Ok(backend::get()?.cookbook.gallery_apps().await)
}

/// One app with its related apps
#[server]
pub async fn fetch_app_detail(slug: String) -> Result<AppLookup, ServerFnError> {
    Ok(backend::get()?.cookbook.app_detail(&slug).await)
}

/// All curated resources, most recent first
#[server]
pub async fn fetch_resources() -> Result<Vec<Resource>, ServerFnError> {
    Ok(backend::get()?.cookbook.resources().await)
}

/// Readme probing settings for the browser
#[server]
pub async fn fetch_readme_config() -> Result<ReadmeConfig, ServerFnError> {
    Ok(backend::get()?.readme.clone())
}
