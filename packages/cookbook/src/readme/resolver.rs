//! Probe-and-cache resolution of project readmes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::repo::RepoRef;
use super::transform;
use crate::error::ReadmeResult;
use crate::traits::{fetcher::RawFetcher, store::KeyValueStore};
use crate::types::{app::GalleryApp, config::ReadmeConfig};

/// A readme ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedReadme {
    /// Spacing-fixed markdown.
    pub markdown: String,
    /// Rendered HTML with images removed and links rewritten.
    pub html: String,
    /// Base for relative links, e.g. `https://github.com/o/r/blob/main/`.
    pub base_url: String,
    pub branch: String,
    pub from_cache: bool,
}

/// What the detail page shows as the long description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Description {
    Readme(ResolvedReadme),
    /// Portable-text blocks from the content store.
    RichText(serde_json::Value),
    Empty,
}

/// Finds a project readme by probing branch/filename combinations.
///
/// Raw text is cached verbatim under `readme-{slug}`; transforms are
/// re-derived on every call.
pub struct ReadmeResolver<F, S> {
    fetcher: F,
    store: S,
    config: ReadmeConfig,
}

impl<F: RawFetcher, S: KeyValueStore> ReadmeResolver<F, S> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self {
            fetcher,
            store,
            config: ReadmeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReadmeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ReadmeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the readme for item `slug` hosted at `repo_url`.
    ///
    /// Returns `Ok(None)` when the URL is not a GitHub repository or no
    /// combination exists. Transport errors abort the probe.
    ///
    /// Blank text counts as missing, both in the cache and on the host.
    pub async fn resolve(
        &self,
        slug: &str,
        repo_url: &str,
    ) -> ReadmeResult<Option<ResolvedReadme>> {
        let Some(repo) = RepoRef::parse(repo_url) else {
            debug!(slug = %slug, repo_url = %repo_url, "not a GitHub repository URL");
            return Ok(None);
        };

        let cached = self
            .store
            .get(&self.config.text_key(slug))?
            .filter(|text| !text.trim().is_empty());
        if let Some(cached) = cached {
            let branch = self
                .store
                .get(&self.config.branch_key(slug))?
                .unwrap_or_else(|| self.config.default_branch().to_string());
            debug!(slug = %slug, branch = %branch, "readme cache hit");
            return Ok(Some(self.finish(&repo, &cached, branch, true)));
        }

        for branch in &self.config.branches {
            for filename in &self.config.filenames {
                let url = repo.raw_url(&self.config.raw_host, branch, filename);
                let Some(text) = self.fetcher.fetch_text(&url).await? else {
                    continue;
                };
                if text.trim().is_empty() {
                    debug!(slug = %slug, url = %url, "skipping empty readme");
                    continue;
                }

                info!(slug = %slug, url = %url, "readme found");
                self.remember(slug, &text, branch);
                return Ok(Some(self.finish(&repo, &text, branch.clone(), false)));
            }
        }

        debug!(slug = %slug, owner = %repo.owner, repo = %repo.repo, "no readme found");
        Ok(None)
    }

    fn remember(&self, slug: &str, raw: &str, branch: &str) {
        let stored = self
            .store
            .set(&self.config.text_key(slug), raw)
            .and_then(|_| self.store.set(&self.config.branch_key(slug), branch));
        if let Err(e) = stored {
            warn!(slug = %slug, error = %e, "failed to cache readme");
        }
    }

    fn finish(
        &self,
        repo: &RepoRef,
        raw: &str,
        branch: String,
        from_cache: bool,
    ) -> ResolvedReadme {
        let base_url = repo.blob_base(&branch);
        let (markdown, html) = transform::prepare(raw, &base_url);
        ResolvedReadme {
            markdown,
            html,
            base_url,
            branch,
            from_cache,
        }
    }
}

/// Long description for an app: its readme when one resolves, otherwise
/// the rich-text description from the content store.
///
/// Readme failures are logged and never surface to the caller.
pub async fn describe_app<F, S>(
    resolver: &ReadmeResolver<F, S>,
    app: &GalleryApp,
) -> Description
where
    F: RawFetcher,
    S: KeyValueStore,
{
    if let Some(repo_url) = app.github_url.as_deref() {
        match resolver.resolve(&app.slug, repo_url).await {
            Ok(Some(readme)) => return Description::Readme(readme),
            Ok(None) => {
                warn!(slug = %app.slug, "no README in repository, falling back to description")
            }
            Err(e) => {
                warn!(
                    slug = %app.slug,
                    error = %e,
                    "could not fetch README, falling back to description"
                )
            }
        }
    }

    match &app.description {
        Some(blocks) if !blocks.is_null() => Description::RichText(blocks.clone()),
        _ => Description::Empty,
    }
}
