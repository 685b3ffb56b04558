//! Page-level loading on top of a content gateway.
//!
//! Pages never see a content error: list loads degrade to an empty list
//! and a failed detail load renders as "not found".

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::Result;
use crate::related::rank_related;
use crate::traits::content::ContentGateway;
use crate::types::{app::GalleryApp, config::RelatedConfig, resource::Resource};

/// An app with its most related neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDetail {
    pub app: GalleryApp,
    pub related: Vec<GalleryApp>,
}

/// Outcome of looking an app up by slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppLookup {
    Found(AppDetail),
    NotFound { slug: String },
}

impl AppLookup {
    pub fn found(&self) -> Option<&AppDetail> {
        match self {
            AppLookup::Found(detail) => Some(detail),
            AppLookup::NotFound { .. } => None,
        }
    }
}

/// Loads what the gallery, detail and resources pages display.
pub struct Cookbook<G> {
    gateway: G,
    related: RelatedConfig,
}

impl<G: ContentGateway> Cookbook<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            related: RelatedConfig::default(),
        }
    }

    pub fn with_related_config(mut self, related: RelatedConfig) -> Self {
        self.related = related;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// All gallery apps, newest first.
    pub async fn gallery_apps(&self) -> Vec<GalleryApp> {
        match self.gateway.list_apps().await {
            Ok(apps) => apps,
            Err(e) => {
                error!(error = %e, "Error fetching gallery apps");
                Vec::new()
            }
        }
    }

    /// All curated resources, most recent first.
    pub async fn resources(&self) -> Vec<Resource> {
        match self.gateway.list_resources().await {
            Ok(resources) => resources,
            Err(e) => {
                error!(error = %e, "Error fetching resources");
                Vec::new()
            }
        }
    }

    /// The app for `slug` together with its related apps.
    pub async fn app_detail(&self, slug: &str) -> AppLookup {
        let app = match self.gateway.find_app(slug).await {
            Ok(Some(app)) => app,
            Ok(None) => {
                info!(slug = %slug, "App not found");
                return AppLookup::NotFound {
                    slug: slug.to_string(),
                };
            }
            Err(e) => {
                error!(slug = %slug, error = %e, "Error fetching app");
                return AppLookup::NotFound {
                    slug: slug.to_string(),
                };
            }
        };

        let related = match self.related_apps(&app).await {
            Ok(related) => related,
            Err(e) => {
                error!(slug = %slug, error = %e, "Error fetching related apps");
                Vec::new()
            }
        };

        AppLookup::Found(AppDetail { app, related })
    }

    async fn related_apps(&self, app: &GalleryApp) -> Result<Vec<GalleryApp>> {
        let candidates = self.gateway.list_apps_except(&app.id).await?;
        Ok(rank_related(app, &candidates, self.related.limit)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        sample_apps, sample_resources, MockContentCall, MockContentGateway, MockContentOp,
    };

    fn related_slugs(lookup: &AppLookup) -> Vec<&str> {
        lookup
            .found()
            .map(|d| d.related.iter().map(|a| a.slug.as_str()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_gallery_apps_preserve_order() {
        let cookbook = Cookbook::new(MockContentGateway::new().with_apps(sample_apps()));
        let slugs: Vec<String> = cookbook
            .gallery_apps()
            .await
            .into_iter()
            .map(|a| a.slug)
            .collect();
        assert_eq!(slugs, vec!["churn", "sales", "forecast", "docs"]);
    }

    #[tokio::test]
    async fn test_list_failures_yield_empty() {
        let gateway = MockContentGateway::new()
            .with_apps(sample_apps())
            .with_resources(sample_resources())
            .fail(MockContentOp::ListApps)
            .fail(MockContentOp::ListResources);
        let cookbook = Cookbook::new(gateway);

        assert!(cookbook.gallery_apps().await.is_empty());
        assert!(cookbook.resources().await.is_empty());
    }

    #[tokio::test]
    async fn test_app_detail_ranks_related() {
        let gateway = MockContentGateway::new().with_apps(sample_apps());
        let cookbook = Cookbook::new(gateway.clone());

        let lookup = cookbook.app_detail("churn").await;

        // sales: use case + Retail + SQL = 3; forecast: Retail + Python = 2
        assert_eq!(related_slugs(&lookup), vec!["sales", "forecast"]);
        assert_eq!(
            gateway.calls(),
            vec![
                MockContentCall::FindApp {
                    slug: "churn".to_string()
                },
                MockContentCall::ListAppsExcept {
                    app_id: "app-churn".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_related_limit() {
        let cookbook = Cookbook::new(MockContentGateway::new().with_apps(sample_apps()))
            .with_related_config(RelatedConfig::default().with_limit(1));
        assert_eq!(related_slugs(&cookbook.app_detail("churn").await), vec!["sales"]);
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let cookbook = Cookbook::new(MockContentGateway::new().with_apps(sample_apps()));
        assert_eq!(
            cookbook.app_detail("nope").await,
            AppLookup::NotFound {
                slug: "nope".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_app_query_failure_is_not_found() {
        let gateway = MockContentGateway::new()
            .with_apps(sample_apps())
            .fail(MockContentOp::FindApp);
        let lookup = Cookbook::new(gateway).app_detail("churn").await;
        assert!(matches!(lookup, AppLookup::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_related_failure_keeps_app() {
        let gateway = MockContentGateway::new()
            .with_apps(sample_apps())
            .fail(MockContentOp::ListAppsExcept);
        let lookup = Cookbook::new(gateway).app_detail("churn").await;

        let detail = lookup.found().unwrap();
        assert_eq!(detail.app.slug, "churn");
        assert!(detail.related.is_empty());
    }

    #[tokio::test]
    async fn test_untagged_neighbour_is_never_related() {
        let lookup = Cookbook::new(MockContentGateway::new().with_apps(sample_apps()))
            .app_detail("docs")
            .await;
        assert!(related_slugs(&lookup).is_empty());
    }
}
