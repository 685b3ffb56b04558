//! Read-only gateway over the hosted content store.

use async_trait::async_trait;

use crate::error::ContentResult;
use crate::types::{app::GalleryApp, resource::Resource};

/// Typed, read-only access to gallery content.
///
/// Implementations own the query language; callers only see records with
/// tag and author references already resolved.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ContentGateway {
    /// All gallery apps, newest first.
    async fn list_apps(&self) -> ContentResult<Vec<GalleryApp>>;

    /// The app with the given slug, if any.
    async fn find_app(&self, slug: &str) -> ContentResult<Option<GalleryApp>>;

    /// All gallery apps except `app_id`, newest first.
    async fn list_apps_except(&self, app_id: &str) -> ContentResult<Vec<GalleryApp>>;

    /// All curated resources, most recent first.
    async fn list_resources(&self) -> ContentResult<Vec<Resource>>;
}
