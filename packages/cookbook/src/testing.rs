//! Testing utilities including mock implementations.
//!
//! These let the gallery, scoring and readme logic run without a content
//! API or network access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ContentError, ContentResult, ReadmeError, ReadmeResult};
use crate::traits::{content::ContentGateway, fetcher::RawFetcher};
use crate::types::{
    app::GalleryApp,
    resource::Resource,
    tag::{Author, Tag},
};

/// In-memory content gateway.
///
/// Apps are returned in insertion order, which callers treat as
/// newest-first.
#[derive(Default, Clone)]
pub struct MockContentGateway {
    apps: Arc<RwLock<Vec<GalleryApp>>>,
    resources: Arc<RwLock<Vec<Resource>>>,

    /// Operations that should fail with a query error
    failing: Arc<RwLock<Vec<MockContentOp>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockContentCall>>>,
}

/// Gateway operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockContentOp {
    ListApps,
    FindApp,
    ListAppsExcept,
    ListResources,
}

/// Record of a call made to the mock gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockContentCall {
    ListApps,
    FindApp { slug: String },
    ListAppsExcept { app_id: String },
    ListResources,
}

impl MockContentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(self, app: GalleryApp) -> Self {
        self.apps.write().unwrap().push(app);
        self
    }

    pub fn with_apps(self, apps: impl IntoIterator<Item = GalleryApp>) -> Self {
        self.apps.write().unwrap().extend(apps);
        self
    }

    pub fn with_resources(self, resources: impl IntoIterator<Item = Resource>) -> Self {
        self.resources.write().unwrap().extend(resources);
        self
    }

    /// Make `op` fail with a query error.
    pub fn fail(self, op: MockContentOp) -> Self {
        self.failing.write().unwrap().push(op);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockContentCall> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: MockContentCall, op: MockContentOp) -> ContentResult<()> {
        self.calls.write().unwrap().push(call);
        if self.failing.read().unwrap().contains(&op) {
            return Err(ContentError::Query(format!("mock failure: {:?}", op)));
        }
        Ok(())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ContentGateway for MockContentGateway {
    async fn list_apps(&self) -> ContentResult<Vec<GalleryApp>> {
        self.record(MockContentCall::ListApps, MockContentOp::ListApps)?;
        Ok(self.apps.read().unwrap().clone())
    }

    async fn find_app(&self, slug: &str) -> ContentResult<Option<GalleryApp>> {
        self.record(
            MockContentCall::FindApp {
                slug: slug.to_string(),
            },
            MockContentOp::FindApp,
        )?;
        Ok(self
            .apps
            .read()
            .unwrap()
            .iter()
            .find(|a| a.slug == slug)
            .cloned())
    }

    async fn list_apps_except(&self, app_id: &str) -> ContentResult<Vec<GalleryApp>> {
        self.record(
            MockContentCall::ListAppsExcept {
                app_id: app_id.to_string(),
            },
            MockContentOp::ListAppsExcept,
        )?;
        Ok(self
            .apps
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.id != app_id)
            .cloned()
            .collect())
    }

    async fn list_resources(&self) -> ContentResult<Vec<Resource>> {
        self.record(MockContentCall::ListResources, MockContentOp::ListResources)?;
        Ok(self.resources.read().unwrap().clone())
    }
}

/// Canned response for one raw URL.
#[derive(Debug, Clone)]
enum MockResponse {
    Found(String),
    NetworkError(String),
}

/// Raw fetcher serving canned files by URL.
///
/// Unknown URLs answer "not found". Clones share responses and call
/// tracking, so a test can keep a handle after moving one into a resolver.
#[derive(Default, Clone)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_file(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), MockResponse::Found(body.into()));
        self
    }

    /// Fail requests for `url` with a transport error.
    pub fn fail_url(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), MockResponse::NetworkError(message.into()));
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl RawFetcher for MockFetcher {
    async fn fetch_text(&self, url: &str) -> ReadmeResult<Option<String>> {
        self.calls.write().unwrap().push(url.to_string());
        match self.responses.read().unwrap().get(url) {
            Some(MockResponse::Found(body)) => Ok(Some(body.clone())),
            Some(MockResponse::NetworkError(message)) => Err(ReadmeError::Network {
                url: url.to_string(),
                source: message.clone().into(),
            }),
            None => Ok(None),
        }
    }
}

/// Small tagged gallery used across tests.
///
/// `sales` and `forecast` share the Retail industry and Python with
/// `churn`; `docs` shares nothing with anyone.
pub fn sample_apps() -> Vec<GalleryApp> {
    let python = Tag::named("Python");
    let sql = Tag::named("SQL");
    let retail = Tag::named("Retail");
    let analytics = Tag::named("Analytics");

    vec![
        GalleryApp::new("app-churn", "churn", "Churn Explorer")
            .with_summary("Predict customer churn")
            .with_use_case(analytics.clone())
            .with_industries([retail.clone()])
            .with_technologies([python.clone(), sql.clone()])
            .with_authors([Author::new("Ada")])
            .with_github_url("https://github.com/foo/churn"),
        GalleryApp::new("app-sales", "sales", "Sales Dashboard")
            .with_summary("Weekly revenue by region")
            .with_use_case(analytics.clone())
            .with_industries([retail.clone()])
            .with_technologies([sql.clone()]),
        GalleryApp::new("app-forecast", "forecast", "Demand Forecast")
            .with_summary("Forecast store demand")
            .with_industries([retail])
            .with_technologies([python]),
        GalleryApp::new("app-docs", "docs", "Docs Chat")
            .with_summary("Ask questions about documents")
            .with_use_case(Tag::named("Chatbots"))
            .with_technologies([Tag::named("LLM")]),
    ]
}

/// Small resource list used across tests.
pub fn sample_resources() -> Vec<Resource> {
    vec![
        Resource::new("res-1", "Building Data Apps", "https://example.com/talk")
            .with_date("2025-03-01")
            .with_type("Talk")
            .with_category("Apps")
            .with_authors([Author::new("Ada")]),
        Resource::new("res-2", "Lakehouse Notes", "https://example.com/blog")
            .with_date("2024-11-12")
            .with_type("Blog")
            .with_category("Data")
            .with_repo("foo", "notes"),
    ]
}
