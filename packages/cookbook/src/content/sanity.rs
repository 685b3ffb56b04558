//! HTTP client for the hosted content API (GROQ over HTTP GET).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::queries::{ALL_APPS, ALL_RESOURCES, APP_BY_SLUG, RELATED_CANDIDATES};
use crate::error::{ContentError, ContentResult};
use crate::traits::content::ContentGateway;
use crate::types::{app::GalleryApp, config::ContentConfig, resource::Resource};

/// Query response wrapper
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub result: Option<T>,
    pub error: Option<QueryError>,
}

/// Error body returned for rejected queries
#[derive(Debug, Deserialize)]
pub struct QueryError {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Client for read-only GROQ queries.
#[derive(Clone)]
pub struct SanityClient {
    client: reqwest::Client,
    config: ContentConfig,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Create a client with a read token (private datasets).
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Execute a GROQ query.
    ///
    /// Parameters are sent as `$name` query-string entries holding
    /// JSON-encoded values.
    pub async fn fetch<R>(
        &self,
        query: &str,
        params: &[(&str, serde_json::Value)],
    ) -> ContentResult<R>
    where
        R: DeserializeOwned,
    {
        let endpoint = url::Url::parse(&self.config.query_endpoint())?;

        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), query.to_string())];
        for (name, value) in params {
            pairs.push((format!("${}", name), serde_json::to_string(value)?));
        }

        debug!(endpoint = %endpoint, params = params.len(), "content query");

        let mut req = self.client.get(endpoint).query(&pairs);
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed: QueryResponse<R> = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => return Err(ContentError::JsonParse(e)),
            Err(_) => {
                warn!(status = status.as_u16(), "content API returned non-JSON error body");
                return Err(ContentError::Status {
                    status: status.as_u16(),
                    message: body,
                });
            }
        };

        if let Some(error) = parsed.error {
            return Err(ContentError::Query(error.description));
        }

        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        parsed.result.ok_or(ContentError::NoResult)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ContentGateway for SanityClient {
    async fn list_apps(&self) -> ContentResult<Vec<GalleryApp>> {
        self.fetch(ALL_APPS, &[]).await
    }

    async fn find_app(&self, slug: &str) -> ContentResult<Option<GalleryApp>> {
        let apps: Vec<GalleryApp> = self
            .fetch(APP_BY_SLUG, &[("slug", serde_json::Value::from(slug))])
            .await?;
        Ok(apps.into_iter().next())
    }

    async fn list_apps_except(&self, app_id: &str) -> ContentResult<Vec<GalleryApp>> {
        self.fetch(RELATED_CANDIDATES, &[("appId", serde_json::Value::from(app_id))])
            .await
    }

    async fn list_resources(&self) -> ContentResult<Vec<Resource>> {
        self.fetch(ALL_RESOURCES, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const QUERY_PATH: &str = "/v2025-02-06/data/query/production";

    fn client_for(server: &MockServer) -> SanityClient {
        SanityClient::new(ContentConfig::default().with_base_url(server.uri()))
    }

    fn app_json(id: &str, slug: &str) -> serde_json::Value {
        json!({
            "_id": id,
            "_createdAt": "2025-01-15T09:30:00Z",
            "title": format!("App {}", id),
            "slug": slug,
            "summary": "An example",
            "useCase": {"name": "Dashboard", "slug": "dashboard"},
            "industries": null,
            "technologies": [{"name": "Streamlit", "slug": "streamlit"}],
            "githubUrl": "https://github.com/acme/example",
            "authors": [{"name": "Ada"}]
        })
    }

    #[tokio::test]
    async fn test_list_apps() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", ALL_APPS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ms": 4,
                "query": "...",
                "result": [app_json("1", "one"), app_json("2", "two")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let apps = client_for(&server).list_apps().await.unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].slug, "one");
        assert!(apps[0].industries.is_empty());
    }

    #[tokio::test]
    async fn test_find_app_sends_json_encoded_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("$slug", "\"pixels\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [app_json("1", "pixels")]
            })))
            .mount(&server)
            .await;

        let app = client_for(&server).find_app("pixels").await.unwrap();
        assert_eq!(app.unwrap().id, "1");
    }

    #[tokio::test]
    async fn test_find_app_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
            .mount(&server)
            .await;

        assert!(client_for(&server).find_app("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_apps_except_sends_app_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("$appId", "\"abc\""))
            .and(query_param("query", RELATED_CANDIDATES))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [app_json("2", "two")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let apps = client_for(&server).list_apps_except("abc").await.unwrap();
        assert_eq!(apps.len(), 1);
    }

    #[tokio::test]
    async fn test_query_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "description": "expected '}' following object body",
                    "type": "queryParseError"
                }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).list_resources().await.unwrap_err();
        match err {
            ContentError::Query(message) => assert!(message.contains("following object body")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_apps().await.unwrap_err();
        assert!(matches!(err, ContentError::Status { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_resources_deserialize() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", ALL_RESOURCES))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [{
                    "_id": "r1",
                    "_type": "resource",
                    "title": "Intro video",
                    "date": "2025-02-01",
                    "type": "Video",
                    "category": "Getting Started",
                    "url": "https://example.com/v",
                    "authors": [{"name": "Grace", "linkedinUrl": null}]
                }]
            })))
            .mount(&server)
            .await;

        let resources = client_for(&server).list_resources().await.unwrap();
        assert_eq!(resources[0].resource_type.as_deref(), Some("Video"));
        assert_eq!(resources[0].authors[0].name, "Grace");
    }
}
