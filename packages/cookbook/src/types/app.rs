//! Gallery app records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::tag::{Author, Tag};

/// Reference to an uploaded image asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl ImageAsset {
    pub fn url(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.url.as_str())
    }
}

/// An example application shown in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryApp {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Portable-text blocks, kept as raw JSON for the renderer.
    #[serde(default)]
    pub description: Option<serde_json::Value>,
    #[serde(default)]
    pub use_case: Option<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industries: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<Tag>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub preview_image: Option<ImageAsset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preview_images: Vec<ImageAsset>,
}

impl GalleryApp {
    /// Minimal app, mostly useful for tests and fixtures.
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            title: title.into(),
            slug: slug.into(),
            summary: String::new(),
            description: None,
            use_case: None,
            industries: vec![],
            technologies: vec![],
            github_url: None,
            authors: vec![],
            preview_image: None,
            preview_images: vec![],
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_use_case(mut self, tag: Tag) -> Self {
        self.use_case = Some(tag);
        self
    }

    pub fn with_industries(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.industries = tags.into_iter().collect();
        self
    }

    pub fn with_technologies(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.technologies = tags.into_iter().collect();
        self
    }

    pub fn with_authors(mut self, authors: impl IntoIterator<Item = Author>) -> Self {
        self.authors = authors.into_iter().collect();
        self
    }

    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_description(mut self, description: serde_json::Value) -> Self {
        self.description = Some(description);
        self
    }

    /// Author names joined for display.
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Frame colour for the preview card.
    ///
    /// Uses the use case's frame colour when set, otherwise picks one of
    /// four brand colours from a checksum of the id so a card keeps its
    /// colour across reloads.
    pub fn frame_color(&self) -> &str {
        const PALETTE: [&str; 4] = ["#FF5F47", "#01A770", "#2373B4", "#FFAB00"];

        if let Some(color) = self.use_case.as_ref().and_then(|t| t.frame_color.as_deref()) {
            return color;
        }
        let sum: u32 = self.id.chars().map(|c| c as u32).sum();
        PALETTE[(sum % PALETTE.len() as u32) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_null_references() {
        let json = r#"{
            "_id": "app-1",
            "_createdAt": "2025-03-01T10:00:00Z",
            "title": "Pixels",
            "slug": "pixels",
            "summary": "Draw things",
            "useCase": null,
            "industries": null,
            "technologies": [{"name": "Dash", "slug": "dash"}],
            "githubUrl": "https://github.com/acme/pixels",
            "authors": null,
            "previewImage": {"asset": {"_id": "img-1", "url": "https://cdn/img.png"}, "alt": null}
        }"#;

        let app: GalleryApp = serde_json::from_str(json).unwrap();

        assert_eq!(app.id, "app-1");
        assert!(app.use_case.is_none());
        assert!(app.industries.is_empty());
        assert!(app.authors.is_empty());
        assert!(app.preview_images.is_empty());
        assert_eq!(app.technologies[0].slug, "dash");
        assert_eq!(app.preview_image.unwrap().url(), Some("https://cdn/img.png"));
    }

    #[test]
    fn test_deserialize_half_filled_entry_keeps_list() {
        let json = r#"[
            {
                "_id": "app-1",
                "_createdAt": "2025-03-01T10:00:00Z",
                "title": "Pixels",
                "slug": "pixels"
            },
            {"_id": "app-2", "_createdAt": "2025-02-01T10:00:00Z", "title": null}
        ]"#;

        let apps: Vec<GalleryApp> = serde_json::from_str(json).unwrap();

        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].title, "Pixels");
        assert_eq!(apps[1].id, "app-2");
        assert!(apps[1].title.is_empty());
        assert!(apps[1].slug.is_empty());
    }

    #[test]
    fn test_frame_color_prefers_use_case() {
        let app = GalleryApp::new("a", "a", "A")
            .with_use_case(Tag::named("Dashboard").with_frame_color("#123456"));
        assert_eq!(app.frame_color(), "#123456");
    }

    #[test]
    fn test_frame_color_is_stable_per_id() {
        // 'a' = 97, 97 % 4 = 1
        let app = GalleryApp::new("a", "a", "A");
        assert_eq!(app.frame_color(), "#01A770");
        assert_eq!(app.frame_color(), GalleryApp::new("a", "b", "B").frame_color());
    }

    #[test]
    fn test_author_names() {
        let app = GalleryApp::new("a", "a", "A")
            .with_authors([Author::new("Ada"), Author::new("Grace")]);
        assert_eq!(app.author_names(), "Ada, Grace");
    }
}
