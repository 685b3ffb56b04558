//! Tags and authors referenced by gallery apps and resources.

use serde::{Deserialize, Serialize};

/// A taxonomy tag (use case, industry or technology).
///
/// Colours are presentation metadata only and never take part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub dark_border_color: Option<String>,
    #[serde(default)]
    pub frame_color: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            border_color: None,
            dark_border_color: None,
            frame_color: None,
        }
    }

    /// Build a tag whose slug is derived from the name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self::new(name, slug)
    }

    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn with_frame_color(mut self, color: impl Into<String>) -> Self {
        self.frame_color = Some(color.into());
        self
    }
}

/// An app or resource author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            linkedin_url: None,
        }
    }
}

/// Lowercase, hyphen-separated form of a display name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
