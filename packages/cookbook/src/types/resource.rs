//! Curated resource records (blog posts, talks, repositories, ...).

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::tag::Author;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Publication date as stored (`YYYY-MM-DD` or RFC 3339).
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,
    #[serde(rename = "type", default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub repo_org: Option<String>,
    #[serde(default)]
    pub repo_name: Option<String>,
}

impl Resource {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: None,
            authors: vec![],
            resource_type: None,
            category: None,
            url: url.into(),
            summary: None,
            repo_org: None,
            repo_name: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_repo(mut self, org: impl Into<String>, name: impl Into<String>) -> Self {
        self.repo_org = Some(org.into());
        self.repo_name = Some(name.into());
        self
    }

    pub fn with_authors(mut self, authors: impl IntoIterator<Item = Author>) -> Self {
        self.authors = authors.into_iter().collect();
        self
    }

    /// Parsed publication date.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
    }

    /// Publication year, used as the `Year` facet.
    pub fn year(&self) -> Option<String> {
        self.published_on().map(|d| d.year().to_string())
    }

    /// `org/name` when the resource points at a repository.
    pub fn repo_label(&self) -> Option<String> {
        match (&self.repo_org, &self.repo_name) {
            (Some(org), Some(name)) => Some(format!("{}/{}", org, name)),
            _ => None,
        }
    }
}
