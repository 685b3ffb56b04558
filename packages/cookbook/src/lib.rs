//! Cookbook Gallery Library
//!
//! Content loading, faceted filtering, related-app scoring and readme
//! resolution for a gallery of example data applications and a list of
//! learning resources.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cookbook::{filter_items, ContentConfig, Cookbook, Facet, FacetSelection, SanityClient};
//!
//! let cookbook = Cookbook::new(SanityClient::new(ContentConfig::default()));
//! let apps = cookbook.gallery_apps().await;
//!
//! let selection = FacetSelection::new().with(Facet::Technology, "Python");
//! let visible = filter_items(&apps, "forecast", &selection);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Seams to the outside world (ContentGateway, RawFetcher, KeyValueStore)
//! - [`types`] - Apps, resources, tags, facets and configuration
//! - [`content`] - Content API client and queries
//! - [`filter`] - Text search and facet filtering
//! - [`related`] - Related-app relevance scoring
//! - [`readme`] - Readme probing, caching and rendering
//! - [`gallery`] - Page-level loading with error fallbacks
//! - [`stores`] - Key-value store implementations
//! - [`testing`] - Mock implementations for testing

pub mod content;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod readme;
pub mod related;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CookbookError, ContentError, ReadmeError, Result, StoreError};
pub use traits::{content::ContentGateway, fetcher::RawFetcher, store::KeyValueStore};
pub use types::{
    app::{AssetRef, GalleryApp, ImageAsset},
    config::{ContentConfig, ReadmeConfig, RelatedConfig},
    facet::{Facet, FacetSelection},
    resource::Resource,
    tag::{slugify, Author, Tag},
};

pub use content::SanityClient;
pub use filter::{facet_options, filter_items, Searchable};
pub use gallery::{AppDetail, AppLookup, Cookbook};
pub use readme::{
    describe_app, Description, HttpRawFetcher, LatestRequest, ReadmeResolver, RepoRef,
    ResolvedReadme, Ticket,
};
pub use related::{rank_related, relevance_score, ScoredApp};
pub use stores::MemoryStore;
