//! Readme discovery, caching and presentation.
//!
//! - [`repo`] - GitHub repository URL parsing
//! - [`http`] - Raw file fetcher over HTTP
//! - [`resolver`] - Branch/filename probing with a raw-text cache
//! - [`transform`] - Markdown spacing fix, link rewriting, HTML rendering
//! - [`guard`] - Latest-request-wins guard for async UI updates

pub mod guard;
pub mod http;
pub mod repo;
pub mod resolver;
pub mod transform;

pub use guard::{LatestRequest, Ticket};
pub use http::HttpRawFetcher;
pub use repo::RepoRef;
pub use resolver::{describe_app, Description, ReadmeResolver, ResolvedReadme};
