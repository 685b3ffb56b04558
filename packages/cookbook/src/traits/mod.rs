//! Core trait abstractions for the cookbook library.
//!
//! These are the seams between the pure filtering/scoring logic and the
//! outside world: the content API, raw file hosting, and client-local
//! storage.

pub mod content;
pub mod fetcher;
pub mod store;
