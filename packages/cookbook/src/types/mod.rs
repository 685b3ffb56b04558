//! Typed records returned by the content API.

pub mod app;
pub mod config;
pub mod facet;
pub mod resource;
pub mod tag;

use serde::{Deserialize, Deserializer};

/// Deserialize a possibly-`null` field into its default value.
///
/// Dereferenced arrays (`industries[]->{...}`) come back as `null` when the
/// document has no references at all.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
