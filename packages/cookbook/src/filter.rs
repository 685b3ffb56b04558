//! Free-text search and multi-facet filtering for list pages.
//!
//! Filtering is a pure function of `(items, term, selection)`:
//!
//! - an item matches the term when its lowercased haystack contains the
//!   lowercased term (empty term matches everything)
//! - within a facet, an item matches when any of its values is selected
//! - across facets, every active facet must match
//!
//! Output keeps the input order.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::types::{
    app::GalleryApp,
    facet::{Facet, FacetSelection},
    resource::Resource,
};

/// Anything a list page can search and filter.
pub trait Searchable {
    /// Text fields that make up the search haystack, in order.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Display names of this item's values in `facet`.
    ///
    /// Items return an empty list for facets that do not apply to them.
    fn facet_values(&self, facet: Facet) -> Vec<Cow<'_, str>>;
}

impl Searchable for GalleryApp {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.summary.as_str()),
        ];
        fields.extend(self.authors.iter().map(|a| Cow::Borrowed(a.name.as_str())));
        fields.extend(self.use_case.iter().map(|t| Cow::Borrowed(t.name.as_str())));
        fields.extend(self.industries.iter().map(|t| Cow::Borrowed(t.name.as_str())));
        fields.extend(self.technologies.iter().map(|t| Cow::Borrowed(t.name.as_str())));
        fields
    }

    fn facet_values(&self, facet: Facet) -> Vec<Cow<'_, str>> {
        match facet {
            Facet::UseCase => self
                .use_case
                .iter()
                .map(|t| Cow::Borrowed(t.name.as_str()))
                .collect(),
            Facet::Industry => self
                .industries
                .iter()
                .map(|t| Cow::Borrowed(t.name.as_str()))
                .collect(),
            Facet::Technology => self
                .technologies
                .iter()
                .map(|t| Cow::Borrowed(t.name.as_str()))
                .collect(),
            _ => vec![],
        }
    }
}

impl Searchable for Resource {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str())];
        fields.extend(self.summary.as_deref().map(Cow::Borrowed));
        fields.extend(self.authors.iter().map(|a| Cow::Borrowed(a.name.as_str())));
        if let (Some(org), Some(name)) = (&self.repo_org, &self.repo_name) {
            fields.push(Cow::Borrowed(org.as_str()));
            fields.push(Cow::Borrowed(name.as_str()));
        }
        fields.extend(self.resource_type.as_deref().map(Cow::Borrowed));
        fields.extend(self.category.as_deref().map(Cow::Borrowed));
        fields
    }

    fn facet_values(&self, facet: Facet) -> Vec<Cow<'_, str>> {
        match facet {
            Facet::Category => self.category.as_deref().map(Cow::Borrowed).into_iter().collect(),
            Facet::ResourceType => self
                .resource_type
                .as_deref()
                .map(Cow::Borrowed)
                .into_iter()
                .collect(),
            Facet::Year => self.year().map(Cow::Owned).into_iter().collect(),
            _ => vec![],
        }
    }
}

/// Lowercased, space-joined search text for an item.
pub fn haystack<T: Searchable + ?Sized>(item: &T) -> String {
    item.search_fields().join(" ").to_lowercase()
}

/// Whether `item` contains `term` (case-insensitive). Empty terms match.
pub fn matches_term<T: Searchable + ?Sized>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    haystack(item).contains(&term.to_lowercase())
}

/// Whether `item` satisfies every active facet in `selection`.
pub fn matches_selection<T: Searchable + ?Sized>(item: &T, selection: &FacetSelection) -> bool {
    selection.active_facets().all(|(facet, names)| {
        item.facet_values(facet)
            .iter()
            .any(|value| names.contains(value.as_ref()))
    })
}

/// Visible subset of `items` for a search term and facet selection.
pub fn filter_items<'a, T: Searchable>(
    items: &'a [T],
    term: &str,
    selection: &FacetSelection,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_term(*item, term))
        .filter(|item| matches_selection(*item, selection))
        .collect()
}

/// Distinct option names for a facet's filter pills.
///
/// Sorted ascending, except facets that list newest first.
pub fn facet_options<T: Searchable>(items: &[T], facet: Facet) -> Vec<String> {
    let names: BTreeSet<String> = items
        .iter()
        .flat_map(|item| item.facet_values(facet))
        .filter(|name| !name.is_empty())
        .map(Cow::into_owned)
        .collect();

    let mut options: Vec<String> = names.into_iter().collect();
    if facet.sorts_descending() {
        options.reverse();
    }
    options
}
