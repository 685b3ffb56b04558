//! Facets and the user's per-facet selections.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A named category of tags used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    UseCase,
    Industry,
    Technology,
    Category,
    ResourceType,
    Year,
}

impl Facet {
    pub fn label(&self) -> &'static str {
        match self {
            Facet::UseCase => "Use Case",
            Facet::Industry => "Industry",
            Facet::Technology => "Technologies",
            Facet::Category => "Category",
            Facet::ResourceType => "Type",
            Facet::Year => "Year",
        }
    }

    /// Facets shown on the gallery page.
    pub fn gallery() -> &'static [Facet] {
        &[Facet::UseCase, Facet::Industry, Facet::Technology]
    }

    /// Facets shown on the resources page.
    pub fn resources() -> &'static [Facet] {
        &[Facet::Category, Facet::ResourceType, Facet::Year]
    }

    /// Whether filter options for this facet are listed newest first.
    pub fn sorts_descending(&self) -> bool {
        matches!(self, Facet::Year)
    }
}

/// Selected tag names per facet.
///
/// A facet with no selected names does not filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    selected: BTreeMap<Facet, BTreeSet<String>>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` to the selection for `facet`.
    pub fn with(mut self, facet: Facet, name: impl Into<String>) -> Self {
        self.select(facet, name);
        self
    }

    pub fn select(&mut self, facet: Facet, name: impl Into<String>) {
        self.selected.entry(facet).or_default().insert(name.into());
    }

    pub fn deselect(&mut self, facet: Facet, name: &str) {
        if let Some(names) = self.selected.get_mut(&facet) {
            names.remove(name);
            if names.is_empty() {
                self.selected.remove(&facet);
            }
        }
    }

    /// Select `name` if it is not selected, otherwise deselect it.
    pub fn toggle(&mut self, facet: Facet, name: &str) {
        if self.is_selected(facet, name) {
            self.deselect(facet, name);
        } else {
            self.select(facet, name);
        }
    }

    pub fn is_selected(&self, facet: Facet, name: &str) -> bool {
        self.selected
            .get(&facet)
            .is_some_and(|names| names.contains(name))
    }

    /// Selected names for a facet; `None` when the facet is unfiltered.
    pub fn names(&self, facet: Facet) -> Option<&BTreeSet<String>> {
        self.selected.get(&facet).filter(|names| !names.is_empty())
    }

    /// Facets with at least one selected name.
    pub fn active_facets(&self) -> impl Iterator<Item = (Facet, &BTreeSet<String>)> {
        self.selected
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(facet, names)| (*facet, names))
    }

    pub fn clear_facet(&mut self, facet: Facet) {
        self.selected.remove(&facet);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active_facets().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selects_then_deselects() {
        let mut selection = FacetSelection::new();
        selection.toggle(Facet::Technology, "Dash");
        assert!(selection.is_selected(Facet::Technology, "Dash"));

        selection.toggle(Facet::Technology, "Dash");
        assert!(!selection.is_selected(Facet::Technology, "Dash"));
        assert!(selection.is_empty());
        assert!(selection.names(Facet::Technology).is_none());
    }

    #[test]
    fn test_facets_are_independent() {
        let selection = FacetSelection::new()
            .with(Facet::Industry, "Retail")
            .with(Facet::Technology, "Streamlit");

        assert!(selection.is_selected(Facet::Industry, "Retail"));
        assert!(!selection.is_selected(Facet::Technology, "Retail"));
        assert_eq!(selection.active_facets().count(), 2);
    }

    #[test]
    fn test_clear_facet() {
        let mut selection = FacetSelection::new()
            .with(Facet::Year, "2024")
            .with(Facet::Category, "Blog");
        selection.clear_facet(Facet::Year);

        assert!(selection.names(Facet::Year).is_none());
        assert!(selection.names(Facet::Category).is_some());
    }
}
