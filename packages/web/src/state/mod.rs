//! Page-local filter state

use cookbook::{Facet, FacetSelection};
use dioxus::prelude::*;

/// Search term and facet selections for a list page.
///
/// Lives for the lifetime of the page; navigating away resets it.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterState {
    pub query: Signal<String>,
    pub selection: Signal<FacetSelection>,
}

impl FilterState {
    pub fn toggle(&mut self, facet: Facet, name: &str) {
        self.selection.write().toggle(facet, name);
    }

    pub fn is_selected(&self, facet: Facet, name: &str) -> bool {
        self.selection.read().is_selected(facet, name)
    }

    /// Whether any search term or pill is active.
    pub fn is_active(&self) -> bool {
        !self.query.read().trim().is_empty() || !self.selection.read().is_empty()
    }

    pub fn clear(&mut self) {
        self.query.set(String::new());
        self.selection.write().clear();
    }
}

/// Create filter state owned by the calling component.
pub fn use_filter_state() -> FilterState {
    FilterState {
        query: use_signal(String::new),
        selection: use_signal(FacetSelection::new),
    }
}
