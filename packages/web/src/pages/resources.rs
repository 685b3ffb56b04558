//! Resources page component

use cookbook::{facet_options, filter_items, Facet, Resource};
use dioxus::prelude::*;

use crate::components::{FilterBar, LoadingSpinner, ResourceCard};
use crate::server_fns::fetch_resources;
use crate::state::use_filter_state;

/// Resources page - blog posts, talks and repositories with filters
#[component]
pub fn Resources() -> Element {
    let resources = use_server_future(fetch_resources)?;
    let filters = use_filter_state();

    let all = use_memo(move || match &*resources.read() {
        Some(Ok(resources)) => resources.clone(),
        _ => Vec::<Resource>::new(),
    });

    let facets = use_memo(move || {
        let all = all.read();
        Facet::resources()
            .iter()
            .map(|facet| (*facet, facet_options(&all, *facet)))
            .collect::<Vec<_>>()
    });

    let visible = use_memo(move || {
        let all = all.read();
        let query = filters.query.read();
        let selection = filters.selection.read();
        filter_items(&all, &query, &selection)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let is_loading = resources.read().is_none();

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",

            h1 { class: "text-4xl font-bold text-gray-900 mb-2", "Resources" }
            p {
                class: "text-lg text-gray-600 mb-8",
                "Blog posts, talks and repositories about building data apps."
            }

            FilterBar {
                filters,
                placeholder: "Search resources...".to_string(),
                facets: facets(),
            }

            if is_loading {
                LoadingSpinner {}
            } else if visible().is_empty() {
                div {
                    class: "text-center py-16",
                    h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No resources found" }
                    p { class: "text-gray-500", "Try adjusting your search or filters." }
                }
            } else {
                div {
                    class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for resource in visible() {
                        ResourceCard { key: "{resource.id}", resource: resource.clone() }
                    }
                }
            }
        }
    }
}
