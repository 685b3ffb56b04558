//! Gallery page component

use cookbook::{facet_options, filter_items, Facet, GalleryApp};
use dioxus::prelude::*;

use crate::components::{AppCard, AppCardSkeleton, FilterBar};
use crate::server_fns::fetch_gallery_apps;
use crate::state::use_filter_state;

/// Gallery page - all apps with search and tag filters
#[component]
pub fn Gallery() -> Element {
    // Fetch apps on server and client
    let apps = use_server_future(fetch_gallery_apps)?;
    let filters = use_filter_state();

    let all_apps = use_memo(move || match &*apps.read() {
        Some(Ok(apps)) => apps.clone(),
        _ => Vec::<GalleryApp>::new(),
    });

    let facets = use_memo(move || {
        let apps = all_apps.read();
        Facet::gallery()
            .iter()
            .map(|facet| (*facet, facet_options(&apps, *facet)))
            .collect::<Vec<_>>()
    });

    // Derive visible apps
    let visible = use_memo(move || {
        let apps = all_apps.read();
        let query = filters.query.read();
        let selection = filters.selection.read();
        filter_items(&apps, &query, &selection)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let is_loading = apps.read().is_none();
    let error = match &*apps.read() {
        Some(Err(e)) => Some(e.to_string()),
        _ => None,
    };

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",

            h1 { class: "text-4xl font-bold text-gray-900 mb-2", "App Gallery" }
            p {
                class: "text-lg text-gray-600 mb-8",
                "Example data applications you can explore, run and adapt."
            }

            FilterBar {
                filters,
                placeholder: "Search apps...".to_string(),
                facets: facets(),
            }

            if is_loading {
                div {
                    class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for i in 0..6 {
                        AppCardSkeleton { key: "{i}" }
                    }
                }
            } else if let Some(err) = error {
                div {
                    class: "text-center py-12",
                    h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load apps" }
                    p { class: "text-gray-500", "{err}" }
                }
            } else if visible().is_empty() {
                div {
                    class: "text-center py-16",
                    h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No apps found" }
                    p { class: "text-gray-500", "Try adjusting your search or filters." }
                }
            } else {
                p {
                    class: "text-sm text-gray-500 mb-6",
                    "Showing "
                    span { class: "font-medium text-gray-900", "{visible().len()}" }
                    " app"
                    if visible().len() != 1 { "s" }
                }
                div {
                    class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for app in visible() {
                        AppCard { key: "{app.id}", app: app.clone() }
                    }
                }
            }
        }
    }
}
