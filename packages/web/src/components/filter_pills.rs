//! Search box and facet pill rows

use cookbook::Facet;
use dioxus::prelude::*;

use crate::state::FilterState;

/// Free-text search input bound to the page's filter state
#[component]
pub fn SearchBox(filters: FilterState, placeholder: String) -> Element {
    let mut query = filters.query;

    rsx! {
        div {
            class: "relative max-w-xl",
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
                class: "w-full pl-4 pr-10 py-3 bg-white border border-gray-200 rounded-xl text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-transparent"
            }
            if !query().is_empty() {
                button {
                    class: "absolute inset-y-0 right-0 pr-4 flex items-center text-gray-400 hover:text-gray-600",
                    onclick: move |_| query.set(String::new()),
                    "\u{2715}"
                }
            }
        }
    }
}

/// One row of toggleable pills for a facet
#[component]
pub fn FacetPills(facet: Facet, options: Vec<String>, filters: FilterState) -> Element {
    if options.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex flex-wrap items-center gap-2",
            span { class: "text-sm font-medium text-gray-700 mr-1", "{facet.label()}:" }
            for name in options {
                {
                    let is_active = filters.is_selected(facet, &name);
                    let mut filters = filters;
                    let label = name.clone();
                    rsx! {
                        button {
                            key: "{label}",
                            class: if is_active {
                                "px-3 py-1 rounded-full text-sm font-medium transition-colors bg-orange-600 text-white"
                            } else {
                                "px-3 py-1 rounded-full text-sm font-medium transition-colors bg-white border border-gray-200 text-gray-700 hover:bg-gray-100"
                            },
                            onclick: move |_| filters.toggle(facet, &name),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Search box, pill rows and a clear button for a list page
#[component]
pub fn FilterBar(
    filters: FilterState,
    placeholder: String,
    facets: Vec<(Facet, Vec<String>)>,
) -> Element {
    let mut filters_mut = filters;

    rsx! {
        div {
            class: "space-y-4 mb-8",
            SearchBox { filters, placeholder }
            for (facet, options) in facets {
                FacetPills { key: "{facet:?}", facet, options, filters }
            }
            if filters.is_active() {
                button {
                    class: "text-sm text-orange-600 hover:text-orange-700",
                    onclick: move |_| filters_mut.clear(),
                    "Clear filters"
                }
            }
        }
    }
}
