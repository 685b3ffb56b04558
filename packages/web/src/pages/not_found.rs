//! Not-found views

use dioxus::prelude::*;

use crate::routes::Route;

/// Shown for unknown apps and unknown paths
#[component]
pub fn NotFoundView(title: String, message: String) -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 py-24 text-center",
            h1 { class: "text-3xl font-bold text-gray-900 mb-4", "{title}" }
            p { class: "text-gray-600 mb-8", "{message}" }
            Link {
                to: Route::Gallery {},
                class: "inline-flex items-center gap-2 px-6 py-3 bg-orange-600 text-white rounded-xl hover:bg-orange-700 transition-colors font-medium",
                "\u{2190} Back to Gallery"
            }
        }
    }
}

/// Catch-all route
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        NotFoundView {
            title: "Page Not Found".to_string(),
            message: format!("Nothing lives at {}.", path),
        }
    }
}
