//! Gallery app card component

use cookbook::{GalleryApp, Tag};
use dioxus::prelude::*;

use crate::routes::Route;

/// Small tag badge, bordered with the tag's colour when it has one
#[component]
pub fn TagBadge(tag: Tag) -> Element {
    let border = tag.border_color.clone().unwrap_or_else(|| "#E5E7EB".to_string());

    rsx! {
        span {
            class: "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium bg-white text-gray-700 border",
            style: "border-color: {border}",
            "{tag.name}"
        }
    }
}

/// Badges shown on a card: use case, then industries, then technologies.
pub fn card_tags(app: &GalleryApp) -> Vec<Tag> {
    app.use_case
        .iter()
        .chain(app.industries.iter())
        .chain(app.technologies.iter())
        .cloned()
        .collect()
}

/// App card linking to the detail page
#[component]
pub fn AppCard(app: GalleryApp) -> Element {
    let frame = app.frame_color().to_string();
    let image = app.preview_image.as_ref().and_then(|i| i.url()).map(str::to_string);
    let authors = app.author_names();
    let tags = card_tags(&app);

    rsx! {
        Link {
            to: Route::AppDetail { slug: app.slug.clone() },
            class: "group rounded-xl border border-gray-200 bg-white hover:shadow-lg transition-all duration-200 flex flex-col h-full overflow-hidden",

            div {
                class: "p-3",
                style: "background-color: {frame}",
                if let Some(src) = image {
                    img {
                        src: "{src}",
                        alt: "{app.title}",
                        class: "w-full h-40 object-cover rounded-lg"
                    }
                } else {
                    div { class: "w-full h-40 rounded-lg bg-white/30" }
                }
            }

            div {
                class: "p-5 flex flex-col flex-grow",
                h3 {
                    class: "text-lg font-semibold text-gray-900 mb-1 line-clamp-2 group-hover:text-orange-600",
                    "{app.title}"
                }
                if !authors.is_empty() {
                    p { class: "text-sm text-gray-500 mb-2", "{authors}" }
                }
                p {
                    class: "text-gray-700 text-sm mb-4 line-clamp-3 flex-grow",
                    "{app.summary}"
                }
                div {
                    class: "flex flex-wrap gap-1.5",
                    for tag in tags {
                        TagBadge { key: "{tag.slug}", tag: tag.clone() }
                    }
                }
            }
        }
    }
}

/// Placeholder card shown while apps load
#[component]
pub fn AppCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white overflow-hidden animate-pulse",
            div { class: "h-44 bg-gray-200" }
            div {
                class: "p-5 space-y-3",
                div { class: "h-5 bg-gray-200 rounded w-3/4" }
                div { class: "h-4 bg-gray-200 rounded w-1/3" }
                div { class: "h-4 bg-gray-200 rounded" }
                div { class: "h-4 bg-gray-200 rounded w-5/6" }
            }
        }
    }
}
