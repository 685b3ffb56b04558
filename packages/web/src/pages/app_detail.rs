//! App detail page component

use cookbook::{
    describe_app, AppDetail as Detail, AppLookup, Description, GalleryApp, HttpRawFetcher,
    LatestRequest, ReadmeConfig, ReadmeResolver,
};
use dioxus::prelude::*;

use crate::components::{AppCard, LoadingSpinner, RichText, TagBadge};
use crate::pages::NotFoundView;
use crate::routes::Route;
use crate::server_fns::{fetch_app_detail, fetch_readme_config};
use crate::storage::browser_store;

/// App detail page - readme or description, metadata and related apps
#[component]
pub fn AppDetail(slug: ReadOnlySignal<String>) -> Element {
    let lookup = use_server_future(move || fetch_app_detail(slug()))?;
    let readme_config = use_server_future(fetch_readme_config)?;

    let guard = use_hook(LatestRequest::new);
    let mut description = use_signal(|| None::<Description>);

    // Resolve the readme in the browser whenever the app changes
    use_effect(move || {
        let app = match &*lookup.read() {
            Some(Ok(AppLookup::Found(detail))) => detail.app.clone(),
            _ => return,
        };
        let config = match &*readme_config.read() {
            Some(Ok(config)) => config.clone(),
            _ => ReadmeConfig::default(),
        };

        let ticket = guard.begin();
        let guard = guard.clone();
        description.set(None);

        spawn(async move {
            let resolver =
                ReadmeResolver::new(HttpRawFetcher::new(), browser_store()).with_config(config);
            let resolved = describe_app(&resolver, &app).await;
            if !guard.apply_if_current(ticket, resolved, |d| description.set(Some(d))) {
                tracing::debug!(slug = %app.slug, "Discarding stale readme");
            }
        });
    });

    // Bound so the read guard drops before returning
    let view = match &*lookup.read() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(e)) => rsx! {
            NotFoundView {
                title: "Unable to load app".to_string(),
                message: e.to_string(),
            }
        },
        Some(Ok(AppLookup::NotFound { slug })) => rsx! {
            NotFoundView {
                title: "App Not Found".to_string(),
                message: format!("The app \"{}\" doesn't exist or has been removed.", slug),
            }
        },
        Some(Ok(AppLookup::Found(detail))) => rsx! {
            AppDetailView { detail: detail.clone(), description: description() }
        },
    };

    view
}

#[component]
fn AppDetailView(detail: Detail, description: Option<Description>) -> Element {
    let app = &detail.app;

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",

            Link {
                to: Route::Gallery {},
                class: "text-orange-600 hover:text-orange-700 text-sm mb-6 inline-block",
                "\u{2190} Back to Gallery"
            }

            div {
                class: "grid gap-10 lg:grid-cols-3",

                // Readme or description
                article {
                    class: "lg:col-span-2 bg-white rounded-xl border border-gray-200 p-8",
                    h1 { class: "text-3xl font-bold text-gray-900 mb-2", "{app.title}" }
                    if !app.summary.is_empty() {
                        p { class: "text-lg text-gray-600 mb-8", "{app.summary}" }
                    }
                    {
                        match description {
                            None => rsx! {
                                LoadingSpinner { label: "Loading README...".to_string() }
                            },
                            Some(Description::Readme(readme)) => rsx! {
                                div {
                                    class: "readme prose max-w-none",
                                    dangerous_inner_html: "{readme.html}"
                                }
                            },
                            Some(Description::RichText(blocks)) => rsx! { RichText { blocks } },
                            Some(Description::Empty) => rsx! {
                                p { class: "text-gray-500 italic", "No description available." }
                            },
                        }
                    }
                }

                // Metadata
                aside {
                    class: "space-y-6",
                    AppMetadata { app: app.clone() }
                }
            }

            if !detail.related.is_empty() {
                section {
                    class: "mt-16",
                    h2 { class: "text-2xl font-bold text-gray-900 mb-6", "Related Apps" }
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for related in detail.related.iter() {
                            AppCard { key: "{related.id}", app: related.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AppMetadata(app: GalleryApp) -> Element {
    let tag_groups = [
        ("Use Case", app.use_case.iter().cloned().collect::<Vec<_>>()),
        ("Industry", app.industries.clone()),
        ("Technologies", app.technologies.clone()),
    ];

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 p-6 space-y-5",

            if !app.authors.is_empty() {
                div {
                    h3 { class: "text-sm font-semibold text-gray-900 mb-2", "Authors" }
                    ul {
                        class: "space-y-1 text-sm text-gray-700",
                        for author in app.authors.iter() {
                            li {
                                key: "{author.name}",
                                if let Some(linkedin) = &author.linkedin_url {
                                    a {
                                        href: "{linkedin}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "hover:text-orange-600",
                                        "{author.name}"
                                    }
                                } else {
                                    "{author.name}"
                                }
                            }
                        }
                    }
                }
            }

            for (label, tags) in tag_groups {
                if !tags.is_empty() {
                    div {
                        key: "{label}",
                        h3 { class: "text-sm font-semibold text-gray-900 mb-2", "{label}" }
                        div {
                            class: "flex flex-wrap gap-1.5",
                            for tag in tags {
                                TagBadge { key: "{tag.slug}", tag: tag.clone() }
                            }
                        }
                    }
                }
            }

            if let Some(url) = &app.github_url {
                a {
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "inline-flex items-center justify-center w-full px-4 py-2 bg-gray-900 text-white rounded-lg hover:bg-gray-800 transition-colors text-sm font-medium",
                    "View on GitHub"
                }
            }
        }
    }
}
