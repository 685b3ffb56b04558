//! Site chrome shared by every page

use dioxus::prelude::*;

use crate::routes::Route;

/// Header navigation and footer around the routed page
#[component]
pub fn SiteLayout() -> Element {
    let route: Route = use_route();
    let on_resources = matches!(route, Route::Resources {});

    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-gray-50",

            header {
                class: "bg-white border-b border-gray-200",
                nav {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                    Link {
                        to: Route::Gallery {},
                        class: "text-xl font-bold text-gray-900",
                        "Apps Cookbook"
                    }
                    div {
                        class: "flex items-center gap-6 text-sm font-medium",
                        Link {
                            to: Route::Gallery {},
                            class: if on_resources { "text-gray-600 hover:text-gray-900" } else { "text-orange-600" },
                            "Gallery"
                        }
                        Link {
                            to: Route::Resources {},
                            class: if on_resources { "text-orange-600" } else { "text-gray-600 hover:text-gray-900" },
                            "Resources"
                        }
                    }
                }
            }

            main {
                class: "flex-grow",
                Outlet::<Route> {}
            }

            footer {
                class: "bg-white border-t border-gray-200 mt-12",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 text-center text-sm text-gray-500",
                    "Example data applications and learning resources."
                }
            }
        }
    }
}
