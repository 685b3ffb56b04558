//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{AppDetail, Gallery, PageNotFound, Resources};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Gallery {})]

    #[layout(SiteLayout)]
        #[route("/gallery")]
        Gallery {},

        #[route("/gallery/:slug")]
        AppDetail { slug: String },

        #[route("/resources")]
        Resources {},

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}
