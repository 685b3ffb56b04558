//! Apps Cookbook - Dioxus Fullstack Web Application
//!
//! Server-rendered gallery of example data apps and learning resources,
//! backed by the hosted content API through the `cookbook` library.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
#[cfg_attr(not(feature = "server"), allow(dead_code))]
mod config;
mod pages;
mod routes;
mod server_fns;
mod state;
mod storage;

fn main() {
    // Initialize logging (RUST_LOG, defaulting to info)
    #[cfg(feature = "server")]
    {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
