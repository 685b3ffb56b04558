//! Routed pages

mod app_detail;
mod gallery;
mod not_found;
mod resources;

pub use app_detail::*;
pub use gallery::*;
pub use not_found::*;
pub use resources::*;
