//! Reusable UI components

mod app_card;
mod filter_pills;
mod layout;
mod loading;
mod resource_card;
mod rich_text;

pub use app_card::*;
pub use filter_pills::*;
pub use layout::*;
pub use loading::*;
pub use resource_card::*;
pub use rich_text::*;
