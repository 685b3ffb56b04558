//! Loading components

use dioxus::prelude::*;

/// Centered loading indicator with a caption
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-12",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-orange-500 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-orange-500 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-orange-500 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "{label}" }
        }
    }
}
