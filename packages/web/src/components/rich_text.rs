//! Plain rendering of portable-text descriptions

use dioxus::prelude::*;
use serde_json::Value;

/// Paragraph texts of a portable-text value.
///
/// Only `block` entries are rendered; each becomes one paragraph made of
/// its children's text spans. Empty blocks are skipped.
pub fn paragraphs(blocks: &Value) -> Vec<String> {
    let Some(blocks) = blocks.as_array() else {
        return vec![];
    };

    blocks
        .iter()
        .filter(|b| b.get("_type").and_then(Value::as_str) == Some("block"))
        .filter_map(|b| {
            let text: String = b
                .get("children")?
                .as_array()?
                .iter()
                .filter_map(|span| span.get("text").and_then(Value::as_str))
                .collect();
            (!text.trim().is_empty()).then_some(text)
        })
        .collect()
}

/// Description stored in the content API
#[component]
pub fn RichText(blocks: Value) -> Element {
    rsx! {
        div {
            class: "prose max-w-none text-gray-700",
            for (i, text) in paragraphs(&blocks).into_iter().enumerate() {
                p { key: "{i}", "{text}" }
            }
        }
    }
}
