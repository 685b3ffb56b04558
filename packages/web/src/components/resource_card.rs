//! Resource card component

use cookbook::Resource;
use dioxus::prelude::*;

const PREVIEW_CHARS: usize = 100;
const CODE_SAMPLE: &str = "Code sample";

/// First `max_chars` characters of `text` followed by an ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

/// Line under the title: `org/repo` for code samples, author names otherwise.
pub fn byline(resource: &Resource) -> String {
    if resource.resource_type.as_deref() == Some(CODE_SAMPLE) {
        return resource.repo_label().unwrap_or_default();
    }
    resource
        .authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resource card linking out to the resource
#[component]
pub fn ResourceCard(resource: Resource) -> Element {
    let date = resource
        .published_on()
        .map(|d| d.format("%B %-d, %Y").to_string());
    let credit = byline(&resource);

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            div {
                class: "flex flex-wrap items-center gap-2 mb-3",
                if let Some(kind) = &resource.resource_type {
                    span {
                        class: "px-2.5 py-1 rounded-full text-xs font-medium bg-orange-100 text-orange-700",
                        "{kind}"
                    }
                }
                if let Some(category) = &resource.category {
                    span {
                        class: "px-2.5 py-1 rounded-full text-xs font-medium bg-gray-100 text-gray-700",
                        "{category}"
                    }
                }
            }

            a {
                href: "{resource.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "text-lg font-semibold text-gray-900 hover:text-orange-600 mb-1",
                "{resource.title}"
            }

            if !credit.is_empty() {
                p { class: "text-sm text-gray-500 mb-2", "{credit}" }
            }

            if let Some(summary) = &resource.summary {
                p {
                    class: "group text-gray-700 text-sm mb-4 flex-grow",
                    span { class: "group-hover:hidden", "{preview(summary, PREVIEW_CHARS)}" }
                    span { class: "hidden group-hover:inline", "{summary}" }
                }
            }

            div {
                class: "mt-auto pt-3 border-t border-gray-100 flex items-center justify-between text-xs text-gray-500",
                if let Some(date) = date {
                    span { "{date}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook::Author;

    fn resource(kind: &str) -> Resource {
        Resource::new("r1", "Talk", "https://example.com")
            .with_type(kind)
            .with_authors([Author::new("Ada"), Author::new("Grace")])
            .with_repo("acme", "pixels")
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("héllo world", 5), "héllo...");
        assert_eq!(preview("short", 100), "short...");
    }

    #[test]
    fn test_byline_shows_repo_for_code_samples() {
        assert_eq!(byline(&resource("Code sample")), "acme/pixels");
    }

    #[test]
    fn test_byline_shows_authors_otherwise() {
        assert_eq!(byline(&resource("Video")), "Ada, Grace");

        let mut untyped = resource("Video");
        untyped.resource_type = None;
        assert_eq!(byline(&untyped), "Ada, Grace");
    }
}
