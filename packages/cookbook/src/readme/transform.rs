//! Presentation transforms applied to raw readme text.
//!
//! These always run on the raw text, including text served from the
//! cache, so improving a transform fixes every cached readme too.

use lazy_static::lazy_static;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use regex::{Captures, Regex};

lazy_static! {
    // Closing tags of HTML blocks that swallow following markdown
    static ref BLOCK_CLOSE_REGEX: Regex = Regex::new(
        r"(?i)</(h[1-6]|div|p|section|article|aside|header|footer)>"
    ).unwrap();

    // Inline <img> tags
    static ref IMG_TAG_REGEX: Regex = Regex::new(r"(?i)<img\b[^>]*>").unwrap();

    // href attribute of raw <a> tags
    static ref ANCHOR_HREF_REGEX: Regex = Regex::new(
        r#"(?i)(<a\b[^>]*?\bhref\s*=\s*")([^"]*)(")"#
    ).unwrap();
}

/// Put a blank line after closing HTML block tags.
///
/// Without it, markdown directly following `</div>` (like `**bold**`) is
/// treated as part of the HTML block and never rendered.
pub fn fix_block_spacing(text: &str) -> String {
    BLOCK_CLOSE_REGEX.replace_all(text, "</$1>\n\n").into_owned()
}

/// Whether a link target is already absolute or page-local.
fn is_absolute(href: &str) -> bool {
    ["http://", "https://", "//", "#", "mailto:"]
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

/// Resolve a readme link against the repository blob base.
///
/// Absolute links, protocol-relative links, anchors and `mailto:` are
/// returned unchanged. A leading `./` is dropped before joining.
pub fn resolve_link(href: &str, base_url: &str) -> String {
    if href.is_empty() || is_absolute(href) {
        return href.to_string();
    }
    let path = href.strip_prefix("./").unwrap_or(href);
    format!("{}{}", base_url, path)
}

fn rewrite_raw_html(fragment: &str, base_url: &str) -> String {
    let without_images = IMG_TAG_REGEX.replace_all(fragment, "");
    ANCHOR_HREF_REGEX
        .replace_all(&without_images, |caps: &Captures| {
            format!("{}{}{}", &caps[1], resolve_link(&caps[2], base_url), &caps[3])
        })
        .into_owned()
}

/// Render readme markdown to HTML.
///
/// Images are dropped and relative links point at the repository.
pub fn render_html(markdown: &str, base_url: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut image_depth = 0usize;
    let events = Parser::new_ext(markdown, options).filter_map(|event| {
        match event {
            Event::Start(Tag::Image(..)) => {
                image_depth += 1;
                None
            }
            Event::End(Tag::Image(..)) => {
                image_depth = image_depth.saturating_sub(1);
                None
            }
            _ if image_depth > 0 => None,
            Event::Start(Tag::Link(kind, dest, title)) => {
                let resolved = resolve_link(&dest, base_url);
                Some(Event::Start(Tag::Link(kind, CowStr::from(resolved), title)))
            }
            Event::Html(fragment) => Some(Event::Html(CowStr::from(rewrite_raw_html(
                &fragment, base_url,
            )))),
            other => Some(other),
        }
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Full pipeline from raw readme text to display HTML.
pub fn prepare(raw: &str, base_url: &str) -> (String, String) {
    let markdown = fix_block_spacing(raw);
    let html = render_html(&markdown, base_url);
    (markdown, html)
}
