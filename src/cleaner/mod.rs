//! Summary cleaning: markup in, bounded plain text out.
//!
//! [`clean`] never fails. When the markup can't be stripped it falls back to
//! the raw input and only truncates it.

use scraper::Html;
use tracing::debug;

use crate::errors::{FeederError, FeederResult};

/// Characters of content kept before truncating
pub const SUMMARY_MAX_CHARS: usize = 300;

pub const ELLIPSIS: &str = "...";

/// Elements that separate words when rendered
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "br", "div", "li", "ul", "ol", "tr", "td", "blockquote", "h1", "h2", "h3", "h4",
    "h5", "h6", "figcaption",
];

/// Elements whose text content is never human-readable
const SKIPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Strip markup from `raw` and bound the result to [`SUMMARY_MAX_CHARS`]
/// characters plus an ellipsis.
pub fn clean(raw: &str) -> String {
    match strip_markup(raw) {
        Ok(text) => truncate(&text),
        Err(e) => {
            debug!("Falling back to raw summary text: {}", e);
            truncate(raw)
        }
    }
}

/// Extract the readable text of an HTML fragment with whitespace collapsed.
///
/// CDATA sections, which HTML parsing turns into comments, keep their text.
///
/// Fails with [`FeederError::MalformedSummary`] when the parser reported
/// errors and produced no nodes at all from non-blank input (a stray `</>`,
/// for instance).
pub fn strip_markup(raw: &str) -> FeederResult<String> {
    let fragment = Html::parse_fragment(raw);
    let root = fragment.root_element();
    let mut text = String::new();

    for node in root.descendants() {
        if let Some(text_node) = node.value().as_text() {
            let hidden = node.parent().is_some_and(|parent| {
                matches!(parent.value().as_element(), Some(e) if SKIPPED_ELEMENTS.contains(&e.name()))
            });

            if !hidden {
                text.push_str(text_node);
            }
        }

        if let Some(comment) = node.value().as_comment() {
            if let Some(cdata) = cdata_text(comment) {
                text.push_str(cdata);
            }
        }

        if let Some(element) = node.value().as_element() {
            if BLOCK_ELEMENTS.contains(&element.name()) {
                text.push(' ');
            }
        }
    }

    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let produced_nothing = !root.has_children();
    if text.is_empty()
        && produced_nothing
        && !raw.trim().is_empty()
        && !fragment.errors.is_empty()
    {
        return Err(FeederError::MalformedSummary(fragment.errors.join("; ")));
    }

    Ok(text)
}

fn cdata_text(comment: &str) -> Option<&str> {
    comment.strip_prefix("[CDATA[")?.strip_suffix("]]")
}

/// Keep the first [`SUMMARY_MAX_CHARS`] characters and mark the cut.
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= SUMMARY_MAX_CHARS {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
