//! Shared HTML fragments used by several block renderers.

use bw_model::RichTextNode;
use bw_richtext::{RichTextRenderer, escape_html};
use serde_json::Value;

/// `<h2>`/`<p>` heading group emitted at the top of most sections.
///
/// Either part may be absent; an entirely empty group renders as nothing.
pub(crate) fn heading_group(heading: Option<&str>, subheading: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(heading) = heading.filter(|h| !h.is_empty()) {
        out.push_str("<h2>");
        out.push_str(&escape_html(heading));
        out.push_str("</h2>");
    }
    if let Some(subheading) = subheading.filter(|s| !s.is_empty()) {
        out.push_str("<p class=\"subheading\">");
        out.push_str(&escape_html(subheading));
        out.push_str("</p>");
    }
    out
}

/// Render an embedded rich-text field to one HTML string.
///
/// Block payloads carry rich text as a raw JSON document; a missing or
/// malformed field renders as the empty string rather than failing the
/// whole block.
pub(crate) fn render_rich_text(field: Option<&Value>) -> String {
    let Some(value) = field else {
        return String::new();
    };
    let Ok(doc) = RichTextNode::from_value(value.clone()) else {
        return String::new();
    };
    match RichTextRenderer::new().render(&doc) {
        Some(blocks) => blocks.into_iter().map(|b| b.html).collect(),
        None => String::new(),
    }
}

/// `attr="value"` pair with an escaped value, preceded by a space.
pub(crate) fn attr(name: &str, value: &str) -> String {
    format!(" {name}=\"{}\"", escape_html(value))
}
