//! Inline mark application.

use std::fmt::Write;

use bw_model::Mark;

use crate::escape::escape_html;

/// Apply inline marks to a leaf text value.
///
/// Marks are applied by iterating the source list in reverse, each mark
/// wrapping the previous result, so the mark appearing earliest in the
/// source ends up as the outermost wrapper. This order is a documented
/// contract of the renderer: nested combinations (a bold link, say) are
/// visually order-sensitive, so it must not change without product sign-off.
///
/// Unknown mark kinds are skipped; the text passes through unchanged for
/// that mark.
#[must_use]
pub fn apply_marks(text: &str, marks: &[Mark]) -> String {
    let mut html = escape_html(text).into_owned();
    for mark in marks.iter().rev() {
        html = match mark.kind.as_str() {
            "bold" => format!("<strong>{html}</strong>"),
            "italic" => format!("<em>{html}</em>"),
            "code" => format!("<code>{html}</code>"),
            "link" => wrap_link(&html, mark),
            _ => html,
        };
    }
    html
}

fn wrap_link(inner: &str, mark: &Mark) -> String {
    let href = match mark.attr_str("href") {
        Some(href) if !href.is_empty() => href,
        // Safe no-op target when the editor saved a link without one.
        _ => "#",
    };

    let external = is_external(href);
    let target = if external {
        "_blank"
    } else {
        mark.attr_str("target").unwrap_or("_self")
    };

    let mut out = format!(r#"<a href="{}""#, escape_html(href));
    if target != "_self" {
        write!(out, r#" target="{}""#, escape_html(target)).unwrap();
    }
    if target == "_blank" {
        // New browsing context must not get a back-reference to this page.
        out.push_str(r#" rel="noopener noreferrer""#);
    }
    out.push('>');
    out.push_str(inner);
    out.push_str("</a>");
    out
}

/// Whether a link destination leaves the site.
fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}
