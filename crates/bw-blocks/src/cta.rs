//! Call-to-action banner.

use bw_model::{ContentBlock, RenderedBlock};
use bw_richtext::escape_html;
use serde::Deserialize;

use crate::markup::attr;
use crate::registry::BlockRenderer;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CtaPayload {
    title: String,
    description: String,
    link_text: String,
    href: String,
    secondary_link_text: String,
    secondary_href: String,
}

/// Renders `cta` blocks.
///
/// A CTA with missing fields still renders; editors routinely publish these
/// half-filled and the banner degrades gracefully instead of vanishing. A
/// missing `href` falls back to a no-op `#` target.
pub struct CtaRenderer;

impl BlockRenderer for CtaRenderer {
    fn name(&self) -> &'static str {
        "cta"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: CtaPayload = block.payload().ok()?;

        let href = if payload.href.is_empty() {
            "#"
        } else {
            &payload.href
        };

        let mut html = String::from("<section class=\"cta\">");
        html.push_str("<h2>");
        html.push_str(&escape_html(&payload.title));
        html.push_str("</h2>");
        if !payload.description.is_empty() {
            html.push_str("<p>");
            html.push_str(&escape_html(&payload.description));
            html.push_str("</p>");
        }
        html.push_str("<a class=\"cta-link\"");
        html.push_str(&attr("href", href));
        html.push('>');
        html.push_str(&escape_html(&payload.link_text));
        html.push_str("</a>");
        if !payload.secondary_link_text.is_empty() && !payload.secondary_href.is_empty() {
            html.push_str("<a class=\"cta-link secondary\"");
            html.push_str(&attr("href", &payload.secondary_href));
            html.push('>');
            html.push_str(&escape_html(&payload.secondary_link_text));
            html.push_str("</a>");
        }
        html.push_str("</section>");

        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_model::parse_blocks;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render_one(value: serde_json::Value) -> Option<RenderedBlock> {
        let blocks = parse_blocks(json!([value])).unwrap();
        CtaRenderer.render(&blocks[0])
    }

    #[test]
    fn full_cta() {
        let out = render_one(json!({
            "_uid": "c1",
            "component": "cta",
            "title": "Ready?",
            "description": "Tell us about your project.",
            "link_text": "Get in touch",
            "href": "/contact",
            "secondary_link_text": "Our work",
            "secondary_href": "/case-studies"
        }))
        .unwrap();

        assert_eq!(out.key, "c1");
        assert_eq!(
            out.html,
            "<section class=\"cta\"><h2>Ready?</h2>\
             <p>Tell us about your project.</p>\
             <a class=\"cta-link\" href=\"/contact\">Get in touch</a>\
             <a class=\"cta-link secondary\" href=\"/case-studies\">Our work</a>\
             </section>"
        );
    }

    #[test]
    fn empty_cta_still_renders_with_defaults() {
        let out = render_one(json!({"_uid": "c2", "component": "cta"})).unwrap();
        assert_eq!(
            out.html,
            "<section class=\"cta\"><h2></h2><a class=\"cta-link\" href=\"#\"></a></section>"
        );
    }

    #[test]
    fn secondary_link_needs_both_parts() {
        let out = render_one(json!({
            "_uid": "c3",
            "component": "cta",
            "title": "T",
            "secondary_link_text": "Dangling"
        }))
        .unwrap();
        assert!(!out.html.contains("Dangling"));
    }

    #[test]
    fn title_is_escaped() {
        let out = render_one(json!({
            "_uid": "c4",
            "component": "cta",
            "title": "Fish & Chips <now>"
        }))
        .unwrap();
        assert!(out.html.contains("Fish &amp; Chips &lt;now&gt;"));
    }
}
