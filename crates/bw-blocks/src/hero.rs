//! Page hero sections.

use bw_model::{Asset, ContentBlock, RenderedBlock};
use bw_richtext::escape_html;
use serde::Deserialize;

use crate::markup::attr;
use crate::registry::BlockRenderer;

/// Background shown when the hero carries no image of its own. Payment page
/// headers always use it, regardless of what the editor uploaded.
const DEFAULT_BACKGROUND: &str = "/assets/hero-default.png";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeroPayload {
    headline: String,
    subheadline: String,
    cta_text: String,
    cta_link: String,
    secondary_cta_text: String,
    secondary_cta_link: String,
    background_image: Asset,
    trust_bar_below: bool,
    blocks: Vec<ContentBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Testimonial {
    name: String,
    company: String,
    testimonial: String,
}

/// Empty strings, bare `#` and javascript: URLs come out of the CMS often
/// enough that a CTA with one renders as a disabled label instead of a link.
fn is_valid_href(href: &str) -> bool {
    let href = href.trim();
    !href.is_empty() && href != "#" && !href.to_ascii_lowercase().starts_with("javascript:")
}

fn push_background(html: &mut String, src: &str) {
    html.push_str("<img class=\"hero-background\"");
    html.push_str(&attr("src", src));
    html.push_str(" alt=\"Hero background\">");
}

/// Renders `hero_service` blocks.
///
/// Full-bleed hero: headline, optional subheadline, up to two CTAs, and an
/// optional trust bar quoting a testimonial embedded in the block list.
pub struct HeroRenderer;

impl HeroRenderer {
    fn trust_bar(payload: &HeroPayload) -> String {
        let Some(quote) = payload
            .blocks
            .iter()
            .find(|b| b.component == "testimonial")
            .and_then(|b| b.payload::<Testimonial>().ok())
        else {
            return "<aside class=\"trust-bar\"></aside>".to_owned();
        };

        let mut html = String::from("<aside class=\"trust-bar\"><blockquote>");
        html.push_str(&escape_html(&quote.testimonial));
        html.push_str("</blockquote><cite>");
        html.push_str(&escape_html(&quote.name));
        if !quote.company.is_empty() {
            html.push_str(", ");
            html.push_str(&escape_html(&quote.company));
        }
        html.push_str("</cite></aside>");
        html
    }
}

impl BlockRenderer for HeroRenderer {
    fn name(&self) -> &'static str {
        "hero_service"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: HeroPayload = block.payload().ok()?;

        let background = if payload.background_image.is_empty() {
            DEFAULT_BACKGROUND
        } else {
            &payload.background_image.filename
        };

        let mut html = String::from("<section class=\"hero\">");
        push_background(&mut html, background);

        html.push_str("<h1>");
        html.push_str(&escape_html(&payload.headline));
        html.push_str("</h1>");

        if !payload.subheadline.is_empty() {
            html.push_str("<p class=\"subheadline\">");
            html.push_str(&escape_html(&payload.subheadline));
            html.push_str("</p>");
        }

        if !payload.cta_text.is_empty() {
            if is_valid_href(&payload.cta_link) {
                html.push_str("<a class=\"cta-link\"");
                html.push_str(&attr("href", &payload.cta_link));
                html.push('>');
                html.push_str(&escape_html(&payload.cta_text));
                html.push_str("</a>");
            } else {
                html.push_str("<span class=\"cta-link disabled\">");
                html.push_str(&escape_html(&payload.cta_text));
                html.push_str("</span>");
            }
        }
        if !payload.secondary_cta_text.is_empty() && is_valid_href(&payload.secondary_cta_link) {
            html.push_str("<a class=\"cta-link secondary\"");
            html.push_str(&attr("href", &payload.secondary_cta_link));
            html.push('>');
            html.push_str(&escape_html(&payload.secondary_cta_text));
            html.push_str("</a>");
        }

        html.push_str("</section>");

        if payload.trust_bar_below {
            html.push_str(&Self::trust_bar(&payload));
        }

        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeaderPayload {
    title: String,
}

/// Renders `header` blocks (payment page headers).
///
/// A slimmer schema rendered through the same hero frame. The stock
/// background is used unconditionally so payment pages stay uniform.
pub struct PaymentHeaderRenderer;

impl BlockRenderer for PaymentHeaderRenderer {
    fn name(&self) -> &'static str {
        "header"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: HeaderPayload = block.payload().ok()?;

        let mut html = String::from("<section class=\"hero\">");
        push_background(&mut html, DEFAULT_BACKGROUND);
        html.push_str("<h1>");
        html.push_str(&escape_html(&payload.title));
        html.push_str("</h1></section>");

        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_model::parse_blocks;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn hero_with_background_and_both_ctas() {
        let blocks = parse_blocks(json!([{
            "_uid": "h1",
            "component": "hero_service",
            "headline": "Web development",
            "subheadline": "From idea to launch",
            "cta_text": "Start now",
            "cta_link": "/contact",
            "secondary_cta_text": "See our work",
            "secondary_cta_link": "/case-studies",
            "background_image": {"filename": "https://assets.example/f/1/1600x900/abc/bg.jpg"}
        }]))
        .unwrap();

        let out = HeroRenderer.render(&blocks[0]).unwrap();
        assert_eq!(
            out.html,
            "<section class=\"hero\">\
             <img class=\"hero-background\" \
             src=\"https://assets.example/f/1/1600x900/abc/bg.jpg\" \
             alt=\"Hero background\">\
             <h1>Web development</h1>\
             <p class=\"subheadline\">From idea to launch</p>\
             <a class=\"cta-link\" href=\"/contact\">Start now</a>\
             <a class=\"cta-link secondary\" href=\"/case-studies\">See our work</a>\
             </section>"
        );
    }

    #[test]
    fn missing_background_uses_the_default() {
        let blocks = parse_blocks(json!([{
            "_uid": "h2",
            "component": "hero_service",
            "headline": "Just a headline"
        }]))
        .unwrap();

        let out = HeroRenderer.render(&blocks[0]).unwrap();
        assert!(out.html.contains(DEFAULT_BACKGROUND));
        assert!(out.html.contains("<h1>Just a headline</h1>"));
    }

    #[test]
    fn invalid_cta_link_renders_a_disabled_label() {
        for bad in ["", "#", "javascript:alert(1)", "  "] {
            let blocks = parse_blocks(json!([{
                "_uid": "h3",
                "component": "hero_service",
                "headline": "X",
                "cta_text": "Click me",
                "cta_link": bad
            }]))
            .unwrap();

            let out = HeroRenderer.render(&blocks[0]).unwrap();
            assert!(
                out.html
                    .contains("<span class=\"cta-link disabled\">Click me</span>"),
                "href {bad:?} should disable the CTA"
            );
        }
    }

    #[test]
    fn trust_bar_quotes_the_embedded_testimonial() {
        let blocks = parse_blocks(json!([{
            "_uid": "h4",
            "component": "hero_service",
            "headline": "X",
            "trust_bar_below": true,
            "blocks": [
                {"_uid": "t1", "component": "testimonial",
                 "name": "Sam", "company": "Acme", "testimonial": "Superb work."}
            ]
        }]))
        .unwrap();

        let out = HeroRenderer.render(&blocks[0]).unwrap();
        assert!(out.html.contains(
            "<aside class=\"trust-bar\"><blockquote>Superb work.</blockquote>\
             <cite>Sam, Acme</cite></aside>"
        ));
    }

    #[test]
    fn trust_bar_omitted_unless_requested() {
        let blocks = parse_blocks(json!([{
            "_uid": "h5",
            "component": "hero_service",
            "headline": "X",
            "blocks": [
                {"_uid": "t1", "component": "testimonial", "name": "Sam"}
            ]
        }]))
        .unwrap();

        let out = HeroRenderer.render(&blocks[0]).unwrap();
        assert!(!out.html.contains("trust-bar"));
    }

    #[test]
    fn payment_header_always_uses_the_stock_background() {
        let blocks = parse_blocks(json!([{
            "_uid": "h6",
            "component": "header",
            "title": "Invoice 1042",
            "background_image": {"filename": "https://assets.example/f/1/800x600/x/own.jpg"}
        }]))
        .unwrap();

        let out = PaymentHeaderRenderer.render(&blocks[0]).unwrap();
        assert!(out.html.contains(DEFAULT_BACKGROUND));
        assert!(!out.html.contains("own.jpg"));
        assert!(out.html.contains("<h1>Invoice 1042</h1>"));
    }
}
