//! Split text/image section.

use bw_model::{Asset, ContentBlock, RenderedBlock};
use bw_richtext::{escape_html, resolve_dimensions};
use serde::Deserialize;
use serde_json::Value;

use crate::markup::{attr, render_rich_text};
use crate::registry::BlockRenderer;

/// Section images are square-cropped cards, not full-width figures.
const IMAGE_FALLBACK: (u32, u32) = (640, 640);

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextImagePayload {
    title: String,
    text: Value,
    image: Asset,
    // Single-choice field, but the CMS delivers it as an array.
    image_position: Vec<String>,
}

impl TextImagePayload {
    fn image_right(&self) -> bool {
        self.image_position
            .first()
            .is_none_or(|p| p.eq_ignore_ascii_case("right"))
    }
}

/// Renders `text_image_section` blocks.
///
/// A block with no title, no text and no image renders nothing at all;
/// editors park empty ones on pages as placeholders.
pub struct TextImageSectionRenderer;

impl TextImageSectionRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextImageSectionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRenderer for TextImageSectionRenderer {
    fn name(&self) -> &'static str {
        "text_image_section"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: TextImagePayload = block.payload().ok()?;

        let body = render_rich_text(Some(&payload.text));
        if payload.title.is_empty() && body.is_empty() && payload.image.is_empty() {
            return None;
        }

        let side = if payload.image_right() { "right" } else { "left" };
        let mut html = format!("<section class=\"text-image image-{side}\">");

        html.push_str("<div class=\"text-column\">");
        if !payload.title.is_empty() {
            html.push_str("<h2>");
            html.push_str(&escape_html(&payload.title));
            html.push_str("</h2>");
        }
        html.push_str(&body);
        html.push_str("</div>");

        if !payload.image.is_empty() {
            let (width, height) =
                resolve_dimensions(&payload.image.filename, None, None, IMAGE_FALLBACK);
            html.push_str("<img");
            html.push_str(&attr("src", &payload.image.filename));
            html.push_str(&attr("alt", payload.image.alt_or(&payload.title)));
            html.push_str(&format!(" width=\"{width}\" height=\"{height}\">"));
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
        TextImageSectionRenderer::new().render(&blocks[0])
    }

    #[test]
    fn renders_text_beside_image() {
        let out = render_one(json!({
            "_uid": "t1",
            "component": "text_image_section",
            "title": "Our studio",
            "text": {
                "type": "doc",
                "content": [
                    {"type": "paragraph", "content": [{"type": "text", "text": "Hi."}]}
                ]
            },
            "image": {"filename": "https://assets.example/f/1/1200x630/s/studio.jpg"},
            "image_position": ["left"]
        }))
        .unwrap();

        assert_eq!(
            out.html,
            "<section class=\"text-image image-left\">\
             <div class=\"text-column\"><h2>Our studio</h2><p>Hi.</p></div>\
             <img src=\"https://assets.example/f/1/1200x630/s/studio.jpg\" \
             alt=\"Our studio\" width=\"1200\" height=\"630\">\
             </section>"
        );
    }

    #[test]
    fn image_defaults_to_the_right() {
        let out = render_one(json!({
            "_uid": "t2",
            "component": "text_image_section",
            "title": "T"
        }))
        .unwrap();
        assert!(out.html.starts_with("<section class=\"text-image image-right\">"));
    }

    #[test]
    fn completely_empty_section_renders_nothing() {
        assert!(
            render_one(json!({
                "_uid": "t3",
                "component": "text_image_section"
            }))
            .is_none()
        );
    }

    #[test]
    fn dimensionless_image_url_uses_the_square_fallback() {
        let out = render_one(json!({
            "_uid": "t4",
            "component": "text_image_section",
            "image": {"filename": "https://assets.example/plain.jpg", "alt": "Plain"}
        }))
        .unwrap();
        assert!(out.html.contains("width=\"640\" height=\"640\""));
    }
}
