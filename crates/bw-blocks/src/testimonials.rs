//! Testimonial and gallery section frames.
//!
//! Both sections own only their frame: the actual testimonial quotes and
//! before/after pairs live in separate CMS stories that the presentation
//! layer fetches and mounts into the frame.

use bw_model::{ContentBlock, RenderedBlock};
use serde::Deserialize;

use crate::markup::heading_group;
use crate::registry::BlockRenderer;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FramePayload {
    heading: String,
    subheading: String,
}

/// Renders `testimonial_container` blocks.
pub struct TestimonialContainerRenderer;

impl BlockRenderer for TestimonialContainerRenderer {
    fn name(&self) -> &'static str {
        "testimonial_container"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: FramePayload = block.payload().ok()?;
        let mut html = String::from("<section class=\"testimonials\">");
        html.push_str(&heading_group(
            Some(&payload.heading),
            Some(&payload.subheading),
        ));
        html.push_str("<div class=\"testimonials-slot\"></div></section>");
        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}

/// Renders `before_after_container` blocks.
pub struct BeforeAfterGalleryRenderer;

impl BlockRenderer for BeforeAfterGalleryRenderer {
    fn name(&self) -> &'static str {
        "before_after_container"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: FramePayload = block.payload().ok()?;
        let mut html = String::from("<section class=\"before-after-gallery\">");
        html.push_str(&heading_group(
            Some(&payload.heading),
            Some(&payload.subheading),
        ));
        html.push_str("<div class=\"gallery-slot\"></div></section>");
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
    fn testimonial_frame_with_headings() {
        let blocks = parse_blocks(json!([{
            "_uid": "t1",
            "component": "testimonial_container",
            "heading": "Kind words",
            "subheading": "From people we worked with"
        }]))
        .unwrap();

        let out = TestimonialContainerRenderer.render(&blocks[0]).unwrap();
        assert_eq!(
            out.html,
            "<section class=\"testimonials\"><h2>Kind words</h2>\
             <p class=\"subheading\">From people we worked with</p>\
             <div class=\"testimonials-slot\"></div></section>"
        );
    }

    #[test]
    fn gallery_frame_renders_without_headings() {
        let blocks = parse_blocks(json!([{
            "_uid": "g1",
            "component": "before_after_container"
        }]))
        .unwrap();

        let out = BeforeAfterGalleryRenderer.render(&blocks[0]).unwrap();
        assert_eq!(
            out.html,
            "<section class=\"before-after-gallery\">\
             <div class=\"gallery-slot\"></div></section>"
        );
    }
}
