//! FAQ section.

use bw_model::{ContentBlock, RenderedBlock};
use bw_richtext::escape_html;
use serde::Deserialize;

use crate::markup::heading_group;
use crate::registry::BlockRenderer;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FaqPayload {
    heading: String,
    subheading: String,
    questions: Vec<FaqItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FaqItem {
    question: String,
    // Plain text in the schema, not rich text.
    answer: String,
}

/// Renders `faq_container` blocks as a definition list.
pub struct FaqContainerRenderer;

impl BlockRenderer for FaqContainerRenderer {
    fn name(&self) -> &'static str {
        "faq_container"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: FaqPayload = block.payload().ok()?;

        let mut html = String::from("<section class=\"faq\">");
        html.push_str(&heading_group(
            Some(&payload.heading),
            Some(&payload.subheading),
        ));
        html.push_str("<dl>");
        for item in &payload.questions {
            if item.question.is_empty() {
                continue;
            }
            html.push_str("<dt>");
            html.push_str(&escape_html(&item.question));
            html.push_str("</dt><dd>");
            html.push_str(&escape_html(&item.answer));
            html.push_str("</dd>");
        }
        html.push_str("</dl></section>");

        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}
