//! Service overview intro.

use bw_model::{ContentBlock, RenderedBlock};
use bw_richtext::escape_html;
use serde::Deserialize;
use serde_json::Value;

use crate::markup::render_rich_text;
use crate::registry::BlockRenderer;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OverviewPayload {
    overline: String,
    heading: String,
    content: Value,
    icon_grid: Vec<IconGridItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IconGridItem {
    icon_code: String,
    text: String,
    description: String,
}

/// Renders `overview_intro` blocks: an overline/heading pair, a rich-text
/// body, and an optional icon grid beside it.
pub struct OverviewIntroRenderer;

impl OverviewIntroRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverviewIntroRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRenderer for OverviewIntroRenderer {
    fn name(&self) -> &'static str {
        "overview_intro"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: OverviewPayload = block.payload().ok()?;

        let mut html = String::from("<section class=\"overview-intro\">");
        if !payload.overline.is_empty() {
            html.push_str("<p class=\"overline\">");
            html.push_str(&escape_html(&payload.overline));
            html.push_str("</p>");
        }
        if !payload.heading.is_empty() {
            html.push_str("<h2>");
            html.push_str(&escape_html(&payload.heading));
            html.push_str("</h2>");
        }

        let body = render_rich_text(Some(&payload.content));
        if !body.is_empty() {
            html.push_str("<div class=\"overview-body\">");
            html.push_str(&body);
            html.push_str("</div>");
        }

        if !payload.icon_grid.is_empty() {
            html.push_str("<ul class=\"icon-grid\">");
            for item in &payload.icon_grid {
                html.push_str("<li>");
                if !item.icon_code.is_empty() {
                    html.push_str("<span class=\"icon\" data-icon=\"");
                    html.push_str(&escape_html(&item.icon_code));
                    html.push_str("\"></span>");
                }
                if !item.text.is_empty() {
                    html.push_str("<h3>");
                    html.push_str(&escape_html(&item.text));
                    html.push_str("</h3>");
                }
                if !item.description.is_empty() {
                    html.push_str("<p>");
                    html.push_str(&escape_html(&item.description));
                    html.push_str("</p>");
                }
                html.push_str("</li>");
            }
            html.push_str("</ul>");
        }

        html.push_str("</section>");
        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}
