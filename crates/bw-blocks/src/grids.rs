//! Card-grid sections.
//!
//! Four block types share one grid shape: a heading group followed by a list
//! of cards with an icon code, title, body text, and optional outcome line.
//! Field names drifted between the types as the schema evolved, so the
//! payload accepts both spellings for each slot.

use bw_model::{ContentBlock, RenderedBlock};
use bw_richtext::escape_html;
use serde::Deserialize;

use crate::markup::heading_group;
use crate::registry::BlockRenderer;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GridPayload {
    overline: String,
    heading: String,
    headline: String,
    subheading: String,
    subheadline: String,
    columns: Vec<GridItem>,
    items: Vec<GridItem>,
}

impl GridPayload {
    fn heading(&self) -> &str {
        if self.heading.is_empty() {
            &self.headline
        } else {
            &self.heading
        }
    }

    fn subheading(&self) -> &str {
        if self.subheading.is_empty() {
            &self.subheadline
        } else {
            &self.subheading
        }
    }

    fn cards(&self) -> &[GridItem] {
        if self.columns.is_empty() {
            &self.items
        } else {
            &self.columns
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GridItem {
    icon_code: String,
    title: String,
    description: String,
    outcome: String,
}

/// Renders the four grid-shaped block types.
///
/// One renderer per type name, differing only in the section class; use the
/// named constructors when registering.
pub struct GridRenderer {
    name: &'static str,
    class: &'static str,
}

impl GridRenderer {
    #[must_use]
    pub fn feature_grid() -> Self {
        Self {
            name: "feature_grid",
            class: "feature-grid",
        }
    }

    #[must_use]
    pub fn process_grid() -> Self {
        Self {
            name: "process_grid",
            class: "process-grid",
        }
    }

    #[must_use]
    pub fn use_case_grid() -> Self {
        Self {
            name: "use_case_grid",
            class: "use-case-grid",
        }
    }

    #[must_use]
    pub fn services_list() -> Self {
        Self {
            name: "services_list",
            class: "services-list",
        }
    }
}

impl BlockRenderer for GridRenderer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: GridPayload = block.payload().ok()?;

        let mut html = format!("<section class=\"{}\">", self.class);
        if !payload.overline.is_empty() {
            html.push_str("<p class=\"overline\">");
            html.push_str(&escape_html(&payload.overline));
            html.push_str("</p>");
        }
        html.push_str(&heading_group(
            Some(payload.heading()),
            Some(payload.subheading()),
        ));

        html.push_str("<ul class=\"grid\">");
        for card in payload.cards() {
            html.push_str("<li class=\"card\">");
            if !card.icon_code.is_empty() {
                html.push_str("<span class=\"icon\" data-icon=\"");
                html.push_str(&escape_html(&card.icon_code));
                html.push_str("\"></span>");
            }
            if !card.title.is_empty() {
                html.push_str("<h3>");
                html.push_str(&escape_html(&card.title));
                html.push_str("</h3>");
            }
            if !card.description.is_empty() {
                html.push_str("<p>");
                html.push_str(&escape_html(&card.description));
                html.push_str("</p>");
            }
            if !card.outcome.is_empty() {
                html.push_str("<p class=\"outcome\">");
                html.push_str(&escape_html(&card.outcome));
                html.push_str("</p>");
            }
            html.push_str("</li>");
        }
        html.push_str("</ul></section>");

        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}
