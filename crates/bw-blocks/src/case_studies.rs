//! Related case study cards.

use bw_model::{Asset, ContentBlock, Reference, RenderedBlock};
use bw_richtext::escape_html;
use serde::Deserialize;

use crate::markup::{attr, heading_group};
use crate::registry::BlockRenderer;

/// A case study story as delivered by the CMS transport.
///
/// `slug` is the shape-check field: a reference object without it stays
/// unresolved and is filtered out of the card grid.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseStudy {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub content: CaseStudyContent,
}

impl CaseStudy {
    /// Card title: the story title, falling back to the story name.
    #[must_use]
    pub fn title(&self) -> &str {
        if self.content.title.is_empty() {
            &self.name
        } else {
            &self.content.title
        }
    }
}

/// Story-level content fields the card grid reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CaseStudyContent {
    pub title: String,
    pub cover_image_sm: Asset,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CaseStudyContainerPayload {
    overline: String,
    headline: String,
    subheadline: String,
    case_studies: Vec<Reference<CaseStudy>>,
}

/// Renders `case_study_container` blocks as a linked card grid.
///
/// The transport resolves case study references best-effort; entries still
/// carrying a raw identifier are dropped without a diagnostic, the rest
/// render as cards in source order.
pub struct CaseStudyContainerRenderer;

impl BlockRenderer for CaseStudyContainerRenderer {
    fn name(&self) -> &'static str {
        "case_study_container"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: CaseStudyContainerPayload = block.payload().ok()?;

        let mut html = String::from("<section class=\"case-studies\">");
        if !payload.overline.is_empty() {
            html.push_str("<p class=\"overline\">");
            html.push_str(&escape_html(&payload.overline));
            html.push_str("</p>");
        }
        html.push_str(&heading_group(
            Some(&payload.headline),
            Some(&payload.subheadline),
        ));

        let studies: Vec<_> = payload
            .case_studies
            .iter()
            .filter_map(Reference::resolved)
            .collect();

        if !studies.is_empty() {
            html.push_str("<ul class=\"card-grid\">");
            for study in studies {
                html.push_str("<li><a class=\"case-study-card\"");
                html.push_str(&attr("href", &format!("/case-studies/{}", study.slug)));
                html.push('>');
                if !study.content.cover_image_sm.is_empty() {
                    html.push_str("<img");
                    html.push_str(&attr("src", &study.content.cover_image_sm.filename));
                    html.push_str(&attr("alt", study.title()));
                    html.push('>');
                }
                html.push_str("<h3>");
                html.push_str(&escape_html(study.title()));
                html.push_str("</h3></a></li>");
            }
            html.push_str("</ul>");
        }

        html.push_str("</section>");
        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}
