//! Page-level metadata block.

use bw_model::{Asset, ContentBlock, RenderedBlock};
use serde::Deserialize;

use crate::registry::BlockRenderer;

/// Page metadata lifted out of a `meta_data` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub og_image: Asset,
}

/// Renders `meta_data` blocks — which is to say, does not.
///
/// The block feeds the page shell (title tag, meta description, social
/// image) rather than the visible body, so its renderer returns `None` by
/// design and the dispatcher stays quiet about it. Use [`extract_meta`] to
/// read the values.
pub struct MetaDataRenderer;

impl BlockRenderer for MetaDataRenderer {
    fn name(&self) -> &'static str {
        "meta_data"
    }

    fn render(&self, _block: &ContentBlock) -> Option<RenderedBlock> {
        None
    }
}

/// Find the first `meta_data` block in a page body and read its fields.
#[must_use]
pub fn extract_meta(blocks: &[ContentBlock]) -> Option<PageMeta> {
    blocks
        .iter()
        .find(|block| block.component == "meta_data")
        .and_then(|block| block.payload().ok())
}
