//! JSON-LD structured data passthrough.

use bw_model::{ContentBlock, RenderedBlock};
use serde::Deserialize;
use serde_json::Value;

use crate::registry::BlockRenderer;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SchemaPayload {
    json_ld: String,
}

/// Renders `schema_block` blocks into a JSON-LD script tag.
///
/// The textarea content is parsed and re-serialized to normalize editor
/// formatting; if it does not parse, the raw text goes through unchanged
/// with a diagnostic, matching how search engines tolerate sloppy JSON-LD
/// better than a missing block.
pub struct SchemaBlockRenderer;

impl BlockRenderer for SchemaBlockRenderer {
    fn name(&self) -> &'static str {
        "schema_block"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: SchemaPayload = block.payload().ok()?;
        if payload.json_ld.is_empty() {
            return None;
        }

        let body = match serde_json::from_str::<Value>(&payload.json_ld) {
            Ok(parsed) => parsed.to_string(),
            Err(error) => {
                tracing::warn!(uid = %block.uid, %error, "invalid JSON-LD in schema block");
                payload.json_ld
            }
        };

        let html = format!("<script type=\"application/ld+json\">{body}</script>");
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
    fn valid_json_ld_is_normalized() {
        let blocks = parse_blocks(json!([{
            "_uid": "s1",
            "component": "schema_block",
            "json_ld": "{\n  \"@type\": \"Organization\",\n  \"name\": \"Acme\"\n}"
        }]))
        .unwrap();

        let out = SchemaBlockRenderer.render(&blocks[0]).unwrap();
        assert_eq!(
            out.html,
            "<script type=\"application/ld+json\">\
             {\"@type\":\"Organization\",\"name\":\"Acme\"}</script>"
        );
    }

    #[test]
    fn invalid_json_ld_passes_through_raw() {
        let blocks = parse_blocks(json!([{
            "_uid": "s2",
            "component": "schema_block",
            "json_ld": "{not json"
        }]))
        .unwrap();

        let out = SchemaBlockRenderer.render(&blocks[0]).unwrap();
        assert_eq!(
            out.html,
            "<script type=\"application/ld+json\">{not json</script>"
        );
    }

    #[test]
    fn empty_json_ld_renders_nothing() {
        let blocks = parse_blocks(json!([{
            "_uid": "s3",
            "component": "schema_block"
        }]))
        .unwrap();
        assert!(SchemaBlockRenderer.render(&blocks[0]).is_none());
    }
}
