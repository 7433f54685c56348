//! Table structure normalization.

use bw_model::{NodeKind, RichTextNode};

/// Normalize the direct children of a table node.
///
/// Authoring tools are inconsistent about wrapping rows: some documents
/// carry bare `table_row` children, others already wrap them in a
/// `table_head`/`table_body` container. Unwrapped rows produce an invalid
/// table element tree downstream, so when any direct child is a row and no
/// wrapper is present, all children are wrapped in a single synthesized
/// `table_body`, preserving order.
///
/// Idempotent: normalizing already-normalized children is a no-op.
#[must_use]
pub fn normalize_table(children: &[RichTextNode]) -> Vec<RichTextNode> {
    let has_bare_row = children
        .iter()
        .any(|child| child.node_kind() == NodeKind::TableRow);
    let has_wrapper = children
        .iter()
        .any(|child| child.node_kind().is_table_wrapper());

    if has_bare_row && !has_wrapper {
        let body = RichTextNode {
            kind: "table_body".to_owned(),
            content: children.to_vec(),
            ..RichTextNode::default()
        };
        vec![body]
    } else {
        children.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn nodes(value: serde_json::Value) -> Vec<RichTextNode> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn bare_rows_get_body_wrapper() {
        let children = nodes(json!([
            {"type": "table_row"},
            {"type": "table_row"}
        ]));

        let normalized = normalize_table(&children);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].node_kind(), NodeKind::TableBody);
        assert_eq!(normalized[0].content.len(), 2);
        assert_eq!(normalized[0].content[0].node_kind(), NodeKind::TableRow);
    }

    #[test]
    fn wrapped_rows_pass_through() {
        let children = nodes(json!([
            {"type": "table_head", "content": [{"type": "table_row"}]},
            {"type": "table_body", "content": [{"type": "table_row"}]}
        ]));

        let normalized = normalize_table(&children);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].node_kind(), NodeKind::TableHead);
        assert_eq!(normalized[1].node_kind(), NodeKind::TableBody);
    }

    #[test]
    fn empty_children_pass_through() {
        assert!(normalize_table(&[]).is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let children = nodes(json!([
            {"type": "table_row", "content": [{"type": "table_cell"}]},
            {"type": "table_row"}
        ]));

        let once = normalize_table(&children);
        let twice = normalize_table(&once);
        assert_eq!(once.len(), twice.len());
        assert_eq!(twice[0].node_kind(), NodeKind::TableBody);
        assert_eq!(twice[0].content.len(), once[0].content.len());
    }

    #[test]
    fn mixed_rows_and_wrapper_pass_through() {
        // A wrapper is present: trust the document as-is rather than
        // double-wrapping the stray row.
        let children = nodes(json!([
            {"type": "table_head", "content": [{"type": "table_row"}]},
            {"type": "table_row"}
        ]));

        let normalized = normalize_table(&children);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[1].node_kind(), NodeKind::TableRow);
    }
}
