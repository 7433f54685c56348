//! Rich-text document tree as delivered by the CMS.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::ModelError;

/// One element of a CMS rich-text document tree.
///
/// The `kind` tag is an open string set: the CMS can introduce new kinds at
/// any time without a deploy on our side. [`NodeKind::from_tag`] maps the
/// tag onto the closed set the renderer understands, with a catch-all for
/// everything else.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RichTextNode {
    /// Open string tag ("paragraph", "heading", "text", "blok", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Untyped per-kind attributes (heading level, image source, ...).
    pub attrs: Map<String, Value>,
    /// Ordered child nodes; empty for leaf kinds.
    pub content: Vec<RichTextNode>,
    /// Text value; present only on leaf text nodes.
    pub text: Option<String>,
    /// Inline formatting annotations; present only on text nodes.
    pub marks: Vec<Mark>,
}

impl RichTextNode {
    /// Parse a rich-text document (or any subtree) from raw CMS JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] if the value is not object-shaped.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Classified node kind.
    #[must_use]
    pub fn node_kind(&self) -> NodeKind {
        NodeKind::from_tag(&self.kind)
    }

    /// String attribute, if present and actually a string.
    #[must_use]
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Numeric attribute, if present and representable as `u64`.
    #[must_use]
    pub fn attr_u64(&self, key: &str) -> Option<u64> {
        self.attrs.get(key).and_then(Value::as_u64)
    }
}

/// An inline formatting annotation attached to a text node.
///
/// Known kinds are bold, italic, code and link; anything else is ignored by
/// the mark applicator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mark {
    /// Open string tag ("bold", "italic", "code", "link", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Mark attributes (link target, destination, ...).
    pub attrs: Map<String, Value>,
}

impl Mark {
    /// String attribute, if present and actually a string.
    #[must_use]
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }
}

/// Classification of a rich-text node tag.
///
/// Total over all inputs: every tag maps to exactly one variant, unknown
/// tags to [`NodeKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root.
    Doc,
    /// Leaf text node, possibly mark-carrying.
    Text,
    Paragraph,
    Heading,
    BulletList,
    OrderedList,
    ListItem,
    Table,
    /// Head wrapper around header rows.
    TableHead,
    /// Body wrapper around data rows.
    TableBody,
    TableRow,
    /// Header cell (`<th>` styling contract).
    TableHeaderCell,
    /// Data cell (`<td>` styling contract).
    TableCell,
    Blockquote,
    CodeBlock,
    Image,
    HardBreak,
    /// Embedded CMS component ("blok").
    Embedded,
    /// Anything the renderer does not recognize.
    Unknown,
}

impl NodeKind {
    /// Classify an open string tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "doc" => Self::Doc,
            "text" => Self::Text,
            "paragraph" => Self::Paragraph,
            "heading" => Self::Heading,
            "bullet_list" => Self::BulletList,
            "ordered_list" => Self::OrderedList,
            "list_item" => Self::ListItem,
            "table" => Self::Table,
            "table_head" => Self::TableHead,
            "table_body" => Self::TableBody,
            "table_row" => Self::TableRow,
            "table_header" => Self::TableHeaderCell,
            "table_cell" => Self::TableCell,
            "blockquote" => Self::Blockquote,
            "code_block" => Self::CodeBlock,
            "image" => Self::Image,
            "hard_break" => Self::HardBreak,
            "blok" => Self::Embedded,
            _ => Self::Unknown,
        }
    }

    /// Whether this kind wraps table rows (head or body).
    #[must_use]
    pub fn is_table_wrapper(self) -> bool {
        matches!(self, Self::TableHead | Self::TableBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parse_text_node_with_marks() {
        let node = RichTextNode::from_value(json!({
            "type": "text",
            "text": "hello",
            "marks": [
                {"type": "bold"},
                {"type": "link", "attrs": {"href": "/x"}}
            ]
        }))
        .unwrap();

        assert_eq!(node.node_kind(), NodeKind::Text);
        assert_eq!(node.text.as_deref(), Some("hello"));
        assert_eq!(node.marks.len(), 2);
        assert_eq!(node.marks[1].attr_str("href"), Some("/x"));
    }

    #[test]
    fn parse_tolerates_missing_fields() {
        let node = RichTextNode::from_value(json!({"type": "paragraph"})).unwrap();
        assert_eq!(node.node_kind(), NodeKind::Paragraph);
        assert!(node.content.is_empty());
        assert!(node.text.is_none());
        assert!(node.marks.is_empty());
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(RichTextNode::from_value(json!("just a string")).is_err());
    }

    #[test]
    fn classify_known_tags() {
        assert_eq!(NodeKind::from_tag("heading"), NodeKind::Heading);
        assert_eq!(NodeKind::from_tag("bullet_list"), NodeKind::BulletList);
        assert_eq!(NodeKind::from_tag("blok"), NodeKind::Embedded);
        assert_eq!(NodeKind::from_tag("table_header"), NodeKind::TableHeaderCell);
    }

    #[test]
    fn classify_unknown_tag() {
        assert_eq!(NodeKind::from_tag("holo_deck"), NodeKind::Unknown);
        assert_eq!(NodeKind::from_tag(""), NodeKind::Unknown);
    }

    #[test]
    fn attr_accessors_ignore_wrong_types() {
        let node = RichTextNode::from_value(json!({
            "type": "heading",
            "attrs": {"level": 3, "textAlign": "center"}
        }))
        .unwrap();

        assert_eq!(node.attr_u64("level"), Some(3));
        assert_eq!(node.attr_str("textAlign"), Some("center"));
        assert_eq!(node.attr_str("level"), None);
        assert_eq!(node.attr_u64("textAlign"), None);
    }

    #[test]
    fn table_wrapper_kinds() {
        assert!(NodeKind::TableHead.is_table_wrapper());
        assert!(NodeKind::TableBody.is_table_wrapper());
        assert!(!NodeKind::TableRow.is_table_wrapper());
    }
}
