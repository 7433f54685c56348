//! Recursive rich-text document renderer.

use std::fmt::Write;

use bw_model::{NodeKind, RenderedBlock, RichTextNode};

use crate::embed::render_embedded;
use crate::escape::escape_html;
use crate::image::{DEFAULT_HEIGHT, DEFAULT_WIDTH, resolve_dimensions};
use crate::marks::apply_marks;
use crate::table::normalize_table;

/// Rich-text document renderer.
///
/// Walks the document tree recursively and produces an ordered sequence of
/// rendered blocks. Every render call is a pure function of the input tree;
/// the renderer holds no mutable state and can be shared freely between
/// threads.
///
/// Nodes that resolve to nothing (unknown leaves, empty paragraphs,
/// malformed embeds) are filtered out. If the whole document resolves to
/// nothing, [`render`](Self::render) returns `None` so callers can omit the
/// surrounding page section entirely.
pub struct RichTextRenderer {
    default_image_size: (u32, u32),
}

impl RichTextRenderer {
    /// Create a renderer with the standard 800x600 image fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_image_size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    /// Override the fallback dimensions used when an image carries no
    /// dimension information at all.
    #[must_use]
    pub fn with_default_image_size(mut self, width: u32, height: u32) -> Self {
        self.default_image_size = (width, height);
        self
    }

    /// Render a rich-text document.
    ///
    /// Returns `None` when the document contains no renderable content —
    /// the "no content" signal, distinct from an empty wrapper.
    #[must_use]
    pub fn render(&self, doc: &RichTextNode) -> Option<Vec<RenderedBlock>> {
        let mut blocks = Vec::new();
        for node in &doc.content {
            for html in self.render_block(node) {
                let key = format!("rt-{}", blocks.len());
                blocks.push(RenderedBlock::new(key, html));
            }
        }
        (!blocks.is_empty()).then_some(blocks)
    }

    /// Render one block-level node. A node may produce zero, one, or
    /// several sibling fragments (a paragraph with embedded images splits).
    fn render_block(&self, node: &RichTextNode) -> Vec<String> {
        match node.node_kind() {
            NodeKind::Paragraph => self.render_paragraph(node),
            NodeKind::Heading => single(self.render_heading(node)),
            NodeKind::BulletList => single(self.render_list(node, "ul")),
            NodeKind::OrderedList => single(self.render_list(node, "ol")),
            NodeKind::ListItem => single(self.render_list_item(node)),
            NodeKind::Table => single(self.render_table(node)),
            NodeKind::TableHead
            | NodeKind::TableBody
            | NodeKind::TableRow
            | NodeKind::TableHeaderCell
            | NodeKind::TableCell => single(self.render_table_part(node)),
            NodeKind::Blockquote => single(self.render_blockquote(node)),
            NodeKind::CodeBlock => single(self.render_code_block(node)),
            NodeKind::Image => single(self.render_image(node)),
            NodeKind::HardBreak => vec!["<br>".to_owned()],
            NodeKind::Embedded => render_embedded(node).into_iter().collect(),
            NodeKind::Text => single(self.render_inline(node)),
            // Forward compatibility: an unrecognized kind that wraps known
            // content renders its children spliced in place; an
            // unrecognized leaf renders nothing.
            NodeKind::Doc | NodeKind::Unknown => self.splice_children(node),
        }
    }

    fn splice_children(&self, node: &RichTextNode) -> Vec<String> {
        node.content
            .iter()
            .flat_map(|child| self.render_block(child))
            .collect()
    }

    /// Render one inline node into an HTML fragment.
    fn render_inline(&self, node: &RichTextNode) -> String {
        match node.node_kind() {
            NodeKind::Text => apply_marks(node.text.as_deref().unwrap_or_default(), &node.marks),
            NodeKind::HardBreak => "<br>".to_owned(),
            NodeKind::Image => self.render_image(node),
            _ => node
                .content
                .iter()
                .map(|child| self.render_inline(child))
                .collect(),
        }
    }

    fn render_paragraph(&self, node: &RichTextNode) -> Vec<String> {
        // Block-level images must not nest inside inline flow. Split them
        // out: the text paragraph first, then the images as sibling blocks,
        // relative image order preserved. A paragraph whose sole child is an
        // image loses the wrapper entirely.
        let (inline_children, image_children): (Vec<_>, Vec<_>) = node
            .content
            .iter()
            .partition(|child| child.node_kind() != NodeKind::Image);

        let mut out = Vec::new();

        let inline_html: String = inline_children
            .iter()
            .map(|child| self.render_inline(child))
            .collect();
        if !inline_html.is_empty() {
            let class = node
                .attr_str("textAlign")
                .map(|align| format!(r#" class="text-{}""#, escape_html(align)))
                .unwrap_or_default();
            out.push(format!("<p{class}>{inline_html}</p>"));
        }

        for image in image_children {
            let html = self.render_image(image);
            if !html.is_empty() {
                out.push(html);
            }
        }
        out
    }

    fn render_heading(&self, node: &RichTextNode) -> String {
        let level = match node.attr_u64("level") {
            Some(level @ 1..=6) => level,
            _ => 2,
        };
        let inner: String = node
            .content
            .iter()
            .map(|child| self.render_inline(child))
            .collect();
        if inner.is_empty() {
            String::new()
        } else {
            format!("<h{level}>{inner}</h{level}>")
        }
    }

    fn render_list(&self, node: &RichTextNode, tag: &str) -> String {
        let inner: String = node
            .content
            .iter()
            .flat_map(|child| self.render_block(child))
            .collect();
        if inner.is_empty() {
            String::new()
        } else {
            format!("<{tag}>{inner}</{tag}>")
        }
    }

    fn render_list_item(&self, node: &RichTextNode) -> String {
        let inner: String = node
            .content
            .iter()
            .flat_map(|child| self.render_block(child))
            .collect();
        if inner.is_empty() {
            String::new()
        } else {
            format!("<li>{inner}</li>")
        }
    }

    fn render_blockquote(&self, node: &RichTextNode) -> String {
        let inner: String = node
            .content
            .iter()
            .flat_map(|child| self.render_block(child))
            .collect();
        if inner.is_empty() {
            String::new()
        } else {
            format!("<blockquote>{inner}</blockquote>")
        }
    }

    fn render_code_block(&self, node: &RichTextNode) -> String {
        let code = collect_text(node);
        if code.is_empty() {
            return String::new();
        }
        let class = node
            .attr_str("class")
            .map(|class| format!(r#" class="{}""#, escape_html(class)))
            .unwrap_or_default();
        format!("<pre><code{class}>{}</code></pre>", escape_html(&code))
    }

    fn render_table(&self, node: &RichTextNode) -> String {
        let children = normalize_table(&node.content);
        let inner: String = children
            .iter()
            .map(|child| self.render_table_part(child))
            .collect();
        if inner.is_empty() {
            String::new()
        } else {
            format!("<table>{inner}</table>")
        }
    }

    fn render_table_part(&self, node: &RichTextNode) -> String {
        match node.node_kind() {
            NodeKind::TableHead => self.render_table_section(node, "thead"),
            NodeKind::TableBody => self.render_table_section(node, "tbody"),
            NodeKind::TableRow => {
                let cells: String = node
                    .content
                    .iter()
                    .map(|child| self.render_table_part(child))
                    .collect();
                format!("<tr>{cells}</tr>")
            }
            NodeKind::TableHeaderCell => self.render_cell(node, "th"),
            NodeKind::TableCell => self.render_cell(node, "td"),
            _ => self.render_block(node).concat(),
        }
    }

    fn render_table_section(&self, node: &RichTextNode, tag: &str) -> String {
        let rows: String = node
            .content
            .iter()
            .map(|child| self.render_table_part(child))
            .collect();
        format!("<{tag}>{rows}</{tag}>")
    }

    fn render_cell(&self, node: &RichTextNode, tag: &str) -> String {
        let inner: String = node
            .content
            .iter()
            .flat_map(|child| self.render_block(child))
            .collect();
        // An empty cell still renders a non-collapsing placeholder so the
        // table grid stays intact.
        if inner.is_empty() {
            format!("<{tag}>&nbsp;</{tag}>")
        } else {
            format!("<{tag}>{inner}</{tag}>")
        }
    }

    fn render_image(&self, node: &RichTextNode) -> String {
        let Some(src) = node.attr_str("src").filter(|src| !src.is_empty()) else {
            return String::new();
        };

        let alt = node.attr_str("alt").unwrap_or_default();
        let caption = node.attr_str("title").unwrap_or_default();
        let explicit_width = node.attr_u64("width").and_then(|w| u32::try_from(w).ok());
        let explicit_height = node.attr_u64("height").and_then(|h| u32::try_from(h).ok());
        let (width, height) = resolve_dimensions(
            src,
            explicit_width,
            explicit_height,
            self.default_image_size,
        );

        let mut out = format!(
            r#"<figure><img src="{}" alt="{}" width="{width}" height="{height}">"#,
            escape_html(src),
            escape_html(alt)
        );
        if !caption.is_empty() {
            write!(out, "<figcaption>{}</figcaption>", escape_html(caption)).unwrap();
        }
        out.push_str("</figure>");
        out
    }
}

impl Default for RichTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep a fragment only when it actually rendered something.
fn single(html: String) -> Vec<String> {
    if html.is_empty() { Vec::new() } else { vec![html] }
}

/// Collect the raw text of a subtree (code block contents).
fn collect_text(node: &RichTextNode) -> String {
    let mut out = String::new();
    if let Some(text) = node.text.as_deref() {
        out.push_str(text);
    }
    for child in &node.content {
        out.push_str(&collect_text(child));
    }
    out
}
