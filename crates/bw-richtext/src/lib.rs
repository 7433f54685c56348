//! Rich-text tree interpreter for CMS documents.
//!
//! Recursively walks a rich-text document (a tree of [`RichTextNode`]s) and
//! produces an ordered sequence of rendered HTML blocks. The interpreter is
//! built for hostile input: the tree comes from an external authoring system,
//! so every malformed or unrecognized piece degrades to empty output for that
//! piece instead of failing the document.
//!
//! # Example
//!
//! ```
//! use bw_model::RichTextNode;
//! use bw_richtext::RichTextRenderer;
//! use serde_json::json;
//!
//! let doc = RichTextNode::from_value(json!({
//!     "type": "doc",
//!     "content": [
//!         {"type": "paragraph", "content": [{"type": "text", "text": "Hello"}]}
//!     ]
//! })).unwrap();
//!
//! let blocks = RichTextRenderer::new().render(&doc).unwrap();
//! assert_eq!(blocks[0].html, "<p>Hello</p>");
//! ```
//!
//! [`RichTextNode`]: bw_model::RichTextNode

mod embed;
mod escape;
mod image;
mod marks;
mod renderer;
mod table;

pub use embed::render_embedded;
pub use escape::escape_html;
pub use image::{DEFAULT_HEIGHT, DEFAULT_WIDTH, resolve_dimensions};
pub use marks::apply_marks;
pub use renderer::RichTextRenderer;
pub use table::normalize_table;
