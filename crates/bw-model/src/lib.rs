//! Shared content model for the blokweave rendering engine.
//!
//! This crate provides the types that cross the CMS boundary:
//! - [`RichTextNode`] / [`Mark`]: the rich-text document tree
//! - [`NodeKind`]: classification of a node's open string tag
//! - [`ContentBlock`]: a named top-level page component
//! - [`Asset`]: a CMS-hosted image or file
//! - [`Reference`]: a relationship field that may or may not be resolved
//! - [`RenderedBlock`]: one unit of rendered output
//!
//! The CMS owns all of this data; blokweave only ever reads it. Parsing
//! happens once at the boundary ([`RichTextNode::from_value`],
//! [`parse_blocks`]); everything past that point is infallible.

mod asset;
mod block;
mod error;
mod node;
mod reference;
mod rendered;

pub use asset::Asset;
pub use block::{ContentBlock, parse_blocks};
pub use error::ModelError;
pub use node::{Mark, NodeKind, RichTextNode};
pub use reference::Reference;
pub use rendered::RenderedBlock;
