//! Section dispatcher for CMS page bodies.
//!
//! A page body is a flat, ordered list of named component blocks. This crate
//! dispatches each block through an immutable [`BlockRegistry`] (type name →
//! renderer) and collects the rendered output in source order. Unknown block
//! types produce a diagnostic and are omitted; they never abort rendering of
//! their siblings.
//!
//! # Example
//!
//! ```
//! use bw_blocks::SectionRenderer;
//! use bw_model::parse_blocks;
//! use serde_json::json;
//!
//! let blocks = parse_blocks(json!([
//!     {"_uid": "a", "component": "cta", "title": "Talk to us", "href": "/contact"},
//!     {"_uid": "b", "component": "something_new"}
//! ])).unwrap();
//!
//! let result = SectionRenderer::standard().render(&blocks);
//! assert_eq!(result.blocks.len(), 1);
//! assert_eq!(result.warnings.len(), 1);
//! ```

mod case_studies;
mod cta;
mod faq;
mod grids;
mod hero;
mod markup;
mod meta;
mod overview;
mod payment;
mod registry;
mod schema;
mod testimonials;
mod text_image;

pub use case_studies::{CaseStudy, CaseStudyContainerRenderer, CaseStudyContent};
pub use cta::CtaRenderer;
pub use faq::FaqContainerRenderer;
pub use grids::GridRenderer;
pub use hero::{HeroRenderer, PaymentHeaderRenderer};
pub use meta::{MetaDataRenderer, PageMeta, extract_meta};
pub use overview::OverviewIntroRenderer;
pub use payment::PaymentBlockRenderer;
pub use registry::{BlockRegistry, BlockRenderer, SectionRenderResult, SectionRenderer};
pub use schema::SchemaBlockRenderer;
pub use testimonials::{BeforeAfterGalleryRenderer, TestimonialContainerRenderer};
pub use text_image::TextImageSectionRenderer;
