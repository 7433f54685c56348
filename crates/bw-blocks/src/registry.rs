//! Block type registry and section dispatch.

use bw_model::{ContentBlock, RenderedBlock};

use crate::case_studies::CaseStudyContainerRenderer;
use crate::cta::CtaRenderer;
use crate::faq::FaqContainerRenderer;
use crate::grids::GridRenderer;
use crate::hero::{HeroRenderer, PaymentHeaderRenderer};
use crate::meta::MetaDataRenderer;
use crate::overview::OverviewIntroRenderer;
use crate::payment::PaymentBlockRenderer;
use crate::schema::SchemaBlockRenderer;
use crate::testimonials::{BeforeAfterGalleryRenderer, TestimonialContainerRenderer};
use crate::text_image::TextImageSectionRenderer;

/// Renderer for one named block type.
pub trait BlockRenderer: Send + Sync {
    /// Block type name this renderer handles.
    fn name(&self) -> &'static str;

    /// Render one block.
    ///
    /// `None` means the block produces no visual output: either the type is
    /// metadata-only by design, or the payload is missing the fields the
    /// renderer needs. Malformed payloads must degrade to `None`, never
    /// panic or emit a partial widget.
    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock>;
}

/// Immutable mapping from block type name to renderer.
///
/// Constructed once at startup and only read afterwards, so it can be
/// shared between concurrently rendering pages without synchronization.
/// New block types are added by extending [`BlockRegistry::standard`];
/// there is no runtime registration.
pub struct BlockRegistry {
    renderers: Vec<Box<dyn BlockRenderer>>,
}

impl BlockRegistry {
    /// Registry with no renderers. Useful for tests and custom setups.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            renderers: Vec::new(),
        }
    }

    /// Registry with every built-in block renderer.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with(HeroRenderer)
            .with(PaymentHeaderRenderer)
            .with(GridRenderer::feature_grid())
            .with(GridRenderer::process_grid())
            .with(GridRenderer::use_case_grid())
            .with(GridRenderer::services_list())
            .with(CtaRenderer)
            .with(FaqContainerRenderer)
            .with(CaseStudyContainerRenderer)
            .with(OverviewIntroRenderer::new())
            .with(TextImageSectionRenderer::new())
            .with(TestimonialContainerRenderer)
            .with(BeforeAfterGalleryRenderer)
            .with(PaymentBlockRenderer::new())
            .with(SchemaBlockRenderer)
            .with(MetaDataRenderer)
    }

    /// Register a renderer.
    #[must_use]
    pub fn with<R: BlockRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderers.push(Box::new(renderer));
        self
    }

    /// Look up the renderer for a block type name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn BlockRenderer> {
        self.renderers
            .iter()
            .find(|renderer| renderer.name() == name)
            .map(AsRef::as_ref)
    }

    /// Registered type names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.renderers.iter().map(|renderer| renderer.name())
    }
}

/// Result of dispatching a page's block list.
#[derive(Debug, Clone)]
pub struct SectionRenderResult {
    /// Rendered sections, source order preserved, no empty entries.
    pub blocks: Vec<RenderedBlock>,
    /// Human-readable diagnostics (unknown block types).
    pub warnings: Vec<String>,
}

/// Dispatches a flat block list through a [`BlockRegistry`].
pub struct SectionRenderer {
    registry: BlockRegistry,
}

impl SectionRenderer {
    /// Create a dispatcher over a custom registry.
    #[must_use]
    pub fn new(registry: BlockRegistry) -> Self {
        Self { registry }
    }

    /// Create a dispatcher over the standard registry.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(BlockRegistry::standard())
    }

    /// Render a page body in order.
    ///
    /// Three outcomes per block: a known type renders (or returns nothing,
    /// silently, when it is metadata-only or its payload is unusable); an
    /// unknown type is logged and omitted. A bad block never affects its
    /// siblings.
    #[must_use]
    pub fn render(&self, blocks: &[ContentBlock]) -> SectionRenderResult {
        let mut rendered = Vec::new();
        let mut warnings = Vec::new();

        for block in blocks {
            match self.registry.get(&block.component) {
                Some(renderer) => {
                    if let Some(output) = renderer.render(block) {
                        rendered.push(output);
                    }
                }
                None => {
                    tracing::warn!(
                        component = %block.component,
                        uid = %block.uid,
                        "unknown section component"
                    );
                    warnings.push(format!(
                        "unknown section component `{}` (uid {})",
                        block.component, block.uid
                    ));
                }
            }
        }

        SectionRenderResult {
            blocks: rendered,
            warnings,
        }
    }
}
