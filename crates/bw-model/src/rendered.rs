//! Rendered output units.

/// One renderable unit of output.
///
/// Both rendering paths (rich text and section dispatch) terminate in an
/// ordered sequence of these. Guarantees to the presentation layer:
/// source order is preserved, no entry is empty, and `key` is stable enough
/// for list reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Stable identity (block uid, or a positional key for rich text).
    pub key: String,
    /// Rendered HTML fragment.
    pub html: String,
}

impl RenderedBlock {
    /// Create a rendered block.
    #[must_use]
    pub fn new(key: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            html: html.into(),
        }
    }
}
