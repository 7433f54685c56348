//! Image dimension inference.

use std::sync::LazyLock;

use regex::Regex;

/// Default width for rich-text images without any dimension information.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default height for rich-text images without any dimension information.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Asset host convention: upload dimensions as a `<width>x<height>` path
/// segment, e.g. `/f/288302/1200x630/6f473b/pic.png`.
static URL_DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)x(\d+)/").expect("dimension pattern compiles"));

/// Resolve the display dimensions of an image.
///
/// Explicit dimensions win when both are present. Otherwise the URL is
/// searched for the asset host's `<width>x<height>` path segment. That
/// convention is soft: absence of a match (or a malformed URL) is a normal
/// outcome and falls back to `fallback`.
#[must_use]
pub fn resolve_dimensions(
    url: &str,
    explicit_width: Option<u32>,
    explicit_height: Option<u32>,
    fallback: (u32, u32),
) -> (u32, u32) {
    if let (Some(width), Some(height)) = (explicit_width, explicit_height) {
        return (width, height);
    }

    if let Some(caps) = URL_DIMENSIONS.captures(url)
        && let (Ok(width), Ok(height)) = (caps[1].parse(), caps[2].parse())
    {
        return (width, height);
    }

    fallback
}
