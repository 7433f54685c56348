//! CMS-hosted assets (images, files).

use serde::Deserialize;

/// A CMS asset reference.
///
/// The asset host encodes the upload dimensions in the URL path; explicit
/// width/height fields are rare, so consumers usually go through the
/// dimension resolver in `bw-richtext` instead of reading them here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Asset {
    /// Full asset URL. An empty filename means "no asset".
    pub filename: String,
    /// Alt text, if the editor provided one.
    pub alt: Option<String>,
    /// Title, doubling as an image caption in rich text.
    pub title: Option<String>,
    /// Upload name; informational only.
    pub name: String,
}

impl Asset {
    /// Whether this asset actually points at anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filename.is_empty()
    }

    /// Alt text with a caller-supplied fallback.
    #[must_use]
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_full_asset() {
        let asset: Asset = serde_json::from_value(json!({
            "filename": "https://assets.example/f/1/800x600/abc/pic.png",
            "alt": "A picture",
            "title": "Caption",
            "name": "pic.png"
        }))
        .unwrap();

        assert!(!asset.is_empty());
        assert_eq!(asset.alt_or("fallback"), "A picture");
    }

    #[test]
    fn missing_fields_default() {
        let asset: Asset = serde_json::from_value(json!({})).unwrap();
        assert!(asset.is_empty());
        assert_eq!(asset.alt_or("fallback"), "fallback");
    }

    #[test]
    fn empty_alt_uses_fallback() {
        let asset: Asset = serde_json::from_value(json!({
            "filename": "x.png",
            "alt": ""
        }))
        .unwrap();
        assert_eq!(asset.alt_or("fallback"), "fallback");
    }
}
