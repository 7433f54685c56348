//! Top-level page components ("blocks").

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::ModelError;

/// A named, flat unit of page composition.
///
/// A page body is an ordered list of blocks. Each block declares its type in
/// `component` (an open string set) and carries arbitrary type-specific
/// fields, captured here as raw JSON and narrowed to a concrete payload
/// struct at the dispatch boundary via [`ContentBlock::payload`].
///
/// Blocks are created and owned by the CMS; blokweave only reads them.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    /// Stable identity for list rendering.
    #[serde(rename = "_uid", default)]
    pub uid: String,
    /// Declared block type name.
    pub component: String,
    /// Type-specific fields, untyped until dispatch.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentBlock {
    /// Narrow the untyped fields into a concrete payload type.
    ///
    /// Payload structs use `#[serde(default)]` throughout, so this only
    /// fails when a field is present with a genuinely wrong shape.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] when the fields do not fit `T`.
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, ModelError> {
        Ok(serde_json::from_value(Value::Object(self.fields.clone()))?)
    }

    /// Raw access to a single field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Parse a page body (JSON array) into an ordered block list.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] if the value is not an array of
/// component-bearing objects.
pub fn parse_blocks(value: Value) -> Result<Vec<ContentBlock>, ModelError> {
    Ok(serde_json::from_value(value)?)
}
