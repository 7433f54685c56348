//! Boundary errors for parsing CMS payloads.

/// Error returned when a CMS payload cannot be parsed into the model.
///
/// Only the parse boundary is fallible. Once a document or block list has
/// been parsed, rendering never errors; malformed pieces degrade to empty
/// output instead.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The JSON value does not match the expected shape.
    #[error("malformed CMS payload: {0}")]
    Parse(#[from] serde_json::Error),
}
