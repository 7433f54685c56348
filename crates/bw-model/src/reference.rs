//! Relationship fields that may or may not be resolved.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A relationship field: either a raw identifier or the full referenced
/// object.
///
/// The CMS transport resolves UUID references to embedded objects on a
/// best-effort basis: some array entries arrive resolved, others stay raw
/// identifiers. The variant is decided by structural shape, never by type
/// metadata — a JSON string is always [`Reference::Unresolved`], and an
/// object only counts as [`Reference::Resolved`] when it actually carries
/// the fields of `T`. Odd shapes degrade to `Unresolved` so one bad entry
/// cannot sink its siblings.
#[derive(Debug, Clone)]
pub enum Reference<T> {
    /// Raw identifier the transport left unresolved.
    Unresolved(String),
    /// Fully materialized referenced object.
    Resolved(T),
}

impl<T: DeserializeOwned> Reference<T> {
    /// Decide the variant from a raw JSON value by shape check.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(id) => Self::Unresolved(id),
            other => {
                // Keep the id around in case the object is not shaped like T.
                let id = other
                    .get("uuid")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned();
                match serde_json::from_value(other) {
                    Ok(resolved) => Self::Resolved(resolved),
                    Err(_) => Self::Unresolved(id),
                }
            }
        }
    }
}

impl<T> Reference<T> {
    /// The resolved object, if this reference was materialized.
    #[must_use]
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved(_) => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Reference<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Story {
        slug: String,
        name: String,
    }

    #[test]
    fn string_stays_unresolved() {
        let reference: Reference<Story> =
            serde_json::from_value(json!("6d9e3f70-aaaa-bbbb-cccc-000000000000")).unwrap();
        assert!(!reference.is_resolved());
        assert!(reference.resolved().is_none());
    }

    #[test]
    fn matching_object_resolves() {
        let reference: Reference<Story> =
            serde_json::from_value(json!({"slug": "acme", "name": "Acme"})).unwrap();
        let story = reference.resolved().unwrap();
        assert_eq!(story.slug, "acme");
    }

    #[test]
    fn object_without_required_shape_degrades() {
        // Object present, but missing the slug: shape check fails, the uuid
        // is kept as the unresolved identifier.
        let reference: Reference<Story> =
            serde_json::from_value(json!({"uuid": "u-1", "title": "odd"})).unwrap();
        match reference {
            Reference::Unresolved(id) => assert_eq!(id, "u-1"),
            Reference::Resolved(_) => panic!("must not resolve"),
        }
    }

    #[test]
    fn mixed_list_keeps_every_entry() {
        let refs: Vec<Reference<Story>> = serde_json::from_value(json!([
            "raw-uuid",
            {"slug": "one", "name": "One"},
            {"uuid": "u-2"},
            {"slug": "two", "name": "Two"}
        ]))
        .unwrap();

        assert_eq!(refs.len(), 4);
        let resolved: Vec<_> = refs.iter().filter_map(Reference::resolved).collect();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].slug, "one");
        assert_eq!(resolved[1].slug, "two");
    }
}
