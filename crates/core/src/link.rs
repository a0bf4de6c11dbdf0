//! Object links
//!
//! An [`ObjLink`] is the location of a persisted object: the name of the
//! object collection it lives in plus its object id. A `Value::Link`
//! carries one of these; it is only meaningful inside the store that
//! produced it - the bridge layer is responsible for refusing to move
//! links between stores.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Location of a persisted object within a store
///
/// ## Invariants
///
/// - `collection` is an opaque name; no normalization is performed
/// - `object` is unique within the collection
/// - An ObjLink never identifies which *store* it belongs to; store
///   identity is tracked by whoever holds the link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjLink {
    /// Object collection name
    pub collection: String,
    /// Object id within the collection
    pub object: Uuid,
}

impl ObjLink {
    /// Create a link to an object at a known location
    pub fn new(collection: impl Into<String>, object: Uuid) -> Self {
        Self {
            collection: collection.into(),
            object,
        }
    }

    /// Create a link to a fresh object location in the given collection
    pub fn fresh(collection: impl Into<String>) -> Self {
        Self::new(collection, Uuid::new_v4())
    }
}

impl fmt::Display for ObjLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.collection, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_display() {
        let id = Uuid::nil();
        let link = ObjLink::new("people", id);
        assert_eq!(link.to_string(), format!("people:{}", id));
    }

    #[test]
    fn test_fresh_links_are_distinct() {
        let a = ObjLink::fresh("people");
        let b = ObjLink::fresh("people");
        assert_ne!(a, b);
        assert_eq!(a.collection, b.collection);
    }

    #[test]
    fn test_link_serde_roundtrip() {
        let link = ObjLink::fresh("pets");
        let json = serde_json::to_string(&link).unwrap();
        let back: ObjLink = serde_json::from_str(&json).unwrap();
        assert_eq!(link, back);
    }
}
