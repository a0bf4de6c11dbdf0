//! Error types for the host boundary
//!
//! Two layers, converted at the accessor:
//!
//! - [`BridgeError`] - failures inside value conversion (no property
//!   key in scope yet)
//! - [`AccessError`] - what actually crosses the host boundary; every
//!   variant names the property key it concerns
//!
//! `StoreError::KeyNotFound` never appears here: a missing key is a
//! normal read outcome and is absorbed into `Undefined` before the
//! boundary.

use loam_core::{ObjLink, StoreError, ValueKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures while converting between storage and host values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum BridgeError {
    /// The host value's shape has no storage representation
    #[error("conversion not possible for host type: {shape}")]
    UnsupportedValueType {
        /// Host-side shape name
        shape: String,
    },

    /// No strategy is registered for a kind that needs one
    #[error("no conversion strategy registered for kind: {kind}")]
    NoStrategy {
        /// The storage kind that had no strategy
        kind: ValueKind,
    },

    /// A link value points at an object that does not exist
    #[error("link target not found: {link}")]
    DanglingLink {
        /// The dangling location
        link: ObjLink,
    },

    /// An object handle is bound to a different store
    #[error("object handle belongs to a different store")]
    ForeignObject,

    /// Store failure during conversion (link resolution)
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BridgeError {
    /// Construct an `UnsupportedValueType` error for a host shape
    pub fn unsupported(shape: impl Into<String>) -> Self {
        BridgeError::UnsupportedValueType {
            shape: shape.into(),
        }
    }
}

/// Property access errors, as seen by the host runtime
///
/// Every variant is tagged with the property key to aid diagnosis.
/// Structured and serializable so host SDKs can rethrow them in their
/// own idiom without parsing messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum AccessError {
    /// Write rejected: no active write transaction
    #[error("cannot write property '{key}': {message}")]
    Transaction {
        /// Property key the write targeted
        key: String,
        /// Backend-provided message
        message: String,
    },

    /// Value conversion failed; no write was attempted
    #[error("cannot convert value for property '{key}': {source}")]
    Conversion {
        /// Property key the access targeted
        key: String,
        /// The underlying conversion failure
        #[source]
        source: BridgeError,
    },

    /// Any other backend failure, wrapped rather than dropped
    #[error("access to property '{key}' failed ({kind}): {message}")]
    Backend {
        /// Property key the access targeted
        key: String,
        /// Stable backend error category
        kind: String,
        /// Backend-provided message
        message: String,
    },
}

impl AccessError {
    /// The property key this error concerns
    pub fn key(&self) -> &str {
        match self {
            AccessError::Transaction { key, .. }
            | AccessError::Conversion { key, .. }
            | AccessError::Backend { key, .. } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_names_shape() {
        let err = BridgeError::unsupported("Callable");
        assert_eq!(
            err.to_string(),
            "conversion not possible for host type: Callable"
        );
    }

    #[test]
    fn test_transaction_error_names_key_and_message() {
        let err = AccessError::Transaction {
            key: "name".into(),
            message: StoreError::TransactionNotActive.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("no active write transaction"));
        assert_eq!(err.key(), "name");
    }

    #[test]
    fn test_store_error_passes_through_transparently() {
        let err: BridgeError = StoreError::storage("disk gone").into();
        assert_eq!(err.to_string(), "storage error: disk gone");
    }

    #[test]
    fn test_access_error_serializes() {
        let err = AccessError::Conversion {
            key: "a".into(),
            source: BridgeError::unsupported("Object"),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: AccessError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
