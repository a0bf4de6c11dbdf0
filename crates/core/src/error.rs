//! Error types for the store layer
//!
//! This module defines the errors the keyed-collection contract can fail
//! with. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! The bridge layer never lets these cross the host boundary directly;
//! it absorbs `KeyNotFound` on reads and maps everything else into its
//! own host-visible error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Error types for the store layer
///
/// Structured and serializable so upper layers can forward them across
/// process boundaries without losing detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum StoreError {
    /// Key not present in the collection
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The missing key
        key: String,
    },

    /// Write attempted with no active write transaction
    #[error("no active write transaction")]
    TransactionNotActive,

    /// Operation is invalid in the current state
    #[error("invalid operation: {reason}")]
    InvalidOperation {
        /// What was wrong with the request
        reason: String,
    },

    /// Storage layer failure
    #[error("storage error: {message}")]
    Storage {
        /// Backend-provided description
        message: String,
    },
}

impl StoreError {
    /// Construct a `KeyNotFound` error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        StoreError::KeyNotFound { key: key.into() }
    }

    /// Construct an `InvalidOperation` error
    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        StoreError::InvalidOperation {
            reason: reason.into(),
        }
    }

    /// Construct a `Storage` error
    pub fn storage(message: impl Into<String>) -> Self {
        StoreError::Storage {
            message: message.into(),
        }
    }

    /// Stable category name, used when tagging wrapped backend failures
    pub fn category(&self) -> &'static str {
        match self {
            StoreError::KeyNotFound { .. } => "key_not_found",
            StoreError::TransactionNotActive => "transaction_not_active",
            StoreError::InvalidOperation { .. } => "invalid_operation",
            StoreError::Storage { .. } => "storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_key_not_found() {
        let err = StoreError::key_not_found("name");
        assert!(err.to_string().contains("key not found"));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_error_display_transaction_not_active() {
        let err = StoreError::TransactionNotActive;
        assert!(err.to_string().contains("no active write transaction"));
    }

    #[test]
    fn test_error_display_storage() {
        let err = StoreError::storage("write failed");
        assert!(err.to_string().contains("storage error"));
        assert!(err.to_string().contains("write failed"));
    }

    #[test]
    fn test_category_names_are_stable() {
        assert_eq!(StoreError::key_not_found("k").category(), "key_not_found");
        assert_eq!(
            StoreError::TransactionNotActive.category(),
            "transaction_not_active"
        );
        assert_eq!(StoreError::storage("x").category(), "storage");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> StoreResult<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
