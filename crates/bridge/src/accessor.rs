//! Dictionary property accessor
//!
//! [`DictionaryAccessor`] implements the host runtime's get/set
//! contract for one keyed collection, composing a [`ValueBridge`] with
//! the abstract collection handle. Each call is a single synchronous
//! request/response; the accessor holds no per-entry state and performs
//! no transactions of its own - it only observes whether the store
//! currently permits writing.
//!
//! Outcome mapping at the boundary:
//!
//! - read of a missing key -> `Undefined` (a normal outcome, not an
//!   error)
//! - write with no active transaction -> `AccessError::Transaction`,
//!   never retried
//! - conversion failure -> `AccessError::Conversion`, before any write
//!   is attempted
//! - any other backend failure -> `AccessError::Backend`, tagged with
//!   the property key

use crate::bridge::ValueBridge;
use crate::error::AccessError;
use crate::host::{HostContext, HostValue};
use loam_core::{KeyedCollection, StoreError};
use std::sync::Arc;

/// Ephemeral bundle describing one property access
///
/// Created per call, dropped when the call returns. `value` is only
/// meaningful for writes; a write request without a value behaves like
/// writing `Undefined` (which persists null).
pub struct PropertyAccess<'a> {
    /// Host call-scope context
    pub context: &'a HostContext,
    /// Property key; opaque, never normalized
    pub key: &'a str,
    /// Value to write, for write requests
    pub value: Option<HostValue>,
}

impl<'a> PropertyAccess<'a> {
    /// Build a read request
    pub fn read(context: &'a HostContext, key: &'a str) -> Self {
        Self {
            context,
            key,
            value: None,
        }
    }

    /// Build a write request
    pub fn write(context: &'a HostContext, key: &'a str, value: HostValue) -> Self {
        Self {
            context,
            key,
            value: Some(value),
        }
    }
}

/// Get/set protocol over one keyed collection
///
/// Holds the collection handle and the bridge that translates values in
/// both directions. Stateless per call.
///
/// # Example
///
/// ```ignore
/// let accessor = DictionaryAccessor::new(collection, ValueBridge::for_store(store));
/// let cx = HostContext::new();
///
/// accessor.set(PropertyAccess::write(&cx, "name", HostValue::String("Ada".into())))?;
/// let name = accessor.get(PropertyAccess::read(&cx, "name"))?;
/// ```
pub struct DictionaryAccessor {
    collection: Arc<dyn KeyedCollection>,
    bridge: ValueBridge,
}

impl DictionaryAccessor {
    /// Create an accessor over `collection` translating through `bridge`
    pub fn new(collection: Arc<dyn KeyedCollection>, bridge: ValueBridge) -> Self {
        Self { collection, bridge }
    }

    /// The bridge, for registering additional strategies
    pub fn bridge_mut(&mut self) -> &mut ValueBridge {
        &mut self.bridge
    }

    /// Read the property named by the request
    ///
    /// Returns `Undefined` when the key is absent; that is the host's
    /// canonical "no such property" and is never an error.
    pub fn get(&self, access: PropertyAccess<'_>) -> Result<HostValue, AccessError> {
        let PropertyAccess { context, key, .. } = access;
        tracing::debug!(target: "loam::accessor", key, "get");

        match self.collection.get(key) {
            Ok(value) => self
                .bridge
                .wrap(context, value)
                .map_err(|source| AccessError::Conversion {
                    key: key.to_string(),
                    source,
                }),
            Err(StoreError::KeyNotFound { .. }) => {
                tracing::debug!(target: "loam::accessor", key, "get: key not found");
                Ok(context.undefined())
            }
            Err(err) => Err(backend_error(key, err)),
        }
    }

    /// Write the property named by the request
    ///
    /// The value is converted before the collection is touched, so a
    /// conversion failure never produces a partial write. A write
    /// outside a transaction is rejected and not retried; retrying
    /// cannot succeed without an external state change.
    pub fn set(&self, access: PropertyAccess<'_>) -> Result<(), AccessError> {
        let PropertyAccess {
            context,
            key,
            value,
        } = access;
        tracing::debug!(target: "loam::accessor", key, "set");

        let value = value.unwrap_or(HostValue::Undefined);
        let storage_value =
            self.bridge
                .unwrap(context, value)
                .map_err(|source| AccessError::Conversion {
                    key: key.to_string(),
                    source,
                })?;

        match self.collection.set(key, storage_value) {
            Ok(()) => Ok(()),
            Err(err @ StoreError::TransactionNotActive) => {
                tracing::warn!(target: "loam::accessor", key, "set rejected: no active write transaction");
                Err(AccessError::Transaction {
                    key: key.to_string(),
                    message: err.to_string(),
                })
            }
            Err(err) => Err(backend_error(key, err)),
        }
    }
}

fn backend_error(key: &str, err: StoreError) -> AccessError {
    tracing::warn!(target: "loam::accessor", key, error = %err, "backend failure");
    AccessError::Backend {
        key: key.to_string(),
        kind: err.category().to_string(),
        message: err.to_string(),
    }
}
