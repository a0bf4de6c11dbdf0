//! Store contract consumed by the bridge layer
//!
//! These traits are the seam between the conversion/accessor code and
//! whatever storage engine actually holds the data. The bridge never
//! sees a concrete engine type; it holds `Arc<dyn KeyedCollection>` and
//! `Arc<dyn ObjectStore>` handles.

use crate::error::StoreResult;
use crate::link::ObjLink;
use crate::value::Value;
use std::sync::Arc;
use uuid::Uuid;

/// One keyed collection of storage values
///
/// ## Contract
///
/// - Keys are opaque strings; implementations must not normalize,
///   case-fold, or coerce them
/// - `get` fails with `StoreError::KeyNotFound` when the key is absent
/// - `set` fails with `StoreError::TransactionNotActive` when no
///   writable transaction is open, and must leave the stored value
///   unchanged in that case
/// - `set` is atomic per key: it either lands in the active transaction
///   or fails cleanly
pub trait KeyedCollection: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StoreResult<Value>;

    /// Store `value` under `key`, creating or replacing the entry
    fn set(&self, key: &str, value: Value) -> StoreResult<()>;
}

/// Link-target resolution within one store
///
/// The object-link conversion strategy closes over one of these; the
/// `Arc` it holds is what guarantees the store outlives the strategy.
pub trait ObjectStore: Send + Sync {
    /// Whether `link` points at an existing object in this store
    fn contains(&self, link: &ObjLink) -> bool;

    /// Open the dictionary of the object `link` points at
    ///
    /// Fails with `StoreError::KeyNotFound` if the target does not
    /// exist.
    fn open(&self, link: &ObjLink) -> StoreResult<Arc<dyn KeyedCollection>>;

    /// Stable identity of this store
    ///
    /// Two handles resolve against the same store exactly when their
    /// `store_id`s are equal. Links and object handles are only valid
    /// within the store that produced them.
    fn store_id(&self) -> Uuid;
}
