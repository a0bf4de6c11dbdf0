//! Loam - dynamic-host value bridge for a persisted typed dictionary
//!
//! Loam lets a dynamically-typed host runtime read and write entries of
//! a strongly-typed key/value collection without knowing the storage
//! representation. A per-kind strategy registry translates values in
//! both directions, and a property accessor implements get/set over an
//! abstract keyed collection with transactional and not-found handling.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use loam::{DictionaryAccessor, HostContext, HostValue, MemoryStore, PropertyAccess, ValueBridge};
//!
//! let store = MemoryStore::new();
//! let link = store.write(|| store.create_object("entries")).unwrap().unwrap();
//! let collection = Arc::new(store.dictionary(&link).unwrap());
//!
//! let accessor = DictionaryAccessor::new(collection, ValueBridge::for_store(Arc::new(store.clone())));
//! let cx = HostContext::new();
//!
//! store.write(|| {
//!     accessor.set(PropertyAccess::write(&cx, "name", HostValue::String("Ada".into())))
//! }).unwrap().unwrap();
//!
//! assert_eq!(
//!     accessor.get(PropertyAccess::read(&cx, "name")).unwrap(),
//!     HostValue::String("Ada".into()),
//! );
//! ```
//!
//! # Architecture
//!
//! - `loam-core` - storage value model ([`Value`], [`ValueKind`],
//!   [`ObjLink`]) and the store contract the bridge consumes
//! - `loam-store` - minimal in-memory transactional store
//!   ([`MemoryStore`])
//! - `loam-bridge` - host value model, conversion registry, and the
//!   property accessor

// Re-export the public API
pub use loam_bridge::{
    AccessError, BridgeError, ConversionStrategy, DictionaryAccessor, HostContext, HostValue,
    LinkStrategy, ObjectHandle, PropertyAccess, ValueBridge,
};
pub use loam_core::{
    KeyedCollection, ObjLink, ObjectStore, StoreError, StoreResult, Value, ValueKind,
};
pub use loam_store::{DictionaryHandle, MemoryStore};
