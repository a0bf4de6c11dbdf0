//! # Loam Bridge
//!
//! Host-runtime value bridge and property accessor for Loam.
//!
//! This crate lets a dynamically-typed host runtime read and write
//! entries of a persisted, strongly-typed dictionary without knowing
//! the storage representation:
//!
//! - [`HostValue`] / [`HostContext`] - the host runtime's dynamic value
//!   model, including the `Undefined` absent sentinel and live
//!   [`ObjectHandle`]s
//! - [`ValueBridge`] / [`ConversionStrategy`] - kind-dispatched
//!   translation between storage and host values, extensible per
//!   storage kind; [`LinkStrategy`] covers link-to-object values
//! - [`DictionaryAccessor`] / [`PropertyAccess`] - the get/set protocol
//!   over an abstract keyed collection
//! - [`AccessError`] / [`BridgeError`] - the errors that cross (and the
//!   ones absorbed before) the host boundary
//!
//! ## Outcome contract
//!
//! | Situation | Host sees |
//! |-----------|-----------|
//! | Key absent on read | `Undefined` (not an error) |
//! | Write with no active transaction | `AccessError::Transaction` |
//! | Host shape with no storage form | `AccessError::Conversion` |
//! | Any other backend failure | `AccessError::Backend` |
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use loam_bridge::{DictionaryAccessor, HostContext, HostValue, PropertyAccess, ValueBridge};
//! use loam_store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let link = store.write(|| store.create_object("entries")).unwrap().unwrap();
//! let collection = Arc::new(store.dictionary(&link).unwrap());
//!
//! let accessor = DictionaryAccessor::new(collection, ValueBridge::for_store(Arc::new(store.clone())));
//! let cx = HostContext::new();
//!
//! // Missing keys read as the absent sentinel, never as an error
//! assert!(accessor.get(PropertyAccess::read(&cx, "name")).unwrap().is_undefined());
//!
//! // Writes land inside the store's write transaction
//! store.write(|| {
//!     accessor.set(PropertyAccess::write(&cx, "name", HostValue::String("Ada".into())))
//! }).unwrap().unwrap();
//! ```

#![warn(missing_docs)]

mod accessor;
mod bridge;
mod error;
mod host;

pub use accessor::{DictionaryAccessor, PropertyAccess};
pub use bridge::{ConversionStrategy, LinkStrategy, ValueBridge};
pub use error::{AccessError, BridgeError};
pub use host::{HostContext, HostValue, ObjectHandle};
