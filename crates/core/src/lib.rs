//! # Loam Core
//!
//! Core value model and store contract for Loam.
//!
//! This crate defines:
//! - [`Value`] / [`ValueKind`] - the closed tagged union of persistable
//!   value kinds and its discriminant tag
//! - [`ObjLink`] - the location of a persisted object, the payload of
//!   link values
//! - [`StoreError`] / [`StoreResult`] - the store-layer error taxonomy
//! - [`KeyedCollection`] / [`ObjectStore`] - the abstract contract a
//!   storage engine presents to the bridge layer
//!
//! Nothing here knows about any host runtime; host-side value types and
//! the conversion registry live in `loam-bridge`.

#![warn(missing_docs)]

pub mod error;
pub mod link;
pub mod traits;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use link::ObjLink;
pub use traits::{KeyedCollection, ObjectStore};
pub use value::{Value, ValueKind};
