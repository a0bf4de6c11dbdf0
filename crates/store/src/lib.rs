//! # Loam Store
//!
//! Minimal in-memory transactional dictionary store.
//!
//! This crate is the reference implementation of the store contract
//! from `loam-core` ([`KeyedCollection`](loam_core::KeyedCollection) and
//! [`ObjectStore`](loam_core::ObjectStore)): objects holding
//! string-keyed dictionaries, writable only inside a closure-scoped
//! write transaction.
//!
//! The bridge layer does not depend on this crate; anything that honors
//! the core traits can sit behind an accessor. This engine exists to
//! back tests and embedders that need a self-contained store.

#![warn(missing_docs)]

mod store;

pub use store::{DictionaryHandle, MemoryStore};
