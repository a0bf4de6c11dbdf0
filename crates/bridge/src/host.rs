//! Host-runtime value model
//!
//! [`HostValue`] is the dynamic value representation of the host
//! runtime sitting on top of the store: every shape a host-side
//! expression can produce, including shapes with no storage form.
//!
//! Two shapes deserve attention:
//!
//! - `Undefined` is the canonical absent sentinel. It is what property
//!   reads of missing keys return, and it is distinct from `Null`
//!   (a present entry holding nothing). Writing `Undefined` persists
//!   `Null`, matching dynamic runtimes where assigning `undefined`
//!   stores a null.
//! - `Object` is a live handle to a persisted object, bound to the
//!   store it came from. Handles never migrate between stores.

use chrono::{DateTime, Utc};
use loam_core::{KeyedCollection, ObjLink, ObjectStore, StoreResult, ValueKind};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// The host runtime's dynamic value
///
/// Structural mirror of the storage kinds plus the host-only shapes
/// `Undefined`, `Object`, and `Callable`. Equality is shape-wise with
/// IEEE-754 float semantics; object handles compare by link and store
/// identity.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Absent sentinel: "no such property"
    Undefined,
    /// Present, holding nothing
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit IEEE-754 float
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// UTC point in time
    Timestamp(DateTime<Utc>),
    /// 128-bit identifier
    Uuid(Uuid),
    /// Ordered sequence of host values
    List(Vec<HostValue>),
    /// String-keyed map of host values
    Dictionary(HashMap<String, HostValue>),
    /// Live handle to a persisted object
    Object(ObjectHandle),
    /// Host-only callable (function, method); has no storage form
    Callable(String),
}

impl HostValue {
    /// Host-side shape name, used in conversion error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "Undefined",
            HostValue::Null => "Null",
            HostValue::Bool(_) => "Bool",
            HostValue::Int(_) => "Int",
            HostValue::Float(_) => "Float",
            HostValue::String(_) => "String",
            HostValue::Bytes(_) => "Bytes",
            HostValue::Timestamp(_) => "Timestamp",
            HostValue::Uuid(_) => "Uuid",
            HostValue::List(_) => "List",
            HostValue::Dictionary(_) => "Dictionary",
            HostValue::Object(_) => "Object",
            HostValue::Callable(_) => "Callable",
        }
    }

    /// Classify this shape to the storage kind it would persist as
    ///
    /// `None` means the shape has no storage representation and can
    /// never be unwrapped. `Undefined` classifies as `Null`: dynamic
    /// runtimes persist an assigned `undefined` as null.
    pub fn storage_kind(&self) -> Option<ValueKind> {
        match self {
            HostValue::Undefined | HostValue::Null => Some(ValueKind::Null),
            HostValue::Bool(_) => Some(ValueKind::Bool),
            HostValue::Int(_) => Some(ValueKind::Int),
            HostValue::Float(_) => Some(ValueKind::Float),
            HostValue::String(_) => Some(ValueKind::String),
            HostValue::Bytes(_) => Some(ValueKind::Bytes),
            HostValue::Timestamp(_) => Some(ValueKind::Timestamp),
            HostValue::Uuid(_) => Some(ValueKind::Uuid),
            HostValue::List(_) => Some(ValueKind::List),
            HostValue::Dictionary(_) => Some(ValueKind::Dictionary),
            HostValue::Object(_) => Some(ValueKind::Link),
            HostValue::Callable(_) => None,
        }
    }

    /// Check if this is the absent sentinel
    pub fn is_undefined(&self) -> bool {
        matches!(self, HostValue::Undefined)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            HostValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as object handle
    pub fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            HostValue::Object(h) => Some(h),
            _ => None,
        }
    }
}

/// Live host-side handle to a persisted object
///
/// Carries the object's location and a shared handle to the store it
/// lives in, so the handle can open the object's dictionary and the
/// bridge can refuse handles from other stores. The store reference is
/// what keeps the store alive for the handle's lifetime.
#[derive(Clone)]
pub struct ObjectHandle {
    link: ObjLink,
    store: Arc<dyn ObjectStore>,
}

impl ObjectHandle {
    /// Bind a handle to an object location in `store`
    pub fn new(link: ObjLink, store: Arc<dyn ObjectStore>) -> Self {
        Self { link, store }
    }

    /// Location of the referenced object
    pub fn link(&self) -> &ObjLink {
        &self.link
    }

    /// Identity of the store this handle is bound to
    pub fn store_id(&self) -> Uuid {
        self.store.store_id()
    }

    /// Open the referenced object's dictionary
    pub fn open(&self) -> StoreResult<Arc<dyn KeyedCollection>> {
        self.store.open(&self.link)
    }
}

impl PartialEq for ObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link && self.store.store_id() == other.store.store_id()
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHandle")
            .field("link", &self.link)
            .field("store", &self.store.store_id())
            .finish()
    }
}

/// Per-call host execution context
///
/// Every accessor and bridge call receives one; it stands in for the
/// host runtime's call-scope handle and is where host-canonical values
/// come from.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostContext;

impl HostContext {
    /// Create a context
    pub fn new() -> Self {
        Self
    }

    /// The host runtime's canonical absent value
    pub fn undefined(&self) -> HostValue {
        HostValue::Undefined
    }
}
