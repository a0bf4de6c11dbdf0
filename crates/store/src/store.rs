//! MemoryStore: in-memory transactional dictionary store
//!
//! ## Design
//!
//! `MemoryStore` is the minimal storage engine the bridge contract
//! needs: a map of objects, each holding one string-keyed dictionary of
//! [`Value`]s. It exists so the accessor and the object-link strategy
//! have something real to run against; durability, iteration, and
//! indexing are deliberately absent.
//!
//! ## Write transactions
//!
//! All mutation happens inside a closure passed to [`MemoryStore::write`].
//! The closure delimits the write transaction: while it runs, `set` and
//! `create_object` succeed; outside it they fail with
//! `StoreError::TransactionNotActive` and change nothing. There is no
//! rollback machinery - the transaction boundary here only models
//! *permission to write*, which is all the accessor contract observes.
//!
//! ## Thread Safety
//!
//! `MemoryStore` is `Send + Sync`. Handles are cheap clones sharing one
//! inner state behind `parking_lot` locks.

use loam_core::{KeyedCollection, ObjLink, ObjectStore, StoreError, StoreResult, Value};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

struct StoreInner {
    /// Store identity, used by the bridge to reject foreign handles
    id: Uuid,
    /// All objects, keyed by their location
    objects: RwLock<HashMap<ObjLink, HashMap<String, Value>>>,
    /// Whether a write transaction is currently open
    write_active: AtomicBool,
}

/// Clears the write flag when the transaction closure unwinds or returns.
struct WriteWindow<'a>(&'a AtomicBool);

impl Drop for WriteWindow<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// In-memory transactional dictionary store
///
/// Cheaply cloneable handle; all clones share the same state.
///
/// # Example
///
/// ```
/// use loam_store::MemoryStore;
/// use loam_core::{KeyedCollection, Value};
///
/// let store = MemoryStore::new();
/// let link = store.write(|| store.create_object("people")).unwrap().unwrap();
/// let person = store.dictionary(&link).unwrap();
///
/// store.write(|| person.set("name", Value::String("Ada".into()))).unwrap().unwrap();
/// assert_eq!(person.get("name").unwrap(), Value::String("Ada".into()));
/// ```
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                id: Uuid::new_v4(),
                objects: RwLock::new(HashMap::new()),
                write_active: AtomicBool::new(false),
            }),
        }
    }

    /// Run `f` inside a write transaction
    ///
    /// Fails with `InvalidOperation` if a write transaction is already
    /// open. The write window closes when `f` returns, even if it
    /// panics.
    pub fn write<T>(&self, f: impl FnOnce() -> T) -> StoreResult<T> {
        if self.inner.write_active.swap(true, Ordering::SeqCst) {
            return Err(StoreError::invalid_operation(
                "write transaction already active",
            ));
        }
        let window = WriteWindow(&self.inner.write_active);
        let out = f();
        drop(window);
        Ok(out)
    }

    /// Whether a write transaction is currently open
    pub fn in_write_transaction(&self) -> bool {
        self.inner.write_active.load(Ordering::SeqCst)
    }

    /// Create a fresh, empty object in `collection`
    ///
    /// Requires an open write transaction.
    pub fn create_object(&self, collection: &str) -> StoreResult<ObjLink> {
        if !self.in_write_transaction() {
            return Err(StoreError::TransactionNotActive);
        }
        let link = ObjLink::fresh(collection);
        self.inner
            .objects
            .write()
            .insert(link.clone(), HashMap::new());
        Ok(link)
    }

    /// Open the dictionary of the object at `link`
    pub fn dictionary(&self, link: &ObjLink) -> StoreResult<DictionaryHandle> {
        if !self.inner.objects.read().contains_key(link) {
            return Err(StoreError::key_not_found(link.to_string()));
        }
        Ok(DictionaryHandle {
            inner: self.inner.clone(),
            link: link.clone(),
        })
    }

    /// Store identity
    pub fn id(&self) -> Uuid {
        self.inner.id
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for MemoryStore {
    fn contains(&self, link: &ObjLink) -> bool {
        self.inner.objects.read().contains_key(link)
    }

    fn open(&self, link: &ObjLink) -> StoreResult<Arc<dyn KeyedCollection>> {
        Ok(Arc::new(self.dictionary(link)?))
    }

    fn store_id(&self) -> Uuid {
        self.inner.id
    }
}

/// Handle to one object's dictionary
///
/// Implements [`KeyedCollection`]: reads succeed any time, writes only
/// inside the owning store's write transaction. The handle shares the
/// store's state; it does not pin the object (a later store-level
/// delete would surface as `KeyNotFound` on access).
#[derive(Clone)]
pub struct DictionaryHandle {
    inner: Arc<StoreInner>,
    link: ObjLink,
}

impl DictionaryHandle {
    /// Location of the object this handle reads and writes
    pub fn link(&self) -> &ObjLink {
        &self.link
    }
}

impl KeyedCollection for DictionaryHandle {
    fn get(&self, key: &str) -> StoreResult<Value> {
        let objects = self.inner.objects.read();
        let dict = objects
            .get(&self.link)
            .ok_or_else(|| StoreError::key_not_found(self.link.to_string()))?;
        dict.get(key)
            .cloned()
            .ok_or_else(|| StoreError::key_not_found(key))
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        if !self.inner.write_active.load(Ordering::SeqCst) {
            return Err(StoreError::TransactionNotActive);
        }
        let mut objects = self.inner.objects.write();
        let dict = objects
            .get_mut(&self.link)
            .ok_or_else(|| StoreError::key_not_found(self.link.to_string()))?;
        dict.insert(key.to_string(), value);
        Ok(())
    }
}
