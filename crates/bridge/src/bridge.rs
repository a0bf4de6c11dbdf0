//! Value bridge: kind-dispatched conversion between storage and host values
//!
//! ## Design
//!
//! [`ValueBridge`] owns a registry mapping [`ValueKind`] to a
//! [`ConversionStrategy`]. `wrap` dispatches on the storage value's kind
//! tag; `unwrap` classifies the host value's shape to a target kind and
//! dispatches the same way. Kinds with no registered strategy convert
//! structurally - field for field, recursing through the bridge for
//! nested containers so nested links still reach the registry.
//!
//! Strategies cover the kinds structural conversion cannot express. The
//! one shipped here is [`LinkStrategy`]: link values need a live
//! store-bound object handle on the host side, so the strategy closes
//! over the store it resolves against. Registering a strategy for a
//! kind replaces any previous one; the registry exclusively owns its
//! strategies.
//!
//! The bridge is pure translation: it never reads or writes the
//! collection being accessed.

use crate::error::BridgeError;
use crate::host::{HostContext, HostValue, ObjectHandle};
use loam_core::{ObjectStore, Value, ValueKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Pluggable converter for one storage kind
///
/// One implementation per kind that needs more than structural
/// conversion. A registered strategy sees every value of its kind in
/// both directions.
pub trait ConversionStrategy: Send + Sync {
    /// Convert a storage value of this strategy's kind to a host value
    fn to_host(&self, cx: &HostContext, value: Value) -> Result<HostValue, BridgeError>;

    /// Convert a host value classified to this strategy's kind to a
    /// storage value
    fn to_storage(&self, cx: &HostContext, value: HostValue) -> Result<Value, BridgeError>;
}

/// Kind-dispatched translation between [`Value`] and [`HostValue`]
///
/// # Example
///
/// ```
/// use loam_bridge::{HostContext, HostValue, ValueBridge};
/// use loam_core::Value;
///
/// let bridge = ValueBridge::new();
/// let cx = HostContext::new();
///
/// let host = bridge.wrap(&cx, Value::Int(42)).unwrap();
/// assert_eq!(host, HostValue::Int(42));
/// assert_eq!(bridge.unwrap(&cx, host).unwrap(), Value::Int(42));
/// ```
#[derive(Default)]
pub struct ValueBridge {
    strategies: HashMap<ValueKind, Box<dyn ConversionStrategy>>,
}

impl ValueBridge {
    /// Create a bridge with no registered strategies
    ///
    /// Primitive and container kinds convert structurally; `Link`
    /// values are unconvertible until a strategy is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bridge wired to `store`, with the link strategy
    /// registered
    pub fn for_store(store: Arc<dyn ObjectStore>) -> Self {
        let mut bridge = Self::new();
        bridge.register_strategy(ValueKind::Link, Box::new(LinkStrategy::new(store)));
        bridge
    }

    /// Install or replace the strategy for `kind`
    ///
    /// The prior strategy for that kind, if any, is discarded; the
    /// registry exclusively owns registered strategies.
    pub fn register_strategy(&mut self, kind: ValueKind, strategy: Box<dyn ConversionStrategy>) {
        self.strategies.insert(kind, strategy);
    }

    /// Storage value to host value
    ///
    /// Dispatches on the runtime kind tag. Pure translation; never
    /// consults the collection being accessed.
    pub fn wrap(&self, cx: &HostContext, value: Value) -> Result<HostValue, BridgeError> {
        if let Some(strategy) = self.strategies.get(&value.kind()) {
            return strategy.to_host(cx, value);
        }
        self.structural_to_host(cx, value)
    }

    /// Host value to storage value
    ///
    /// Classifies the host shape to a target kind, then dispatches.
    /// Shapes with no storage kind fail with `UnsupportedValueType`.
    pub fn unwrap(&self, cx: &HostContext, value: HostValue) -> Result<Value, BridgeError> {
        let kind = value
            .storage_kind()
            .ok_or_else(|| BridgeError::unsupported(value.type_name()))?;
        if let Some(strategy) = self.strategies.get(&kind) {
            return strategy.to_storage(cx, value);
        }
        self.structural_to_storage(cx, value)
    }

    fn structural_to_host(&self, cx: &HostContext, value: Value) -> Result<HostValue, BridgeError> {
        match value {
            Value::Null => Ok(HostValue::Null),
            Value::Bool(b) => Ok(HostValue::Bool(b)),
            Value::Int(i) => Ok(HostValue::Int(i)),
            Value::Float(f) => Ok(HostValue::Float(f)),
            Value::String(s) => Ok(HostValue::String(s)),
            Value::Bytes(b) => Ok(HostValue::Bytes(b)),
            Value::Timestamp(t) => Ok(HostValue::Timestamp(t)),
            Value::Uuid(u) => Ok(HostValue::Uuid(u)),
            Value::List(items) => {
                let converted: Result<Vec<_>, _> =
                    items.into_iter().map(|v| self.wrap(cx, v)).collect();
                Ok(HostValue::List(converted?))
            }
            Value::Dictionary(entries) => {
                let mut dict = HashMap::with_capacity(entries.len());
                for (k, v) in entries {
                    dict.insert(k, self.wrap(cx, v)?);
                }
                Ok(HostValue::Dictionary(dict))
            }
            // A live object handle cannot be built structurally
            Value::Link(_) => Err(BridgeError::NoStrategy {
                kind: ValueKind::Link,
            }),
        }
    }

    fn structural_to_storage(
        &self,
        cx: &HostContext,
        value: HostValue,
    ) -> Result<Value, BridgeError> {
        match value {
            // Assigned undefined persists as null
            HostValue::Undefined | HostValue::Null => Ok(Value::Null),
            HostValue::Bool(b) => Ok(Value::Bool(b)),
            HostValue::Int(i) => Ok(Value::Int(i)),
            HostValue::Float(f) => Ok(Value::Float(f)),
            HostValue::String(s) => Ok(Value::String(s)),
            HostValue::Bytes(b) => Ok(Value::Bytes(b)),
            HostValue::Timestamp(t) => Ok(Value::Timestamp(t)),
            HostValue::Uuid(u) => Ok(Value::Uuid(u)),
            HostValue::List(items) => {
                let converted: Result<Vec<_>, _> =
                    items.into_iter().map(|v| self.unwrap(cx, v)).collect();
                Ok(Value::List(converted?))
            }
            HostValue::Dictionary(entries) => {
                let mut dict = HashMap::with_capacity(entries.len());
                for (k, v) in entries {
                    dict.insert(k, self.unwrap(cx, v)?);
                }
                Ok(Value::Dictionary(dict))
            }
            // Only a registered link strategy can persist handles
            other @ (HostValue::Object(_) | HostValue::Callable(_)) => {
                Err(BridgeError::unsupported(other.type_name()))
            }
        }
    }
}

/// Strategy for the link kind
///
/// Closes over the store its links resolve against; the `Arc` keeps the
/// store alive for as long as the strategy (and therefore the bridge)
/// exists. A strategy instance is never shared across stores.
pub struct LinkStrategy {
    store: Arc<dyn ObjectStore>,
}

impl LinkStrategy {
    /// Create a link strategy resolving against `store`
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

impl ConversionStrategy for LinkStrategy {
    fn to_host(&self, _cx: &HostContext, value: Value) -> Result<HostValue, BridgeError> {
        match value {
            Value::Link(link) => {
                if !self.store.contains(&link) {
                    return Err(BridgeError::DanglingLink { link });
                }
                Ok(HostValue::Object(ObjectHandle::new(
                    link,
                    self.store.clone(),
                )))
            }
            other => Err(BridgeError::NoStrategy { kind: other.kind() }),
        }
    }

    fn to_storage(&self, _cx: &HostContext, value: HostValue) -> Result<Value, BridgeError> {
        match value {
            HostValue::Object(handle) => {
                if handle.store_id() != self.store.store_id() {
                    return Err(BridgeError::ForeignObject);
                }
                Ok(Value::Link(handle.link().clone()))
            }
            other => Err(BridgeError::unsupported(other.type_name())),
        }
    }
}
