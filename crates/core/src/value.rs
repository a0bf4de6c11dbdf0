//! Value types for Loam
//!
//! This module defines the canonical storage [`Value`] type: the closed
//! tagged union of every kind the dictionary engine can persist.
//!
//! ## Contract
//!
//! - Exactly one kind tag is active at a time
//! - No implicit type coercions (`Int(1) != Float(1.0)`)
//! - IEEE-754 float equality semantics (`NaN != NaN`, `-0.0 == 0.0`)
//! - `Bytes` and `String` are distinct types
//! - `Link` carries an [`ObjLink`] resolvable within the same store

use crate::link::ObjLink;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Canonical storage value type
///
/// This is the only value model the storage side exposes. Conversion to
/// and from host-runtime values happens in the bridge layer; nothing in
/// this crate depends on any host representation.
///
/// ## The Eleven Kinds
///
/// 1. `Null` - absence of value (a *present* entry holding nothing)
/// 2. `Bool` - boolean true or false
/// 3. `Int` - 64-bit signed integer
/// 4. `Float` - 64-bit IEEE-754 floating point
/// 5. `String` - UTF-8 encoded string
/// 6. `Bytes` - arbitrary binary data (distinct from String)
/// 7. `Timestamp` - UTC point in time
/// 8. `Uuid` - 128-bit identifier
/// 9. `List` - ordered sequence of values
/// 10. `Dictionary` - string-keyed map of values
/// 11. `Link` - reference to another persisted object
///
/// ## Equality Rules
///
/// - Different kinds are NEVER equal (no type coercion)
/// - `Int(1)` != `Float(1.0)`
/// - `String("abc")` != `Bytes([97, 98, 99])`
/// - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Absence of value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    /// Supports: NaN, +Inf, -Inf, -0.0, subnormals
    Float(f64),

    /// UTF-8 encoded string
    String(String),

    /// Arbitrary binary data
    /// NOT equivalent to String - distinct kind
    Bytes(Vec<u8>),

    /// UTC point in time
    Timestamp(DateTime<Utc>),

    /// 128-bit identifier
    Uuid(Uuid),

    /// Ordered sequence of values
    List(Vec<Value>),

    /// String-keyed map of values
    Dictionary(HashMap<String, Value>),

    /// Reference to another persisted object in the same store
    Link(ObjLink),
}

/// Kind tag of a [`Value`], used as the strategy-registry key
///
/// One fieldless discriminant per `Value` variant. The set is closed:
/// supporting a new kind means extending both enums together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// `Value::Null`
    Null,
    /// `Value::Bool`
    Bool,
    /// `Value::Int`
    Int,
    /// `Value::Float`
    Float,
    /// `Value::String`
    String,
    /// `Value::Bytes`
    Bytes,
    /// `Value::Timestamp`
    Timestamp,
    /// `Value::Uuid`
    Uuid,
    /// `Value::List`
    List,
    /// `Value::Dictionary`
    Dictionary,
    /// `Value::Link`
    Link,
}

impl ValueKind {
    /// Kind name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::Bytes => "Bytes",
            ValueKind::Timestamp => "Timestamp",
            ValueKind::Uuid => "Uuid",
            ValueKind::List => "List",
            ValueKind::Dictionary => "Dictionary",
            ValueKind::Link => "Link",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the active kind tag
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Uuid(_) => ValueKind::Uuid,
            Value::List(_) => ValueKind::List,
            Value::Dictionary(_) => ValueKind::Dictionary,
            Value::Link(_) => ValueKind::Link,
        }
    }

    /// Returns the kind name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as timestamp
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get as uuid
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Value::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// Try to get as list slice
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get as dictionary reference
    pub fn as_dictionary(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get as object link
    pub fn as_link(&self) -> Option<&ObjLink> {
        match self {
            Value::Link(l) => Some(l),
            _ => None,
        }
    }
}

// ============================================================================
// Custom PartialEq Implementation (IEEE-754 semantics, no type coercion)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // Same kinds
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => {
                // IEEE-754 equality: NaN != NaN, but -0.0 == 0.0
                a == b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Uuid(a), Value::Uuid(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Dictionary(a), Value::Dictionary(b)) => a == b,
            (Value::Link(a), Value::Link(b)) => a == b,

            // Different kinds: NEVER equal (NO TYPE COERCION)
            _ => false,
        }
    }
}

// Note: We intentionally implement Eq even though Float doesn't satisfy
// reflexivity. Value follows IEEE-754 semantics where NaN != NaN; callers
// comparing values that may hold NaN should be aware of this.
impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Discriminant first for kind distinction
        std::mem::discriminant(self).hash(state);

        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => {
                // -0.0 and 0.0 compare equal but have different bits; hash
                // the normalized bits so hashing stays consistent with Eq
                if *f == 0.0 {
                    0u64.hash(state);
                } else {
                    f.to_bits().hash(state);
                }
            }
            Value::String(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::Timestamp(t) => t.hash(state),
            Value::Uuid(u) => u.hash(state),
            Value::List(l) => {
                l.len().hash(state);
                for v in l {
                    v.hash(state);
                }
            }
            Value::Dictionary(d) => {
                // Hash entries in sorted order for determinism
                let mut entries: Vec<_> = d.iter().collect();
                entries.sort_by_key(|(k, _)| *k);
                entries.len().hash(state);
                for (k, v) in entries {
                    k.hash(state);
                    v.hash(state);
                }
            }
            Value::Link(l) => l.hash(state),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod kind_tests {
        use super::*;

        fn one_of_each() -> Vec<Value> {
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Int(0),
                Value::Float(0.0),
                Value::String(String::new()),
                Value::Bytes(vec![]),
                Value::Timestamp(Utc::now()),
                Value::Uuid(Uuid::new_v4()),
                Value::List(vec![]),
                Value::Dictionary(HashMap::new()),
                Value::Link(ObjLink::new("people", Uuid::new_v4())),
            ]
        }

        #[test]
        fn test_kind_matches_variant() {
            assert_eq!(Value::Null.kind(), ValueKind::Null);
            assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
            assert_eq!(Value::Int(42).kind(), ValueKind::Int);
            assert_eq!(Value::Float(3.14).kind(), ValueKind::Float);
            assert_eq!(Value::String("x".into()).kind(), ValueKind::String);
            assert_eq!(Value::Bytes(vec![1]).kind(), ValueKind::Bytes);
            assert_eq!(Value::Timestamp(Utc::now()).kind(), ValueKind::Timestamp);
            assert_eq!(Value::Uuid(Uuid::nil()).kind(), ValueKind::Uuid);
            assert_eq!(Value::List(vec![]).kind(), ValueKind::List);
            assert_eq!(
                Value::Dictionary(HashMap::new()).kind(),
                ValueKind::Dictionary
            );
        }

        #[test]
        fn test_all_type_names_unique() {
            let names: std::collections::HashSet<_> =
                one_of_each().iter().map(|v| v.type_name()).collect();
            assert_eq!(names.len(), 11, "All 11 kind names must be unique");
        }

        #[test]
        fn test_kind_display_matches_name() {
            assert_eq!(ValueKind::Link.to_string(), "Link");
            assert_eq!(ValueKind::Timestamp.to_string(), "Timestamp");
        }
    }

    mod accessor_tests {
        use super::*;

        #[test]
        fn test_is_null() {
            assert!(Value::Null.is_null());
            assert!(!Value::Bool(false).is_null());
            assert!(!Value::Int(0).is_null());
        }

        #[test]
        fn test_as_bool() {
            assert_eq!(Value::Bool(true).as_bool(), Some(true));
            assert_eq!(Value::Int(1).as_bool(), None);
        }

        #[test]
        fn test_as_int() {
            assert_eq!(Value::Int(42).as_int(), Some(42));
            assert_eq!(Value::Float(42.0).as_int(), None);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(Value::String("hello".to_string()).as_str(), Some("hello"));
            assert_eq!(Value::Bytes(b"hello".to_vec()).as_str(), None);
        }

        #[test]
        fn test_as_uuid() {
            let u = Uuid::new_v4();
            assert_eq!(Value::Uuid(u).as_uuid(), Some(u));
            assert_eq!(Value::Null.as_uuid(), None);
        }

        #[test]
        fn test_as_link() {
            let link = ObjLink::new("people", Uuid::new_v4());
            assert_eq!(Value::Link(link.clone()).as_link(), Some(&link));
            assert_eq!(Value::Uuid(Uuid::nil()).as_link(), None);
        }
    }

    mod equality_tests {
        use super::*;

        #[test]
        fn test_same_kind_equality() {
            assert_eq!(Value::Null, Value::Null);
            assert_eq!(Value::Int(42), Value::Int(42));
            assert_ne!(Value::Int(42), Value::Int(43));
            assert_eq!(
                Value::String("hello".to_string()),
                Value::String("hello".to_string())
            );
            assert_eq!(Value::Bytes(vec![1, 2, 3]), Value::Bytes(vec![1, 2, 3]));
        }

        #[test]
        fn test_nan_not_equals_nan() {
            // NaN != NaN per IEEE-754
            assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        }

        #[test]
        fn test_negative_zero_equals_positive_zero() {
            // -0.0 == 0.0 per IEEE-754
            assert_eq!(Value::Float(-0.0), Value::Float(0.0));
        }

        #[test]
        fn test_no_cross_kind_coercion() {
            assert_ne!(Value::Int(1), Value::Float(1.0));
            assert_ne!(Value::Bool(true), Value::Int(1));
            assert_ne!(Value::Null, Value::Int(0));
            assert_ne!(Value::Null, Value::String(String::new()));
            assert_ne!(
                Value::String("abc".to_string()),
                Value::Bytes(b"abc".to_vec())
            );
            assert_ne!(Value::List(vec![]), Value::Null);
            assert_ne!(Value::Dictionary(HashMap::new()), Value::Null);
        }

        #[test]
        fn test_uuid_not_equals_its_link() {
            let u = Uuid::new_v4();
            assert_ne!(Value::Uuid(u), Value::Link(ObjLink::new("people", u)));
        }

        #[test]
        fn test_link_equality_is_structural() {
            let u = Uuid::new_v4();
            assert_eq!(
                Value::Link(ObjLink::new("people", u)),
                Value::Link(ObjLink::new("people", u))
            );
            assert_ne!(
                Value::Link(ObjLink::new("people", u)),
                Value::Link(ObjLink::new("pets", u))
            );
        }
    }

    mod hash_tests {
        use super::*;
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_value(v: &Value) -> u64 {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        }

        #[test]
        fn test_equal_values_have_same_hash() {
            assert_eq!(hash_value(&Value::Int(42)), hash_value(&Value::Int(42)));
        }

        #[test]
        fn test_negative_zero_positive_zero_same_hash() {
            // -0.0 == 0.0, so they must hash alike
            assert_eq!(
                hash_value(&Value::Float(-0.0)),
                hash_value(&Value::Float(0.0))
            );
        }

        #[test]
        fn test_dictionary_hash_order_independent() {
            let mut d1 = HashMap::new();
            d1.insert("a".to_string(), Value::Int(1));
            d1.insert("b".to_string(), Value::Int(2));

            let mut d2 = HashMap::new();
            d2.insert("b".to_string(), Value::Int(2));
            d2.insert("a".to_string(), Value::Int(1));

            assert_eq!(
                hash_value(&Value::Dictionary(d1)),
                hash_value(&Value::Dictionary(d2))
            );
        }
    }

    mod serialization_tests {
        use super::*;

        #[test]
        fn test_value_serialization_all_kinds() {
            let values = vec![
                Value::Null,
                Value::Bool(true),
                Value::Int(42),
                Value::Float(3.14),
                Value::String("test".to_string()),
                Value::Bytes(vec![1, 2, 3]),
                Value::Uuid(Uuid::new_v4()),
                Value::List(vec![Value::Int(1), Value::String("a".to_string())]),
                Value::Link(ObjLink::new("people", Uuid::new_v4())),
            ];

            for value in values {
                let serialized = serde_json::to_string(&value).unwrap();
                let deserialized: Value = serde_json::from_str(&serialized).unwrap();
                assert_eq!(value, deserialized);
            }
        }

        #[test]
        fn test_timestamp_serialization() {
            let value = Value::Timestamp(Utc::now());
            let serialized = serde_json::to_string(&value).unwrap();
            let deserialized: Value = serde_json::from_str(&serialized).unwrap();
            assert_eq!(value, deserialized);
        }
    }
}
