//! The value graph a pointer is resolved against.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::ValueType;

/// A node in the value graph.
///
/// Nullable shapes model "absent" with `None` rather than a separate variant,
/// so a nil sequence is still recognisably a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An optional reference to another value. `None` is a nil reference.
    Indirection(Option<Box<Value>>),
    /// Index-addressed elements. `None` is a nil sequence.
    Sequence(Option<Vec<Value>>),
    /// String-keyed entries.
    Mapping(Mapping),
    /// Named fields in declaration order.
    Record(Record),
    /// A terminal leaf.
    Scalar(Scalar),
}

/// Runtime shape of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Indirection,
    Sequence,
    Mapping,
    Record,
    Scalar,
}

/// Leaf values.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
}

/// A string-keyed map together with the declared type of its values.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    /// Declared type of the values; determines the zero value for missing keys.
    pub value_type: ValueType,
    /// `None` for a nil mapping.
    pub entries: Option<IndexMap<String, Value>>,
}

/// A struct-like aggregate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub fields: Vec<Field>,
}

/// One field of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field's own identifier.
    pub ident: String,
    /// Explicit external name. Takes precedence over `ident` for lookups.
    pub rename: Option<String>,
    pub value: Value,
}

impl Field {
    pub fn new(ident: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            ident: ident.into(),
            rename: None,
            value: value.into(),
        }
    }

    /// Declares the external name used for pointer lookups.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// The name a pointer segment must match to select this field.
    pub fn external_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.ident)
    }
}

impl Record {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// First field, in declaration order, whose external name is `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.external_name() == name)
    }
}

impl Mapping {
    pub fn new<K, I>(value_type: ValueType, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            value_type,
            entries: Some(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn nil(value_type: ValueType) -> Self {
        Self {
            value_type,
            entries: None,
        }
    }

    pub fn is_nil(&self) -> bool {
        self.entries.is_none()
    }
}

impl Value {
    /// A nil indirection.
    pub fn nil() -> Self {
        Value::Indirection(None)
    }

    pub fn indirect(target: impl Into<Value>) -> Self {
        Value::Indirection(Some(Box::new(target.into())))
    }

    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Sequence(Some(items.into_iter().map(Into::into).collect()))
    }

    pub fn nil_sequence() -> Self {
        Value::Sequence(None)
    }

    pub fn mapping<K, I>(value_type: ValueType, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Mapping(Mapping::new(value_type, entries))
    }

    pub fn nil_mapping(value_type: ValueType) -> Self {
        Value::Mapping(Mapping::nil(value_type))
    }

    pub fn record(fields: impl IntoIterator<Item = Field>) -> Self {
        Value::Record(Record::new(fields))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Value::Indirection(_) => Shape::Indirection,
            Value::Sequence(_) => Shape::Sequence,
            Value::Mapping(_) => Shape::Mapping,
            Value::Record(_) => Shape::Record,
            Value::Scalar(_) => Shape::Scalar,
        }
    }

    /// True for nil indirections, sequences and mappings, and for `Scalar::Null`.
    pub fn is_nil(&self) -> bool {
        match self {
            Value::Indirection(target) => target.is_none(),
            Value::Sequence(items) => items.is_none(),
            Value::Mapping(map) => map.is_nil(),
            Value::Record(_) => false,
            Value::Scalar(s) => matches!(s, Scalar::Null),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Int(n)) => Some(*n),
            Value::Scalar(Scalar::UInt(n)) => i64::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Int(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(Scalar::Int(n.into()))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Scalar(Scalar::UInt(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Float(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Scalar(Scalar::Bytes(b))
    }
}

/// Decoded JSON maps onto the generic shapes: objects become mappings of
/// [`ValueType::Any`], arrays become sequences.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.into()
                } else if let Some(u) = n.as_u64() {
                    u.into()
                } else {
                    n.as_f64().unwrap_or_default().into()
                }
            }
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => Value::sequence(items),
            serde_json::Value::Object(map) => Value::mapping(
                ValueType::Any,
                map.into_iter().map(|(k, v)| (k, Value::from(v))),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Indirection(None) | Value::Sequence(None) => serializer.serialize_none(),
            Value::Indirection(Some(target)) => target.serialize(serializer),
            Value::Sequence(Some(items)) => serializer.collect_seq(items),
            Value::Mapping(map) => match &map.entries {
                None => serializer.serialize_none(),
                Some(entries) => serializer.collect_map(entries),
            },
            Value::Record(record) => {
                let mut state = serializer.serialize_map(Some(record.fields.len()))?;
                for field in &record.fields {
                    state.serialize_entry(field.external_name(), &field.value)?;
                }
                state.end()
            }
            Value::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_none(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(n) => serializer.serialize_i64(*n),
            Scalar::UInt(n) => serializer.serialize_u64(*n),
            Scalar::Float(n) => serializer.serialize_f64(*n),
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Bytes(b) => serializer.serialize_bytes(b),
        }
    }
}
