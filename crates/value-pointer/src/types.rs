//! Declared value types.
//!
//! A mapping remembers the type of its values so a lookup of an absent key
//! can still hand back a typed placeholder: the type's zero value.

use std::fmt;

use crate::value::{Field, Record, Scalar, Value};

/// The declared type of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueType {
    /// Untyped; zero value is `Scalar::Null`.
    Any,
    Bool,
    Int,
    UInt,
    Float,
    String,
    Bytes,
    Indirection(Box<ValueType>),
    Sequence(Box<ValueType>),
    Mapping(Box<ValueType>),
    Record(Vec<FieldType>),
}

/// Declared type of one record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldType {
    pub ident: String,
    pub rename: Option<String>,
    pub value_type: ValueType,
}

impl FieldType {
    pub fn new(ident: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            ident: ident.into(),
            rename: None,
            value_type,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }
}

impl ValueType {
    /// The value an uninitialised slot of this type holds.
    ///
    /// Reference-like types (indirections, sequences, mappings) are nil;
    /// records are built field by field.
    pub fn zero_value(&self) -> Value {
        match self {
            ValueType::Any => Value::Scalar(Scalar::Null),
            ValueType::Bool => Value::Scalar(Scalar::Bool(false)),
            ValueType::Int => Value::Scalar(Scalar::Int(0)),
            ValueType::UInt => Value::Scalar(Scalar::UInt(0)),
            ValueType::Float => Value::Scalar(Scalar::Float(0.0)),
            ValueType::String => Value::Scalar(Scalar::String(String::new())),
            ValueType::Bytes => Value::Scalar(Scalar::Bytes(Vec::new())),
            ValueType::Indirection(_) => Value::nil(),
            ValueType::Sequence(_) => Value::nil_sequence(),
            ValueType::Mapping(value_type) => Value::nil_mapping((**value_type).clone()),
            ValueType::Record(fields) => Value::Record(Record::new(fields.iter().map(|f| Field {
                ident: f.ident.clone(),
                rename: f.rename.clone(),
                value: f.value_type.zero_value(),
            }))),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Any => write!(f, "any"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Int => write!(f, "int"),
            ValueType::UInt => write!(f, "uint"),
            ValueType::Float => write!(f, "float"),
            ValueType::String => write!(f, "string"),
            ValueType::Bytes => write!(f, "bytes"),
            ValueType::Indirection(t) => write!(f, "*{t}"),
            ValueType::Sequence(t) => write!(f, "[]{t}"),
            ValueType::Mapping(t) => write!(f, "map[string]{t}"),
            ValueType::Record(fields) => {
                write!(f, "record{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    let name = field.rename.as_deref().unwrap_or(&field.ident);
                    write!(f, "{name}: {}", field.value_type)?;
                }
                write!(f, "}}")
            }
        }
    }
}
