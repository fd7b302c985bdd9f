//! Resolution errors.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::value::Value;

/// Why a pointer failed to resolve.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("data type not support")]
    UnsupportedRootType,
    #[error("ptr value is nil")]
    NilIndirection,
    #[error("array/slice value is nil")]
    NilSequence,
    #[error("map value is nil")]
    NilMapping,
    #[error("not a valid array index")]
    InvalidIndex,
    #[error("index out of range")]
    IndexOutOfRange,
    #[error("map key not found")]
    MissingKey,
    #[error("field mismatch")]
    FieldMismatch,
    #[error("type mismatch")]
    TypeMismatch,
}

/// A failed lookup.
///
/// Created without a path at the point of failure; the resolver attaches the
/// full pointer string before handing it to the caller. For
/// [`ErrorKind::MissingKey`] the error also carries the zero value of the
/// mapping's value type as a fallback.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{}error: {kind}", path_prefix(.path))]
pub struct PointerError {
    kind: ErrorKind,
    path: String,
    fallback: Option<Value>,
}

fn path_prefix(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("path: {path}, ")
    }
}

impl PointerError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: String::new(),
            fallback: None,
        }
    }

    /// Attach the originating pointer.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Attach a substitute value the caller may use instead of failing.
    pub fn with_fallback(mut self, value: Value) -> Self {
        self.fallback = Some(value);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The full pointer that failed, or `""` if the error is not tied to one.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn fallback(&self) -> Option<&Value> {
        self.fallback.as_ref()
    }

    pub fn into_fallback(self) -> Option<Value> {
        self.fallback
    }
}

impl From<ErrorKind> for PointerError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl Serialize for PointerError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PointerError", 3)?;
        state.serialize_field("ref", &self.path)?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("default", &self.fallback)?;
        state.end()
    }
}
