//! JSON Pointer (RFC 6901) resolution over in-memory value trees.
//!
//! The tree is a [`Value`]: indirections, sequences, string-keyed mappings,
//! records with named fields, and scalar leaves. A pointer is split into
//! unescaped keys and the tree is walked one key at a time. Failures come
//! back as a [`PointerError`] naming the pointer and what went wrong.
//!
//! # Example
//!
//! ```
//! use value_pointer::{resolve, resolve_batch, ErrorKind, Field, Value, ValueType};
//!
//! let root = Value::record([
//!     Field::new("Name", "Joe").with_name("name"),
//!     Field::new(
//!         "Children",
//!         Value::sequence([Value::record([Field::new("Age", 20).with_name("age")])]),
//!     )
//!     .with_name("children"),
//! ]);
//!
//! assert_eq!(resolve(&root, "/children/0/age").unwrap(), &Value::from(20));
//!
//! let err = resolve(&root, "/children/9").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
//! assert_eq!(err.to_string(), "path: /children/9, error: index out of range");
//!
//! let found = resolve_batch(&root, ["/name", "/children/0/age"]).unwrap();
//! assert_eq!(found["/name"], &Value::from("Joe"));
//! ```

mod error;
pub use error::{ErrorKind, PointerError};

pub mod types;
pub use types::{FieldType, ValueType};

pub mod value;
pub use value::{Field, Mapping, Record, Scalar, Shape, Value};

mod util;
pub use util::{
    escape_component, format_json_pointer, is_valid_index, parse_index, parse_json_pointer,
    unescape_component,
};

mod walk;
pub use walk::walk;

mod resolver;
pub use resolver::{check, resolve, resolve_batch, resolve_or_fallback, Resolver, ResolverOptions};
