//! Single, existence and batch lookups over a validated root.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ErrorKind, PointerError};
use crate::util::parse_json_pointer;
use crate::value::{Shape, Value};
use crate::walk::walk;

/// Resolution settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Require sequence keys to follow the RFC 6901 `array-index` grammar,
    /// rejecting forms such as `01` or `+1` that plain integer parsing allows.
    pub strict_indices: bool,
}

/// Resolves pointers against one root value.
///
/// The root's shape is checked once on construction; every lookup after that
/// only borrows it.
///
/// # Example
///
/// ```
/// use value_pointer::{Field, Resolver, Value};
///
/// let root = Value::record([
///     Field::new("Name", "Joe").with_name("name"),
///     Field::new("Tags", Value::sequence(["a", "b"])).with_name("tags"),
/// ]);
/// let resolver = Resolver::new(&root).unwrap();
///
/// assert_eq!(resolver.get("/tags/1").unwrap(), &Value::from("b"));
/// assert!(!resolver.check("/tags/2"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    root: &'a Value,
    options: ResolverOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Value) -> Result<Self, PointerError> {
        Self::with_options(root, ResolverOptions::default())
    }

    /// # Errors
    ///
    /// [`ErrorKind::UnsupportedRootType`] unless the root is an indirection,
    /// sequence, mapping or record.
    pub fn with_options(root: &'a Value, options: ResolverOptions) -> Result<Self, PointerError> {
        match root.shape() {
            Shape::Indirection | Shape::Sequence | Shape::Mapping | Shape::Record => {
                Ok(Self { root, options })
            }
            shape => {
                debug!(?shape, "unsupported root type");
                Err(PointerError::new(ErrorKind::UnsupportedRootType))
            }
        }
    }

    pub fn root(&self) -> &'a Value {
        self.root
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve one pointer. A failure carries `pointer` as its path.
    pub fn get(&self, pointer: &str) -> Result<&'a Value, PointerError> {
        let keys = parse_json_pointer(pointer);
        walk(self.root, &keys, self.options.strict_indices).map_err(|err| {
            debug!(pointer, kind = ?err.kind(), "pointer did not resolve");
            err.with_path(pointer)
        })
    }

    /// Whether `pointer` resolves.
    pub fn check(&self, pointer: &str) -> bool {
        self.get(pointer).is_ok()
    }

    /// Resolve every pointer, stopping at the first failure.
    ///
    /// On success the map holds one entry per distinct pointer, in request
    /// order. On failure only that pointer's error is returned.
    pub fn batch<I, S>(&self, pointers: I) -> Result<IndexMap<String, &'a Value>, PointerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = IndexMap::new();
        for pointer in pointers {
            let pointer = pointer.as_ref();
            let value = self.get(pointer)?;
            result.insert(pointer.to_string(), value);
        }
        debug!(resolved = result.len(), "batch resolved");
        Ok(result)
    }

    /// Like [`get`](Self::get), but a missing mapping key yields the mapping's
    /// zero value instead of an error.
    pub fn get_or_fallback(&self, pointer: &str) -> Result<Cow<'a, Value>, PointerError> {
        match self.get(pointer) {
            Ok(value) => Ok(Cow::Borrowed(value)),
            Err(err) if err.kind() == ErrorKind::MissingKey => match err.into_fallback() {
                Some(fallback) => Ok(Cow::Owned(fallback)),
                None => Err(PointerError::new(ErrorKind::MissingKey).with_path(pointer)),
            },
            Err(err) => Err(err),
        }
    }
}

/// Resolve `pointer` against `root`.
///
/// # Example
///
/// ```
/// use value_pointer::{resolve, ErrorKind, Value, ValueType};
///
/// let root = Value::mapping(ValueType::String, [("a/b", Value::from("x"))]);
/// assert_eq!(resolve(&root, "/a~1b").unwrap(), &Value::from("x"));
///
/// let err = resolve(&root, "/c").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissingKey);
/// assert_eq!(err.path(), "/c");
/// assert_eq!(err.fallback(), Some(&Value::from("")));
/// ```
pub fn resolve<'a>(root: &'a Value, pointer: &str) -> Result<&'a Value, PointerError> {
    Resolver::new(root)?.get(pointer)
}

/// Whether [`resolve`] would succeed.
pub fn check(root: &Value, pointer: &str) -> bool {
    Resolver::new(root).is_ok_and(|r| r.check(pointer))
}

/// Resolve several pointers; fails fast on the first error.
pub fn resolve_batch<'a, I, S>(
    root: &'a Value,
    pointers: I,
) -> Result<IndexMap<String, &'a Value>, PointerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Resolver::new(root)?.batch(pointers)
}

/// Resolve `pointer`, substituting the zero value for a missing mapping key.
pub fn resolve_or_fallback<'a>(root: &'a Value, pointer: &str) -> Result<Cow<'a, Value>, PointerError> {
    Resolver::new(root)?.get_or_fallback(pointer)
}
