use tracing::trace;

use crate::error::{ErrorKind, PointerError};
use crate::util::parse_index;
use crate::value::Value;

/// Descend from `value` one key at a time.
///
/// Indirections are followed without consuming a key, so a container reached
/// through one behaves exactly like a direct one. Errors carry no path; the
/// caller attaches it.
pub fn walk<'a>(
    value: &'a Value,
    keys: &[String],
    strict_indices: bool,
) -> Result<&'a Value, PointerError> {
    let Some((key, rest)) = keys.split_first() else {
        return Ok(value);
    };

    match value {
        Value::Indirection(target) => {
            let target = target.as_deref().ok_or(ErrorKind::NilIndirection)?;
            walk(target, keys, strict_indices)
        }
        Value::Sequence(items) => {
            let items = items.as_ref().ok_or(ErrorKind::NilSequence)?;
            let idx = parse_index(key, strict_indices).ok_or(ErrorKind::InvalidIndex)?;
            let item = items.get(idx).ok_or(ErrorKind::IndexOutOfRange)?;
            trace!(key = %key, len = items.len(), "sequence step");
            walk(item, rest, strict_indices)
        }
        Value::Mapping(map) => {
            let entries = map.entries.as_ref().ok_or(ErrorKind::NilMapping)?;
            match entries.get(key.as_str()) {
                Some(entry) => {
                    trace!(key = %key, "mapping step");
                    walk(entry, rest, strict_indices)
                }
                None => Err(PointerError::new(ErrorKind::MissingKey)
                    .with_fallback(map.value_type.zero_value())),
            }
        }
        Value::Record(record) => {
            let field = record.field(key).ok_or(ErrorKind::FieldMismatch)?;
            trace!(key = %key, field = %field.ident, "record step");
            walk(&field.value, rest, strict_indices)
        }
        Value::Scalar(_) => Err(ErrorKind::TypeMismatch.into()),
    }
}
