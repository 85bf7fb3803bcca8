// ABOUTME: Path resolution over serde_json value trees
// ABOUTME: Follows a segment sequence to a sub-value, read-only or mutably

use serde_json::Value;

use super::error::{ResolveError, Result};
use super::segment::{self, Segment};

/// Resolve a segment sequence against a value tree, returning the addressed
/// sub-value. The empty path resolves to `root` itself. Pure read; the first
/// segment that cannot be followed produces the error value.
pub fn resolve<'a>(root: &'a Value, path: &[Segment]) -> Result<&'a Value> {
    let mut reference = root;
    for (depth, seg) in path.iter().enumerate() {
        reference = step(reference, seg).map_err(|reason| ResolveError::ReferenceInvalid {
            path: segment::render(&path[..=depth]),
            reason,
        })?;
    }
    Ok(reference)
}

/// Mutable twin of [`resolve`], used to re-locate a container before an
/// in-place write. Same traversal semantics, same failures.
pub fn resolve_mut<'a>(root: &'a mut Value, path: &[Segment]) -> Result<&'a mut Value> {
    let mut reference = root;
    for (depth, seg) in path.iter().enumerate() {
        reference = step_mut(reference, seg).map_err(|reason| ResolveError::ReferenceInvalid {
            path: segment::render(&path[..=depth]),
            reason,
        })?;
    }
    Ok(reference)
}

fn step<'a>(reference: &'a Value, seg: &Segment) -> std::result::Result<&'a Value, String> {
    match reference {
        Value::Object(map) => {
            let key = mapping_key(seg);
            map.get(key.as_ref())
                .ok_or_else(|| format!("no such key '{}'", key))
        }
        Value::Array(items) => {
            let index = sequence_index(seg)?;
            items
                .get(index)
                .ok_or_else(|| format!("index {} out of range (length {})", index, items.len()))
        }
        Value::Null => Err("cannot index into null".to_string()),
        other => Err(format!("cannot index into {}", describe(other))),
    }
}

fn step_mut<'a>(reference: &'a mut Value, seg: &Segment) -> std::result::Result<&'a mut Value, String> {
    match reference {
        Value::Object(map) => {
            let key = mapping_key(seg);
            match map.get_mut(key.as_ref()) {
                Some(value) => Ok(value),
                None => Err(format!("no such key '{}'", key)),
            }
        }
        Value::Array(items) => {
            let length = items.len();
            let index = sequence_index(seg)?;
            items
                .get_mut(index)
                .ok_or_else(|| format!("index {} out of range (length {})", index, length))
        }
        Value::Null => Err("cannot index into null".to_string()),
        other => Err(format!("cannot index into {}", describe(other))),
    }
}

/// Mapping access: an integer segment addresses its decimal string key, so
/// `Index(7)` reads the key `"7"`.
fn mapping_key(seg: &Segment) -> std::borrow::Cow<'_, str> {
    match seg {
        Segment::Key(key) => std::borrow::Cow::Borrowed(key),
        Segment::Index(index) => std::borrow::Cow::Owned(index.to_string()),
    }
}

/// Sequence access: integer segments index directly; string segments index
/// only when the whole string parses as a non-negative base-10 integer.
fn sequence_index(seg: &Segment) -> std::result::Result<usize, String> {
    match seg {
        Segment::Index(index) => Ok(*index),
        Segment::Key(key) => key
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a valid sequence index", key)),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
