// ABOUTME: Breadth-first tree walker that substitutes every string leaf in place
// ABOUTME: Drains a FIFO path queue, re-resolving parents before each write-back

use std::collections::VecDeque;

use serde_json::Value;
use tracing::trace;

use super::error::{Result, SubstituteError};
use super::params::{self, ParamTable};
use crate::interpolate::interpolate;
use crate::path::{self, segment, Segment};

/// Walk `data` breadth-first and replace every string leaf with its
/// interpolated value, mutating the tree in place.
///
/// `overwrite` is merged over `parameters` key for key before the walk
/// starts. The first failure anywhere halts the call and is returned as a
/// value; leaves substituted before it stay substituted.
///
/// The tree must be acyclic; a cyclic value never terminates.
pub fn walk_and_substitute(
    data: &mut Value,
    parameters: &ParamTable,
    overwrite: Option<&ParamTable>,
) -> Result<()> {
    let merged = params::merge(parameters, overwrite);

    let mut queue: VecDeque<Vec<Segment>> = VecDeque::new();
    queue.push_back(Vec::new());

    while !queue.is_empty() {
        let Some(current) = queue.pop_front() else {
            return Err(SubstituteError::PathInvalid);
        };

        // Classification borrows the tree immutably; the write-back below
        // re-resolves the parent on its own mutable pass.
        let is_leaf = {
            let value = path::resolve(data, &current)?;
            match value {
                Value::Array(items) => {
                    for index in 0..items.len() {
                        queue.push_back(child_path(&current, Segment::Index(index)));
                    }
                    false
                }
                Value::Object(map) => {
                    for key in map.keys() {
                        queue.push_back(child_path(&current, Segment::Key(key.clone())));
                    }
                    false
                }
                Value::String(_) => true,
                // null, booleans and numbers are left untouched
                _ => false,
            }
        };

        if is_leaf {
            substitute_leaf(data, &current, &merged)?;
        }
    }

    Ok(())
}

/// Replace the string at `leaf` with its interpolated value. The parent
/// container is re-resolved from the root rather than carried as a cached
/// reference, and the leaf is re-read and type-checked before the write.
fn substitute_leaf(data: &mut Value, leaf: &[Segment], parameters: &Value) -> Result<()> {
    let Some((last, parent_path)) = leaf.split_last() else {
        // Only reachable when the root itself is a bare string.
        return Err(SubstituteError::ParentPathInvalid {
            path: segment::render(leaf),
        });
    };

    let parent = path::resolve_mut(data, parent_path).map_err(|_| SubstituteError::RefInvalid {
        path: segment::render(parent_path),
    })?;

    let slot = match parent {
        Value::Object(map) => {
            let key = match last {
                Segment::Key(key) => key.clone(),
                Segment::Index(index) => index.to_string(),
            };
            map.get_mut(&key)
        }
        Value::Array(items) => match last {
            Segment::Index(index) => items.get_mut(*index),
            Segment::Key(key) => key.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        },
        _ => {
            return Err(SubstituteError::RefNotObject {
                path: segment::render(parent_path),
            })
        }
    };

    let Some(slot) = slot else {
        return Err(SubstituteError::ChildRefNotString {
            path: segment::render(leaf),
        });
    };

    let current = match &*slot {
        Value::String(text) => text.clone(),
        _ => {
            return Err(SubstituteError::ChildRefNotString {
                path: segment::render(leaf),
            })
        }
    };

    let replaced = interpolate(parameters, &current)?;
    trace!(path = %segment::render(leaf), "substituted string leaf");
    *slot = replaced;

    Ok(())
}

fn child_path(parent: &[Segment], segment: Segment) -> Vec<Segment> {
    let mut child = Vec::with_capacity(parent.len() + 1);
    child.extend_from_slice(parent);
    child.push(segment);
    child
}
