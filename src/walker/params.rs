// ABOUTME: Parameter table type and overwrite merging
// ABOUTME: Builds the substitution source the interpolator resolves against

use serde_json::{Map, Value};

/// Flat substitution source: string keys to JSON values. Mapping order is
/// insertion order, which is also the walker's traversal order for
/// mapping children.
pub type ParamTable = Map<String, Value>;

/// Merge `overwrite` over `parameters`, key for key. Shallow only: an
/// overwritten key replaces the whole value, nested mappings are not
/// merged recursively.
pub fn merge(parameters: &ParamTable, overwrite: Option<&ParamTable>) -> Value {
    let mut merged = parameters.clone();
    if let Some(overwrite) = overwrite {
        for (key, value) in overwrite {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(value: Value) -> ParamTable {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test tables are objects"),
        }
    }

    #[test]
    fn test_merge_without_overwrite() {
        let params = table(json!({"a": 1, "b": 2}));
        assert_eq!(merge(&params, None), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_overwrite_wins_key_for_key() {
        let params = table(json!({"a": 1, "b": 2}));
        let overwrite = table(json!({"b": 20, "c": 30}));
        assert_eq!(
            merge(&params, Some(&overwrite)),
            json!({"a": 1, "b": 20, "c": 30})
        );
    }

    #[test]
    fn test_merge_is_shallow() {
        let params = table(json!({"nested": {"keep": 1, "lose": 2}}));
        let overwrite = table(json!({"nested": {"keep": 9}}));
        assert_eq!(
            merge(&params, Some(&overwrite)),
            json!({"nested": {"keep": 9}})
        );
    }
}
