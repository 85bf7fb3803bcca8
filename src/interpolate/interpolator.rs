// ABOUTME: Placeholder interpolation over single strings
// ABOUTME: Scans for non-greedy placeholder markers, resolves each path, splices results

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};

use super::error::Result;
use crate::path::{self, segment};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("placeholder pattern is valid"));

/// Substitute every placeholder in `input` with the value its path addresses
/// inside `parameters`.
///
/// Returns a `Value::String`, or a `Value::Number` when the final output
/// string survives the numeric round-trip check unchanged. The first path
/// that fails to resolve aborts the whole string; nothing partially
/// substituted is returned.
pub fn interpolate(parameters: &Value, input: &str) -> Result<Value> {
    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;

    for matched in PLACEHOLDER.find_iter(input) {
        let marker = matched.as_str();
        let interior = marker[2..marker.len() - 2].trim();
        let segments = segment::parse(interior);
        let resolved = path::resolve(parameters, &segments)?;

        output.push_str(&input[cursor..matched.start()]);
        output.push_str(&render_replacement(resolved));
        cursor = matched.end();
    }
    output.push_str(&input[cursor..]);

    Ok(coerce_numeric(output))
}

/// Placeholder replacements render strings verbatim, `null` as the literal
/// text `null`, and everything else in its compact JSON form.
fn render_replacement(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// A fully-interpolated string that is exactly the decimal rendering of a
/// number becomes that number. `"42"` turns into `42`; `"id=42"`, `"042"`
/// and `"4.50"` all stay strings. The check applies whether or not any
/// placeholder was substituted.
fn coerce_numeric(text: String) -> Value {
    match numeric_round_trip(&text) {
        Some(number) => Value::Number(number),
        None => Value::String(text),
    }
}

fn numeric_round_trip(text: &str) -> Option<Number> {
    if let Ok(integer) = text.parse::<i64>() {
        if integer.to_string() == text {
            return Some(Number::from(integer));
        }
    }
    let float = text.parse::<f64>().ok()?;
    if float.is_finite() && float.to_string() == text {
        return Number::from_f64(float);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_placeholder_is_identity() {
        let params = json!({});
        let result = interpolate(&params, "plain text").unwrap();
        assert_eq!(result, json!("plain text"));
    }

    #[test]
    fn test_single_placeholder_substitution() {
        let params = json!({"LINE": "LN00"});
        let result = interpolate(&params, "line {{LINE}} ready").unwrap();
        assert_eq!(result, json!("line LN00 ready"));
    }

    #[test]
    fn test_multiple_occurrences() {
        let params = json!({"L": "LN00"});
        let result = interpolate(&params, "{{L}}-{{L}}").unwrap();
        assert_eq!(result, json!("LN00-LN00"));
    }

    #[test]
    fn test_whitespace_tolerant_interior() {
        let params = json!({"L": "LN00"});
        let result = interpolate(&params, "{{ L }}").unwrap();
        assert_eq!(result, json!("LN00"));
    }

    #[test]
    fn test_nested_path_placeholder() {
        let params = json!({"device": {"ports": [8080, 8081]}});
        let result = interpolate(&params, "port={{device.ports[1]}}").unwrap();
        assert_eq!(result, json!("port=8081"));
    }

    #[test]
    fn test_sole_numeric_placeholder_becomes_number() {
        let params = json!({"EVENT_ID": 42});
        let result = interpolate(&params, "{{EVENT_ID}}").unwrap();
        assert_eq!(result, json!(42));
    }

    #[test]
    fn test_numeric_inside_text_stays_string() {
        let params = json!({"EVENT_ID": 42});
        let result = interpolate(&params, "id={{EVENT_ID}}").unwrap();
        assert_eq!(result, json!("id=42"));
    }

    #[test]
    fn test_numeric_looking_input_without_placeholders_is_coerced() {
        let params = json!({});
        assert_eq!(interpolate(&params, "42").unwrap(), json!(42));
        assert_eq!(interpolate(&params, "4.5").unwrap(), json!(4.5));
    }

    #[test]
    fn test_non_canonical_numeric_strings_stay_strings() {
        let params = json!({});
        assert_eq!(interpolate(&params, "042").unwrap(), json!("042"));
        assert_eq!(interpolate(&params, "4.50").unwrap(), json!("4.50"));
        assert_eq!(interpolate(&params, "1e3").unwrap(), json!("1e3"));
        assert_eq!(interpolate(&params, " 42").unwrap(), json!(" 42"));
        assert_eq!(interpolate(&params, "+5").unwrap(), json!("+5"));
    }

    #[test]
    fn test_null_renders_as_literal_text() {
        let params = json!({"gone": null});
        let result = interpolate(&params, "value is {{gone}}").unwrap();
        assert_eq!(result, json!("value is null"));
    }

    #[test]
    fn test_boolean_and_container_replacements() {
        let params = json!({"on": true, "list": [1, 2]});
        assert_eq!(interpolate(&params, "flag={{on}}").unwrap(), json!("flag=true"));
        assert_eq!(interpolate(&params, "v={{list}}").unwrap(), json!("v=[1,2]"));
    }

    #[test]
    fn test_unresolvable_placeholder_aborts_whole_string() {
        let params = json!({"known": "yes"});
        let err = interpolate(&params, "{{known}} then {{unknown}}").unwrap_err();
        assert_eq!(err.code(), "FOLLOW_JSON_PATH.REFERENCE_INVALID");
        assert_eq!(err.path(), "$.unknown");
    }

    #[test]
    fn test_replacement_length_delta_keeps_later_offsets_correct() {
        let params = json!({"short": "x", "long": "0123456789"});
        let result = interpolate(&params, "a{{long}}b{{short}}c").unwrap();
        assert_eq!(result, json!("a0123456789bxc"));
    }

    #[test]
    fn test_non_greedy_matching() {
        let params = json!({"a": "A", "b": "B"});
        let result = interpolate(&params, "{{a}}}}{{b}}").unwrap();
        assert_eq!(result, json!("A}}B"));
    }
}
