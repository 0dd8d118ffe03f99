use serde_json::Value;

use crate::errors::ServiceError;

pub const GROUP_SIZE: usize = 10;

/// Derive the reportable property list from a library document: the keys of
/// an object in insertion order, or the elements of an array. Any other
/// top-level shape is an input error.
pub fn properties(doc: &Value) -> Result<Vec<String>, ServiceError> {
    match doc {
        Value::Object(map) => Ok(map.keys().cloned().collect()),
        Value::Array(items) => Ok(items.iter().map(render).collect()),
        _ => Err(ServiceError::Shape(
            "expected a JSON object or array at the top level".into(),
        )),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format the property list into numbered lines of at most [`GROUP_SIZE`]
/// entries each: `1. a, b, c`.
pub fn grouped_lines(props: &[String]) -> Vec<String> {
    props
        .chunks(GROUP_SIZE)
        .enumerate()
        .map(|(i, group)| format!("{}. {}", i + 1, group.join(", ")))
        .collect()
}
