//! Data shaping: trimming serialized resources down to requested fields.

use serde_json::{Map, Value};

/// Keep only `id` and the comma-separated `fields` on every object in `value`.
///
/// Field names match case-insensitively. Unknown names are ignored. With no
/// field list the value is returned unchanged.
pub fn shape(value: Value, fields: Option<&str>) -> Value {
    let requested: Vec<String> = fields
        .unwrap_or_default()
        .split(',')
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty())
        .collect();

    if requested.is_empty() {
        return value;
    }

    shape_with(value, &requested)
}

fn shape_with(value: Value, requested: &[String]) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| shape_with(item, requested))
                .collect(),
        ),
        Value::Object(map) => {
            let shaped: Map<String, Value> = map
                .into_iter()
                .filter(|(key, _)| {
                    let key = key.to_lowercase();
                    key == "id" || requested.contains(&key)
                })
                .collect();
            Value::Object(shaped)
        }
        other => other,
    }
}
