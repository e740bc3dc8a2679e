//! CSV rendering of serialized DTOs.
//!
//! The header row is taken from the first object's field names; every item
//! becomes one row. Lists of scalars render as a single `value` column.

use serde_json::Value;

use super::FormatError;

pub(super) fn render(value: &Value) -> Result<Vec<u8>, FormatError> {
    let rows: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let headers: Vec<String> = match rows.first() {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(_) => vec!["value".to_string()],
        None => Vec::new(),
    };

    let mut writer = ::csv::Writer::from_writer(Vec::new());
    if !headers.is_empty() {
        writer.write_record(&headers).map_err(csv_error)?;
    }

    for row in rows {
        let record: Vec<String> = match row {
            Value::Object(map) => headers
                .iter()
                .map(|h| map.get(h).map(cell).unwrap_or_default())
                .collect(),
            scalar => vec![cell(scalar)],
        };
        writer.write_record(&record).map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| FormatError::Csv(e.to_string()))
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn csv_error(err: ::csv::Error) -> FormatError {
    FormatError::Csv(err.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn render_str(value: Value) -> String {
        String::from_utf8(render(&value).unwrap()).unwrap()
    }

    #[test]
    fn list_of_objects() {
        let csv = render_str(json!([
            {"id": "1", "name": "Acme", "country": "US"},
            {"id": "2", "name": "Foo, Inc", "country": null}
        ]));
        assert_eq!(csv, "id,name,country\n1,Acme,US\n2,\"Foo, Inc\",\n");
    }

    #[test]
    fn single_object_is_one_row() {
        assert_eq!(render_str(json!({"id": "1", "age": 30})), "id,age\n1,30\n");
    }

    #[test]
    fn scalar_list() {
        assert_eq!(render_str(json!(["A V2", "B V2"])), "value\nA V2\nB V2\n");
    }

    #[test]
    fn empty_list_is_empty() {
        assert_eq!(render_str(json!([])), "");
    }
}
