//! JSON exports: a bare array of objects, or the data source's
//! `{"response": {"results": [...]}}` envelope.

use std::path::Path;

use serde_json::{Map, Value};

use sacrra_model::AccountRecord;

use crate::error::{IngestError, Result};
use crate::fields::FieldMapper;
use crate::loader::Ingested;

/// Parse JSON text into records. `path` is used for error reporting only.
pub fn parse_json(path: &Path, text: &str) -> Result<Ingested> {
    let root: Value = serde_json::from_str(text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;
    let shape_error = |reason: &str| IngestError::JsonShape {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let rows = match &root {
        Value::Array(rows) => rows,
        Value::Object(object) => object
            .get("response")
            .and_then(|response| response.get("results"))
            .and_then(Value::as_array)
            .ok_or_else(|| shape_error("object without response.results array"))?,
        _ => return Err(shape_error("expected an array or an object")),
    };

    let mut mapper = FieldMapper::new();
    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let object = row
            .as_object()
            .ok_or_else(|| shape_error(&format!("record {index} is not an object")))?;
        records.push(record_from_object(object, &mut mapper));
    }
    Ok(Ingested {
        records,
        unknown_fields: mapper.into_unknown(),
    })
}

fn record_from_object(object: &Map<String, Value>, mapper: &mut FieldMapper) -> AccountRecord {
    mapper.map_record(
        object
            .iter()
            .filter_map(|(name, value)| Some((name.as_str(), value_text(value)?))),
    )
}

/// Scalar values as text; null is empty. Nested values are not attributes.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Ingested> {
        parse_json(Path::new("input.json"), text)
    }

    #[test]
    fn bare_array_with_mixed_scalars() {
        let ingested = parse(
            r#"[{"sa_id": "8001015009087", "current_balance": 1500.5,
                 "handed_over_flag": true, "title": null, "tags": ["x"]}]"#,
        )
        .unwrap();
        let record = &ingested.records[0];
        assert_eq!(record.sa_id, "8001015009087");
        assert_eq!(record.current_balance, "1500.5");
        assert!(record.handed_over_flag);
        assert_eq!(record.title, "");
    }

    #[test]
    fn envelope_with_data_source_names() {
        let ingested = parse(
            r#"{"response": {"results": [
                {"Created Date": "2025-06-14T08:00:00.000Z", "Account_Number": "A100", "_id": "x1"}
            ], "remaining": 0}}"#,
        )
        .unwrap();
        let record = &ingested.records[0];
        assert_eq!(record.date_account_opened, "2025-06-14T08:00:00.000Z");
        assert_eq!(record.account_number, "A100");
        assert!(ingested.unknown_fields.contains("_id"));
    }

    #[test]
    fn created_date_beats_snake_case_open_date() {
        let ingested = parse(
            r#"[{"date_account_opened": "20240101", "Created Date": "2025-06-14",
                 "Account_Number": "A100"}]"#,
        )
        .unwrap();
        assert_eq!(ingested.records[0].date_account_opened, "2025-06-14");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(parse("42"), Err(IngestError::JsonShape { .. })));
        assert!(matches!(
            parse(r#"{"results": []}"#),
            Err(IngestError::JsonShape { .. })
        ));
        assert!(matches!(parse("[1]"), Err(IngestError::JsonShape { .. })));
        assert!(matches!(parse("[{"), Err(IngestError::JsonParse { .. })));
    }
}
