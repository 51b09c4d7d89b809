//! Record payload shapes accepted by the write tools
//!
//! Callers may send either `{"fields": {...}}` (optionally with `"id"`) or a
//! flat `{"Column": value}` mapping. Grist only accepts the former, so every
//! batch is classified once and normalized as a whole.

use serde_json::{Map, Value};

use crate::error::{GristError, GristResult};

/// One caller-supplied record, classified by shape
#[derive(Debug, Clone, PartialEq)]
pub enum RecordInput {
    /// Already carries a `fields` key; any other keys stay in `extra`
    Shaped {
        id: Option<Value>,
        fields: Value,
        extra: Map<String, Value>,
    },
    /// Plain column → value mapping
    Flat(Map<String, Value>),
}

impl RecordInput {
    pub fn classify(mut record: Map<String, Value>) -> Self {
        match record.shift_remove("fields") {
            Some(fields) => {
                let id = record.shift_remove("id");
                RecordInput::Shaped {
                    id,
                    fields,
                    extra: record,
                }
            }
            None => RecordInput::Flat(record),
        }
    }

    pub fn is_shaped(&self) -> bool {
        matches!(self, RecordInput::Shaped { .. })
    }

    /// The row id, if present
    pub fn id(&self) -> Option<&Value> {
        match self {
            RecordInput::Shaped { id, .. } => id.as_ref(),
            RecordInput::Flat(map) => map.get("id"),
        }
    }

    /// Rebuild the record as the caller sent it
    pub fn into_map(self) -> Map<String, Value> {
        match self {
            RecordInput::Shaped { id, fields, extra } => {
                let mut map = Map::new();
                if let Some(id) = id {
                    map.insert("id".to_string(), id);
                }
                map.insert("fields".to_string(), fields);
                map.extend(extra);
                map
            }
            RecordInput::Flat(map) => map,
        }
    }

    /// Split off the row id; every other key is returned as column values
    fn split_id(self) -> (Option<Value>, Map<String, Value>) {
        match self {
            RecordInput::Shaped { id, fields, extra } => {
                let mut rest = Map::new();
                rest.insert("fields".to_string(), fields);
                rest.extend(extra);
                (id, rest)
            }
            RecordInput::Flat(mut map) => {
                let id = map.shift_remove("id");
                (id, map)
            }
        }
    }
}

/// Normalize records for `POST .../records`
///
/// All-or-nothing: when every record already has `fields` the batch is passed
/// through untouched, otherwise every record is wrapped as `{"fields": record}`.
pub fn normalize_new_records(records: Vec<Map<String, Value>>) -> Vec<Map<String, Value>> {
    let inputs: Vec<RecordInput> = records.into_iter().map(RecordInput::classify).collect();
    let pass_through = inputs.iter().all(RecordInput::is_shaped);

    inputs
        .into_iter()
        .map(|input| {
            if pass_through {
                input.into_map()
            } else {
                wrap_fields(None, input.into_map())
            }
        })
        .collect()
}

/// Normalize records for `PATCH .../records`
///
/// When every record has both `id` and `fields` the batch is passed through.
/// Otherwise each record must have an `id`, and every other key moves into
/// `fields`. Row ids must be integers either way.
pub fn normalize_record_updates(
    records: Vec<Map<String, Value>>,
) -> GristResult<Vec<Map<String, Value>>> {
    let inputs: Vec<RecordInput> = records.into_iter().map(RecordInput::classify).collect();
    let pass_through = inputs
        .iter()
        .all(|input| input.is_shaped() && input.id().is_some());

    inputs
        .into_iter()
        .map(|input| -> GristResult<Map<String, Value>> {
            let record = if pass_through {
                input.into_map()
            } else {
                let (id, fields) = input.split_id();
                let id = id.ok_or_else(|| {
                    GristError::validation(format!(
                        "Each record must contain an 'id' field: {}",
                        Value::Object(fields.clone())
                    ))
                })?;
                wrap_fields(Some(id), fields)
            };

            if record.get("id").map_or(false, Value::is_i64) {
                Ok(record)
            } else {
                Err(GristError::validation(format!(
                    "Record 'id' must be an integer: {}",
                    Value::Object(record)
                )))
            }
        })
        .collect()
}

/// Integer ids of a normalized update batch
pub fn payload_ids(records: &[Map<String, Value>]) -> Vec<i64> {
    records
        .iter()
        .filter_map(|record| record.get("id").and_then(Value::as_i64))
        .collect()
}

fn wrap_fields(id: Option<Value>, fields: Map<String, Value>) -> Map<String, Value> {
    let mut wrapped = Map::new();
    if let Some(id) = id {
        wrapped.insert("id".to_string(), id);
    }
    wrapped.insert("fields".to_string(), Value::Object(fields));
    wrapped
}
