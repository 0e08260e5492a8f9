use crate::services::store::id_to_string;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_LIST_LIMIT: i64 = 50;
pub const MAX_LIST_LIMIT: i64 = 500;

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitContactResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    pub limit: Option<i64>,
}

impl ContactListParams {
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT)
    }
}

/// Renders a stored record as plain JSON: `_id` becomes a string, datetimes RFC 3339.
pub fn record_to_json(record: Document) -> Value {
    let fields: Map<String, Value> = record
        .into_iter()
        .map(|(key, value)| {
            let value = if key == "_id" {
                Value::String(id_to_string(&value))
            } else {
                bson_to_json(value)
            };
            (key, value)
        })
        .collect();
    Value::Object(fields)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        other => other.into_relaxed_extjson(),
    }
}
