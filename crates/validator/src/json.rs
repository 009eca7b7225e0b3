//! Validation of decoded JSON payloads.
//!
//! [`serde_json::Value`] converts into [`Value`] without coercion:
//!
//! | JSON | [`Value`] |
//! |---|---|
//! | `null` | `Nil` |
//! | `true` / `false` | `Bool` |
//! | integer fitting `i64` | `I64` |
//! | larger positive integer | `U64` |
//! | any other number | `F64` |
//! | string | `String` |
//! | array | `List` |
//! | object | `Record` named `"object"` |
//!
//! A JSON schema is therefore declared with `int64()`, `float64()` and
//! `string()` validators.
//!
//! # Examples
//!
//! ```
//! use schemata_validator::json::validate_json;
//! use schemata_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = structure()
//!     .field("age", int64().gte(0).lte(150))
//!     .field("email", string().email());
//!
//! let payload = json!({ "age": -1, "email": "not-an-email" });
//! let errors = validate_json(&schema, &payload, None).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use crate::foundation::{ErrorSet, Record, Validate, Value};

/// Type name given to records decoded from JSON objects.
pub const OBJECT_TYPE_NAME: &str = "object";

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => number(&n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(map) => {
                let mut record = Record::new(OBJECT_TYPE_NAME);
                for (key, value) in map {
                    record.push(key, value);
                }
                Self::Record(record)
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        json.clone().into()
    }
}

fn number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::I64(i)
    } else if let Some(u) = n.as_u64() {
        Value::U64(u)
    } else {
        n.as_f64().map_or(Value::Nil, Value::F64)
    }
}

/// Validates a decoded JSON document against `schema`.
///
/// # Errors
///
/// Returns every failure message produced by `schema`.
pub fn validate_json<V>(schema: &V, json: &serde_json::Value, tag: Option<&str>) -> Result<(), ErrorSet>
where
    V: Validate + ?Sized,
{
    schema.validate(&Value::from(json), tag)
}
