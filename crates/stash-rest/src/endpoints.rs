//! Convenience requests for common endpoints.

use serde_json::{Map, Value};

use crate::rest::is_present;

pub mod metadata;
pub mod performers;
pub mod scenes;
pub mod tags;

/// Build a body that includes only the fields carrying something.
fn sparse_body<'a>(fields: impl IntoIterator<Item = (&'a str, Option<&'a Value>)>) -> Value {
    let mut body = Map::new();
    for (key, value) in fields {
        if let Some(value) = value.filter(|v| is_present(v)) {
            body.insert(key.to_string(), value.clone());
        }
    }
    Value::Object(body)
}
