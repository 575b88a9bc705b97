//! Body-argument capture and allow-list filtering.
//!
//! Callers hand over body arguments as any serializable value that becomes a
//! JSON object. Only keys on the descriptor's allow-list reach the wire;
//! other keys are dropped without an error, and `null` values are omitted
//! rather than serialized.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::descriptor::OperationDescriptor;
use crate::error::ApiError;

/// Keyword arguments for one call, before filtering.
pub type BodyArgs = Map<String, Value>;

/// Capture `body` as keyword arguments.
///
/// Structs, maps and `json!({...})` objects are accepted. `()` and `None`
/// serialize to `null` and give an empty argument set.
pub fn body_args<B: Serialize + ?Sized>(body: &B) -> Result<BodyArgs, ApiError> {
    match serde_json::to_value(body).map_err(ApiError::Serialization)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(BodyArgs::new()),
        other => Err(ApiError::BodyNotObject { kind: kind(&other) }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A request body restricted to one descriptor's body fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Keep the entries of `args` whose key is on the allow-list and whose
    /// value is not `null`.
    pub fn filter(descriptor: &OperationDescriptor, args: BodyArgs) -> Self {
        let mut kept = Map::new();
        for (key, value) in args {
            if !descriptor.accepts(&key) {
                tracing::trace!(operation = descriptor.id(), key = %key, "dropping unrecognized body argument");
                continue;
            }
            if value.is_null() {
                continue;
            }
            kept.insert(key, value);
        }
        Payload(kept)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_json_string(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    #[cfg(test)]
    pub(crate) fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        Payload(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}
