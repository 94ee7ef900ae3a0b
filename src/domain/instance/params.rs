//! Model construction parameters

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// Keyword parameters passed to a model constructor
///
/// Keys are kept sorted so equal parameter sets render identically no
/// matter the order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelParams(BTreeMap<String, Value>);

impl ModelParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Parse a `key=value` pair; the value is read as JSON when it parses,
    /// otherwise kept as a plain string
    pub fn parse_pair(pair: &str) -> Result<(String, Value), DomainError> {
        let (key, raw) = pair.split_once('=').ok_or_else(|| {
            DomainError::validation(format!("Invalid parameter '{}': expected key=value", pair))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::validation(format!(
                "Invalid parameter '{}': key cannot be empty",
                pair
            )));
        }

        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok((key.to_string(), value))
    }

    /// Deterministic rendering used for cache keys
    ///
    /// Nested objects are re-sorted as well, independent of how
    /// `serde_json` orders its maps.
    pub fn canonical(&self) -> String {
        let sorted: BTreeMap<&String, Value> =
            self.0.iter().map(|(k, v)| (k, canonicalize(v))).collect();

        serde_json::to_string(&sorted).unwrap_or_default()
    }
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            let mut out = serde_json::Map::new();

            for (k, v) in sorted {
                out.insert(k.clone(), canonicalize(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

impl FromIterator<(String, Value)> for ModelParams {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ModelParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
