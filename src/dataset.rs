use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{DatasetError, Result};

/// A dataset value. Anything richer is rejected at intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for Scalar {
    /// Numbers print in plain decimal form (`100`, `0.1`, `-10`), never with
    /// an exponent, so a substituted number always stays a valid literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            // -0 prints as 0
            Scalar::Number(n) if *n == 0.0 => f.write_str("0"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

/// Key to scalar mapping bound into templates and formulas. Keys are
/// case-sensitive and matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    values: HashMap<String, Scalar>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object such as `{"price": 100, "name": "Laptop"}`.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<Value> for Dataset {
    type Error = DatasetError;

    fn try_from(value: Value) -> Result<Self, DatasetError> {
        let Value::Object(map) = value else {
            return Err(DatasetError::NotAnObject);
        };
        let mut values = HashMap::with_capacity(map.len());
        for (key, v) in map {
            let scalar = match v {
                Value::Bool(b) => Scalar::Bool(b),
                Value::String(s) => Scalar::String(s),
                Value::Number(n) => match n.as_f64() {
                    Some(f) => Scalar::Number(f),
                    None => return Err(DatasetError::UnsupportedValue { key, kind: "a number out of range" }),
                },
                Value::Null => return Err(DatasetError::UnsupportedValue { key, kind: "null" }),
                Value::Array(_) => return Err(DatasetError::UnsupportedValue { key, kind: "an array" }),
                Value::Object(_) => return Err(DatasetError::UnsupportedValue { key, kind: "an object" }),
            };
            values.insert(key, scalar);
        }
        Ok(Self { values })
    }
}

impl<K, V> FromIterator<(K, V)> for Dataset
where
    K: Into<String>,
    V: Into<Scalar>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
