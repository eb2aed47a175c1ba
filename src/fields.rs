use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::errors::{Result, TemplateError};

/// Field name → value mapping consulted by conditions and placeholders.
///
/// Keys are unique under exact comparison. A lower-cased index backs the
/// case-insensitive fallback; when several keys fold to the same form the
/// index keeps the lexicographically smallest one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct FieldMap {
    values: HashMap<String, String>,
    folded: HashMap<String, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.folded
            .entry(key.to_lowercase())
            .and_modify(|indexed| {
                if key < *indexed {
                    *indexed = key.clone();
                }
            })
            .or_insert_with(|| key.clone());
        self.values.insert(key, value.into());
    }

    /// Exact-key lookup only.
    pub fn get_exact(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Exact match first, then case-insensitive.
    pub fn get(&self, key: &str) -> Option<&str> {
        if let Some(v) = self.get_exact(key) {
            return Some(v);
        }
        self.folded
            .get(&key.to_lowercase())
            .and_then(|original| self.get_exact(original))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Load a flat JSON object. Numbers and booleans keep their JSON text,
    /// `null` becomes an empty value.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(json)?;
        let obj = match doc {
            Value::Object(obj) => obj,
            other => return Err(TemplateError::NotAnObject(kind_of(&other).into())),
        };
        let mut fields = FieldMap::new();
        for (key, value) in obj {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                other => {
                    return Err(TemplateError::InvalidField {
                        field: key,
                        kind: kind_of(&other),
                    })
                }
            };
            fields.insert(key, text);
        }
        Ok(fields)
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FieldMap::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FieldMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for FieldMap {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}
