//! The merged frontmatter record handed back to callers.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::{GloboticketError, Result};

/// Reserved key holding the document body in the merged mapping.
pub const CONTENT_KEY: &str = "content";

/// Header fields of a frontmatter document plus its body under [`CONTENT_KEY`].
///
/// Parsed fresh on every lookup; nothing here is cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    pub(crate) fn new(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Scalar value under `key` rendered as a string.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The document body.
    pub fn content(&self) -> &str {
        self.get(CONTENT_KEY).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    pub fn into_mapping(self) -> Mapping {
        self.0
    }

    /// Convert into a JSON object so it can be merged into an API response.
    ///
    /// Mapping keys are stringified at every depth: numbers, booleans and
    /// null become their string form, and keys with no scalar form
    /// (sequences, mappings) are dropped. When two keys collapse to the
    /// same string the later one wins.
    pub fn to_json(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        mapping_to_json(&self.0)
    }

    /// Overlay these fields onto an event record, replacing existing keys.
    pub fn merge_into(
        &self,
        record: &mut serde_json::Map<String, serde_json::Value>,
    ) -> Result<()> {
        record.extend(self.to_json()?);
        Ok(())
    }

    /// Render back as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.0).map_err(|e| GloboticketError::SerializationFailed {
            message: e.to_string(),
        })
    }
}

impl From<Frontmatter> for Mapping {
    fn from(frontmatter: Frontmatter) -> Self {
        frontmatter.0
    }
}

fn mapping_to_json(mapping: &Mapping) -> Result<serde_json::Map<String, serde_json::Value>> {
    let mut out = serde_json::Map::with_capacity(mapping.len());
    for (key, value) in mapping {
        let Some(key) = key_to_string(key) else {
            tracing::debug!(?key, "skipping frontmatter key without a scalar form");
            continue;
        };
        let value = value_to_json(value)?;
        if out.insert(key.clone(), value).is_some() {
            tracing::warn!(key = %key, "frontmatter keys collide in JSON, keeping the last");
        }
    }
    Ok(out)
}

fn value_to_json(value: &Value) -> Result<serde_json::Value> {
    match value {
        Value::Mapping(mapping) => Ok(serde_json::Value::Object(mapping_to_json(mapping)?)),
        Value::Sequence(items) => items
            .iter()
            .map(value_to_json)
            .collect::<Result<Vec<_>>>()
            .map(serde_json::Value::Array),
        Value::Tagged(tagged) => {
            let mut object = serde_json::Map::with_capacity(1);
            object.insert(tagged.tag.to_string(), value_to_json(&tagged.value)?);
            Ok(serde_json::Value::Object(object))
        }
        scalar => Ok(serde_json::to_value(scalar)?),
    }
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}
