//! Raw form submissions and the records derived from them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Entity;

/// A submitted form as received: field name to JSON value.
///
/// JSON bodies deserialize straight into it; multipart text fields are
/// inserted as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(Map<String, Value>);

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`Submission::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns true if the field is present and not falsy.
    ///
    /// Falsy values are `null`, `false`, numeric zero and the empty string.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(is_truthy)
    }

    /// Text to store for a field, `None` for absent or `null` values.
    ///
    /// Strings are returned verbatim; any other JSON value is stored as its
    /// JSON text.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Projects the submission onto the entity's stored columns.
    pub fn into_record(self, entity: Entity) -> Record {
        let values = entity
            .columns()
            .iter()
            .map(|column| self.text(column))
            .collect();
        Record { entity, values }
    }
}

impl From<Map<String, Value>> for Submission {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A row ready for insertion: one value per column of [`Entity::columns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub entity: Entity,
    pub values: Vec<Option<String>>,
}

impl Record {
    /// Column/value pairs in insert order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.entity
            .columns()
            .iter()
            .copied()
            .zip(self.values.iter().map(Option::as_deref))
    }
}
