//! Module input values.
//!
//! A [`ModuleInput`] is a mapping of semantic field names to [`FieldValue`]s.
//! Boolean-like questions are tri-state: `Bool(true)`, `Bool(false)` or
//! [`FieldValue::Unset`]. Unset is never collapsed into `false`.

pub mod form;

pub use form::*;

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single answer supplied for a module field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    #[default]
    Unset,
}

static UNSET: FieldValue = FieldValue::Unset;

impl FieldValue {
    pub fn is_set(&self) -> bool {
        !matches!(self, FieldValue::Unset)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Unset => write!(f, "unset"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Option<bool>> for FieldValue {
    fn from(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Unset, FieldValue::Bool)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// The answers submitted for one evaluation of a clinical module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleInput {
    fields: BTreeMap<String, FieldValue>,
}

impl ModuleInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful in tests and tools.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Returns the value for `field`, or [`FieldValue::Unset`] when absent.
    pub fn get(&self, field: &str) -> &FieldValue {
        self.fields.get(field).unwrap_or(&UNSET)
    }

    pub fn is_set(&self, field: &str) -> bool {
        self.get(field).is_set()
    }

    pub fn is_true(&self, field: &str) -> bool {
        self.get(field).as_bool() == Some(true)
    }

    /// Returns a trimmed free-text value, treating blank text as absent.
    pub fn note(&self, field: &str) -> Option<&str> {
        self.get(field)
            .as_text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a JSON object of answers.
    ///
    /// Booleans become tri-state answers, strings become codes or notes and
    /// `null` is kept as an explicit unset. Blank strings read as unset, the
    /// same as a blank form control. Any other JSON type is rejected.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = match value {
            serde_json::Value::Object(map) => map,
            other => return Err(InputError::NotAnObject(other.to_string())),
        };

        let mut input = ModuleInput::new();
        for (field, value) in object {
            let field_value = match value {
                serde_json::Value::Bool(b) => FieldValue::Bool(b),
                serde_json::Value::String(s) if s.trim().is_empty() => FieldValue::Unset,
                serde_json::Value::String(s) => FieldValue::Text(s),
                serde_json::Value::Null => FieldValue::Unset,
                other => {
                    return Err(InputError::UnsupportedValue {
                        field,
                        found: other.to_string(),
                    });
                }
            };
            input.fields.insert(field, field_value);
        }
        Ok(input)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ModuleInput {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
