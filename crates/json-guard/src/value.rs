//! The loose value model: JSON values plus the out-of-model leaves that
//! untyped input can carry.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::error::{ExpectedKind, ValidationError};

/// A host value outside the JSON data model that is not the missing marker:
/// a function, a symbol, an instance of a user-defined type.
///
/// Carries only a type name, used when rendering the value in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foreign {
    type_name: String,
}

impl Foreign {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// A callable value.
    pub fn function() -> Self {
        Self::new("function")
    }

    /// A symbol value.
    pub fn symbol() -> Self {
        Self::new("symbol")
    }

    /// An instance of a user-defined type, i.e. a keyed value that is not a
    /// plain data record.
    pub fn instance(type_name: impl Into<String>) -> Self {
        Self::new(type_name)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// An arbitrary value as it arrives from an untyped source, before any
/// validation has confirmed it belongs to the JSON value space.
///
/// The JSON subset maps one-to-one onto [`serde_json::Value`]. Two extra
/// variants cover everything else:
///
/// - [`LooseValue::Undefined`] is the missing-value marker, distinct from
///   [`LooseValue::Null`].
/// - [`LooseValue::Foreign`] is any other out-of-model leaf.
///
/// The [`LooseValue::Object`] variant is by construction a *plain* object:
/// class instances never take this shape, they enter the model only as
/// [`LooseValue::Foreign`]. Objects preserve insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum LooseValue {
    /// The missing-value marker. Not a JSON value.
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<LooseValue>),
    Object(IndexMap<String, LooseValue>),
    /// An out-of-model leaf other than the missing marker.
    Foreign(Foreign),
}

impl LooseValue {
    /// True for the two leaves that have no JSON form at all.
    fn is_out_of_model(&self) -> bool {
        matches!(self, LooseValue::Undefined | LooseValue::Foreign(_))
    }

    /// Lossy JSON projection used only for rendering: out-of-model object
    /// entries are dropped and out-of-model array elements become null, the
    /// way a host JSON renderer prints them.
    fn to_json_lossy(&self) -> Value {
        match self {
            LooseValue::Undefined | LooseValue::Foreign(_) | LooseValue::Null => Value::Null,
            LooseValue::Bool(b) => Value::Bool(*b),
            LooseValue::Number(n) => Value::Number(n.clone()),
            LooseValue::String(s) => Value::String(s.clone()),
            LooseValue::Array(items) => {
                Value::Array(items.iter().map(LooseValue::to_json_lossy).collect())
            }
            LooseValue::Object(entries) => Value::Object(
                entries
                    .iter()
                    .filter(|(_, v)| !v.is_out_of_model())
                    .map(|(k, v)| (k.clone(), v.to_json_lossy()))
                    .collect(),
            ),
        }
    }
}

/// Renders the value the way it appears in [`ValidationError`] messages:
/// JSON text where the value has a JSON form, `undefined` for the missing
/// marker, and a bracketed type name for foreign leaves.
impl fmt::Display for LooseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseValue::Undefined => f.write_str("undefined"),
            LooseValue::Foreign(v) => write!(f, "[{}]", v.type_name()),
            other => write!(f, "{}", other.to_json_lossy()),
        }
    }
}

/// Every JSON value is a valid loose value.
impl From<Value> for LooseValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LooseValue::Null,
            Value::Bool(b) => LooseValue::Bool(b),
            Value::Number(n) => LooseValue::Number(n),
            Value::String(s) => LooseValue::String(s),
            Value::Array(items) => {
                LooseValue::Array(items.into_iter().map(LooseValue::from).collect())
            }
            Value::Object(entries) => LooseValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, LooseValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Strict conversion back into the JSON value space.
///
/// Fails at the first reachable `Undefined` or `Foreign` leaf with the same
/// error [`crate::assert_is_json`] would report for that leaf.
impl TryFrom<LooseValue> for Value {
    type Error = ValidationError;

    fn try_from(value: LooseValue) -> Result<Value, ValidationError> {
        match value {
            LooseValue::Null => Ok(Value::Null),
            LooseValue::Bool(b) => Ok(Value::Bool(b)),
            LooseValue::Number(n) => Ok(Value::Number(n)),
            LooseValue::String(s) => Ok(Value::String(s)),
            LooseValue::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(Value::try_from(item)?);
                }
                Ok(Value::Array(out))
            }
            LooseValue::Object(entries) => {
                let mut out = Map::new();
                for (key, val) in entries {
                    out.insert(key, Value::try_from(val)?);
                }
                Ok(Value::Object(out))
            }
            other => Err(ValidationError::new(&other, ExpectedKind::JsonPrimitive)),
        }
    }
}
