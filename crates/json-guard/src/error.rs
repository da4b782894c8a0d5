//! The single error type raised by the assertion layer.

use std::fmt;

use thiserror::Error;

use crate::value::LooseValue;

/// The shape a rejected value was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedKind {
    JsonPrimitive,
    Array,
    PlainObject,
    JsonContainer,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExpectedKind::JsonPrimitive => "JSON primitive (string | number | boolean | null)",
            ExpectedKind::Array => "array",
            ExpectedKind::PlainObject => "plain object",
            ExpectedKind::JsonContainer => "plain object or array",
        })
    }
}

/// A value failed classification against the JSON data model.
///
/// Carries the rejected value's rendering and the expected kind; the message
/// is always `Expected <value> to be <kind>`. Deep traversal propagates the
/// innermost failure unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Expected {rendered} to be {expected}")]
pub struct ValidationError {
    rendered: String,
    expected: ExpectedKind,
}

impl ValidationError {
    pub(crate) fn new(value: &LooseValue, expected: ExpectedKind) -> Self {
        Self {
            rendered: value.to_string(),
            expected,
        }
    }

    /// The JSON text rendering of the rejected value.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn expected(&self) -> ExpectedKind {
        self.expected
    }
}
