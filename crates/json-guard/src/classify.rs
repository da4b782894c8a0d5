//! Classification of loose values into the JSON taxonomy.
//!
//! One total function produces the tag; every predicate derives from it, so
//! no call site can disagree on what a value is.

use crate::value::LooseValue;

/// The closed classification of a loose value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// String, number, boolean, or null.
    Primitive,
    Array,
    PlainObject,
    /// The missing marker or a foreign leaf. Never valid JSON.
    Other,
}

/// Classifies a value. Total and side-effect free.
pub fn classify(value: &LooseValue) -> ValueClass {
    match value {
        LooseValue::Null
        | LooseValue::Bool(_)
        | LooseValue::Number(_)
        | LooseValue::String(_) => ValueClass::Primitive,
        LooseValue::Array(_) => ValueClass::Array,
        LooseValue::Object(_) => ValueClass::PlainObject,
        LooseValue::Undefined | LooseValue::Foreign(_) => ValueClass::Other,
    }
}

/// True iff the value is a string, a number, a boolean, or null. The missing
/// marker is not a primitive.
pub fn is_json_primitive(value: &LooseValue) -> bool {
    classify(value) == ValueClass::Primitive
}

pub fn is_array(value: &LooseValue) -> bool {
    classify(value) == ValueClass::Array
}

/// True iff the value is a plain keyed record. Instances of user-defined
/// types are [`LooseValue::Foreign`] and never match.
pub fn is_plain_object(value: &LooseValue) -> bool {
    classify(value) == ValueClass::PlainObject
}

/// True iff the value is a plain object or an array.
pub fn is_json_container(value: &LooseValue) -> bool {
    is_plain_object(value) || is_array(value)
}
