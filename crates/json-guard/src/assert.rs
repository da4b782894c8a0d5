//! Fail-fast wrappers over the classifier predicates.
//!
//! Each returns `Ok(())` when the predicate holds and otherwise a
//! [`ValidationError`] carrying the rejected value's rendering.

use crate::classify::{is_array, is_json_container, is_json_primitive, is_plain_object};
use crate::error::{ExpectedKind, ValidationError};
use crate::value::LooseValue;

pub fn assert_is_json_primitive(value: &LooseValue) -> Result<(), ValidationError> {
    if is_json_primitive(value) {
        Ok(())
    } else {
        Err(ValidationError::new(value, ExpectedKind::JsonPrimitive))
    }
}

pub fn assert_is_array(value: &LooseValue) -> Result<(), ValidationError> {
    if is_array(value) {
        Ok(())
    } else {
        Err(ValidationError::new(value, ExpectedKind::Array))
    }
}

pub fn assert_is_plain_object(value: &LooseValue) -> Result<(), ValidationError> {
    if is_plain_object(value) {
        Ok(())
    } else {
        Err(ValidationError::new(value, ExpectedKind::PlainObject))
    }
}

pub fn assert_is_json_container(value: &LooseValue) -> Result<(), ValidationError> {
    if is_json_container(value) {
        Ok(())
    } else {
        Err(ValidationError::new(value, ExpectedKind::JsonContainer))
    }
}
