//! Deep validation: confirm that everything reachable from a value belongs
//! to the JSON value space.

use crate::assert::assert_is_json_primitive;
use crate::error::ValidationError;
use crate::value::LooseValue;

/// Recursively validates that `value` and every reachable nested value is a
/// JSON primitive or container.
///
/// Fails at the first invalid value found: the missing marker, a foreign
/// leaf, anywhere in the graph. Recursion depth equals the nesting depth of
/// the input.
pub fn assert_is_json(value: &LooseValue) -> Result<(), ValidationError> {
    match value {
        LooseValue::Object(entries) => entries.values().try_for_each(assert_is_json),
        LooseValue::Array(items) => items.iter().try_for_each(assert_is_json),
        other => assert_is_json_primitive(other),
    }
}
