//! In-place normalization: rewrite a container graph so that no missing
//! marker survives.
//!
//! JSON has no representation for a "missing" entry, so the marker is
//! eliminated with container-kind-specific policy: object keys bound to the
//! marker are deleted (keys are optional, removal does not break
//! addressing), array slots holding the marker become null (positions are
//! meaning, a hole cannot be removed without shifting everything after it).

use crate::assert::assert_is_json_primitive;
use crate::classify::is_json_container;
use crate::error::{ExpectedKind, ValidationError};
use crate::value::LooseValue;

/// Rewrites `value` in place so that, on success, it satisfies the JSON
/// invariant: missing markers are deleted from objects and replaced with
/// null in arrays, recursively.
///
/// The input must already be a container; anything else fails immediately
/// with expected kind "plain object or array". Any non-missing leaf that is
/// not a JSON primitive (a foreign value) fails the whole call. The mutable
/// borrow gives the pass exclusive access for its duration; no new
/// container is allocated for the top level. Idempotent on success.
pub fn normalize_json(value: &mut LooseValue) -> Result<(), ValidationError> {
    match value {
        LooseValue::Object(entries) => {
            entries.retain(|_, v| !matches!(v, LooseValue::Undefined));
            for v in entries.values_mut() {
                if is_json_container(v) {
                    normalize_json(v)?;
                } else {
                    assert_is_json_primitive(v)?;
                }
            }
            Ok(())
        }
        LooseValue::Array(items) => {
            for item in items.iter_mut() {
                if matches!(item, LooseValue::Undefined) {
                    *item = LooseValue::Null;
                } else if is_json_container(item) {
                    normalize_json(item)?;
                } else {
                    assert_is_json_primitive(item)?;
                }
            }
            Ok(())
        }
        other => Err(ValidationError::new(other, ExpectedKind::JsonContainer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::assert_is_json;
    use crate::value::Foreign;
    use indexmap::IndexMap;
    use serde_json::json;

    fn obj(entries: Vec<(&str, LooseValue)>) -> LooseValue {
        LooseValue::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<IndexMap<_, _>>(),
        )
    }

    #[test]
    fn deletes_undefined_object_keys() {
        let mut v = obj(vec![
            ("a", LooseValue::from(json!(1))),
            ("b", LooseValue::Undefined),
            ("c", obj(vec![("d", LooseValue::Undefined)])),
        ]);
        normalize_json(&mut v).unwrap();
        assert_eq!(v, LooseValue::from(json!({"a": 1, "c": {}})));
    }

    #[test]
    fn substitutes_null_for_undefined_array_slots() {
        let mut v = LooseValue::Array(vec![
            LooseValue::from(json!(1)),
            LooseValue::Undefined,
            LooseValue::Array(vec![LooseValue::from(json!(2)), LooseValue::Undefined]),
        ]);
        normalize_json(&mut v).unwrap();
        assert_eq!(v, LooseValue::from(json!([1, null, [2, null]])));
    }

    #[test]
    fn already_valid_input_is_unchanged() {
        let original = LooseValue::from(json!({"a": [1, null, {"b": "x"}], "c": {}}));
        let mut v = original.clone();
        normalize_json(&mut v).unwrap();
        assert_eq!(v, original);
    }

    #[test]
    fn normalizing_twice_equals_normalizing_once() {
        let mut v = LooseValue::Array(vec![
            LooseValue::Undefined,
            obj(vec![("a", LooseValue::Undefined)]),
        ]);
        normalize_json(&mut v).unwrap();
        let once = v.clone();
        normalize_json(&mut v).unwrap();
        assert_eq!(v, once);
    }

    #[test]
    fn postcondition_is_deep_json_validity() {
        let mut v = obj(vec![
            ("a", LooseValue::Undefined),
            (
                "b",
                LooseValue::Array(vec![LooseValue::Undefined, LooseValue::from(json!(7))]),
            ),
        ]);
        normalize_json(&mut v).unwrap();
        assert!(assert_is_json(&v).is_ok());
    }

    #[test]
    fn rejects_function_leaf_in_object() {
        let mut v = obj(vec![("a", LooseValue::Foreign(Foreign::function()))]);
        let err = normalize_json(&mut v).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected [function] to be JSON primitive (string | number | boolean | null)"
        );
    }

    #[test]
    fn rejects_foreign_array_element() {
        let mut v = LooseValue::Array(vec![LooseValue::Foreign(Foreign::symbol())]);
        assert!(normalize_json(&mut v).is_err());
    }

    #[test]
    fn rejects_non_container_input() {
        let mut n = LooseValue::from(json!(42));
        assert_eq!(
            normalize_json(&mut n).unwrap_err().to_string(),
            "Expected 42 to be plain object or array"
        );

        let mut s = LooseValue::from(json!("x"));
        assert_eq!(
            normalize_json(&mut s).unwrap_err().to_string(),
            r#"Expected "x" to be plain object or array"#
        );
    }
}
