//! json-guard — runtime classification, validation, and in-place
//! normalization of loosely-typed values against the JSON data model.
//!
//! Values arriving from untyped sources are modeled as [`LooseValue`]: the
//! JSON value space plus the missing-value marker ([`LooseValue::Undefined`],
//! distinct from null) and arbitrary out-of-model leaves
//! ([`LooseValue::Foreign`]). Four layers build on each other:
//!
//! 1. classifier predicates ([`classify`], [`is_json_primitive`],
//!    [`is_array`], [`is_plain_object`], [`is_json_container`]);
//! 2. fail-fast assertions returning [`ValidationError`]
//!    ([`assert_is_json_primitive`] and friends);
//! 3. the deep validator [`assert_is_json`];
//! 4. the in-place normalizer [`normalize_json`], which deletes
//!    missing-marker keys from objects and null-substitutes missing-marker
//!    array slots.
//!
//! ```
//! use json_guard::{normalize_json, LooseValue};
//! use serde_json::json;
//!
//! let mut value = LooseValue::Array(vec![
//!     LooseValue::from(json!(1)),
//!     LooseValue::Undefined,
//! ]);
//! normalize_json(&mut value).unwrap();
//! assert_eq!(value, LooseValue::from(json!([1, null])));
//! ```

mod assert;
mod classify;
mod error;
mod normalize;
mod validate;
mod value;

pub use assert::{
    assert_is_array, assert_is_json_container, assert_is_json_primitive, assert_is_plain_object,
};
pub use classify::{
    classify, is_array, is_json_container, is_json_primitive, is_plain_object, ValueClass,
};
pub use error::{ExpectedKind, ValidationError};
pub use normalize::normalize_json;
pub use validate::assert_is_json;
pub use value::{Foreign, LooseValue};
