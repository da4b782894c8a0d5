//! Random loose-value generator for testing json-guard.
//!
//! Produces nested [`LooseValue`] graphs with tunable shape: plain JSON
//! values for validator tests, or values sprinkled with missing markers and
//! foreign leaves for exercising the normalizer and its rejection paths.
//! All generation is driven by a caller-supplied [`Rng`], so seeded runs
//! are reproducible.

use json_guard::{Foreign, LooseValue};
use rand::Rng;
use serde_json::Number;

/// Shape knobs for generated values.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    /// Maximum container nesting depth. Below the limit roughly one value
    /// in thirteen is an array and one in nine an object; at the limit
    /// everything is a leaf.
    pub max_depth: usize,
    /// Maximum number of array elements or object keys per container.
    pub max_width: usize,
    /// Probability that a container slot holds the missing marker. Only
    /// honored by [`gen_loose`] and [`gen_container`].
    pub undefined_odds: f64,
    /// Probability that a container slot holds a foreign leaf. Only honored
    /// by [`gen_loose`] and [`gen_container`].
    pub foreign_odds: f64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_width: 8,
            undefined_odds: 0.0,
            foreign_odds: 0.0,
        }
    }
}

/// Generates a value entirely inside the JSON value space, ignoring the
/// marker odds. Always passes deep validation.
pub fn gen_json<R: Rng>(rng: &mut R, opts: &GeneratorOptions) -> LooseValue {
    let strict = GeneratorOptions {
        undefined_odds: 0.0,
        foreign_odds: 0.0,
        ..*opts
    };
    gen_value(rng, &strict, 0)
}

/// Generates a value that may contain missing markers and foreign leaves
/// per the configured odds.
pub fn gen_loose<R: Rng>(rng: &mut R, opts: &GeneratorOptions) -> LooseValue {
    gen_value(rng, opts, 0)
}

/// Generates a guaranteed top-level container (object or array), suitable
/// as normalizer input. Nested slots follow the configured odds.
pub fn gen_container<R: Rng>(rng: &mut R, opts: &GeneratorOptions) -> LooseValue {
    if rng.gen_bool(0.5) {
        gen_object(rng, opts, 0)
    } else {
        gen_array(rng, opts, 0)
    }
}

fn gen_slot<R: Rng>(rng: &mut R, opts: &GeneratorOptions, depth: usize) -> LooseValue {
    if opts.undefined_odds > 0.0 && rng.gen_bool(opts.undefined_odds.min(1.0)) {
        return LooseValue::Undefined;
    }
    if opts.foreign_odds > 0.0 && rng.gen_bool(opts.foreign_odds.min(1.0)) {
        return LooseValue::Foreign(gen_foreign(rng));
    }
    gen_value(rng, opts, depth)
}

fn gen_value<R: Rng>(rng: &mut R, opts: &GeneratorOptions, depth: usize) -> LooseValue {
    if depth < opts.max_depth {
        // Roll 0..26: under 2 is an array, under 5 an object, the rest
        // leaves. Keeps generated graphs leaf-heavy.
        let roll = rng.gen_range(0..26);
        if roll < 2 {
            return gen_array(rng, opts, depth);
        }
        if roll < 5 {
            return gen_object(rng, opts, depth);
        }
    }
    gen_primitive(rng)
}

fn gen_array<R: Rng>(rng: &mut R, opts: &GeneratorOptions, depth: usize) -> LooseValue {
    let len = rng.gen_range(0..=opts.max_width);
    LooseValue::Array((0..len).map(|_| gen_slot(rng, opts, depth + 1)).collect())
}

fn gen_object<R: Rng>(rng: &mut R, opts: &GeneratorOptions, depth: usize) -> LooseValue {
    let len = rng.gen_range(0..=opts.max_width);
    LooseValue::Object(
        (0..len)
            .map(|i| (format!("k{i}"), gen_slot(rng, opts, depth + 1)))
            .collect(),
    )
}

fn gen_primitive<R: Rng>(rng: &mut R) -> LooseValue {
    match rng.gen_range(0..6) {
        0 => LooseValue::Null,
        1 => LooseValue::Bool(rng.gen()),
        2 => LooseValue::Number(Number::from(rng.gen_range(-1_000_000_i64..1_000_000))),
        3 => {
            let f: f64 = rng.gen_range(-1_000.0..1_000.0);
            LooseValue::Number(Number::from_f64(f).unwrap_or_else(|| Number::from(0)))
        }
        4 => LooseValue::String(String::new()),
        _ => gen_string(rng),
    }
}

fn gen_string<R: Rng>(rng: &mut R) -> LooseValue {
    let len = rng.gen_range(1..12);
    let s: String = (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect();
    LooseValue::String(s)
}

fn gen_foreign<R: Rng>(rng: &mut R) -> Foreign {
    match rng.gen_range(0..3) {
        0 => Foreign::function(),
        1 => Foreign::symbol(),
        _ => Foreign::instance("Widget"),
    }
}
