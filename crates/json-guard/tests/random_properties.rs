//! Property tests over randomly generated loose values.

use json_guard::{assert_is_json, is_json_container, normalize_json, LooseValue};
use json_guard_random::{gen_container, gen_json, GeneratorOptions};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

proptest! {
    /// Generated JSON values validate and round-trip through serde_json.
    #[test]
    fn generated_json_validates_and_round_trips(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let loose = gen_json(&mut rng, &GeneratorOptions::default());
        prop_assert!(assert_is_json(&loose).is_ok());

        let value = Value::try_from(loose.clone()).expect("validated value converts");
        prop_assert_eq!(LooseValue::from(value), loose);
    }

    /// Normalizing a container with missing markers (and no foreign leaves)
    /// succeeds, establishes deep validity, and is idempotent.
    #[test]
    fn normalization_succeeds_and_is_idempotent(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let opts = GeneratorOptions {
            undefined_odds: 0.25,
            ..GeneratorOptions::default()
        };
        let mut container = gen_container(&mut rng, &opts);
        prop_assert!(is_json_container(&container));

        normalize_json(&mut container).expect("marker-only input normalizes");
        prop_assert!(assert_is_json(&container).is_ok());

        let once = container.clone();
        normalize_json(&mut container).expect("second pass");
        prop_assert_eq!(container, once);
    }

    /// Already-valid containers are left observably unchanged.
    #[test]
    fn valid_containers_are_untouched(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let opts = GeneratorOptions::default();
        let mut container = gen_container(&mut rng, &opts);
        let original = container.clone();
        normalize_json(&mut container).expect("valid input normalizes");
        prop_assert_eq!(container, original);
    }

    /// When foreign leaves are present, normalization either succeeds (the
    /// roll produced none) or fails with the assertion-layer message shape.
    #[test]
    fn foreign_leaves_fail_with_assertion_message(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let opts = GeneratorOptions {
            undefined_odds: 0.1,
            foreign_odds: 0.3,
            ..GeneratorOptions::default()
        };
        let mut container = gen_container(&mut rng, &opts);
        if let Err(err) = normalize_json(&mut container) {
            let message = err.to_string();
            prop_assert!(message.starts_with("Expected "));
            prop_assert!(message.ends_with(
                "to be JSON primitive (string | number | boolean | null)"
            ));
        }
    }
}
