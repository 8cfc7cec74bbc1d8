//! Property-based tests - pragmatic approach testing core output guarantees
//!
//! The encoder has no reader of its own, so the properties are checked
//! against serde_json: relaxed output of JSON-expressible values must parse
//! back to the same value, and any relaxed output must be well-formed JSON.

use proptest::prelude::*;
use serde::Serialize;
use serde_ejson::{to_string, to_string_with_options, EjsonOptions};
use std::collections::BTreeMap;

fn roundtrips_via_json<T: Serialize + for<'de> serde::Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match serde_json::from_str::<T>(&serialized) {
            Ok(parsed) => *value == parsed,
            Err(e) => {
                eprintln!("Parse failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

proptest! {
    // Test primitive types
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrips_via_json(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrips_via_json(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrips_via_json(&b));
    }

    #[test]
    fn prop_finite_f64(n in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        prop_assert!(roundtrips_via_json(&n));
    }

    #[test]
    fn prop_string(s in ".*") {
        prop_assert!(roundtrips_via_json(&s));
    }

    // Test collections
    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrips_via_json(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrips_via_json(&opt));
    }

    #[test]
    fn prop_string_map(m in prop::collection::btree_map(".*", any::<i32>(), 0..10)) {
        prop_assert!(roundtrips_via_json::<BTreeMap<String, i32>>(&m));
    }

    // Every output mode produces well-formed JSON, non-finite doubles included.
    #[test]
    fn prop_all_modes_emit_valid_json(v in prop::collection::vec(any::<f64>(), 0..10)) {
        prop_assert!(is_valid_json(&to_string(&v).unwrap()));
        prop_assert!(is_valid_json(
            &to_string_with_options(&v, EjsonOptions::canonical()).unwrap()
        ));
        prop_assert!(is_valid_json(
            &to_string_with_options(&v, EjsonOptions::pretty()).unwrap()
        ));
        prop_assert!(is_valid_json(
            &to_string_with_options(&v, EjsonOptions::new().with_escape_html(true)).unwrap()
        ));
    }

    // HTML-escaped strings decode back to the original text.
    #[test]
    fn prop_html_escaping_is_lossless(s in ".*") {
        let encoded = to_string_with_options(&s, EjsonOptions::new().with_escape_html(true)).unwrap();
        let decoded: String = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, s);
    }
}
