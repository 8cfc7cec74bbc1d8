//! Extended JSON scalar forms: relaxed vs canonical numbers, non-finite
//! doubles, `$date`/`$binary` wrappers, and raw fragment passthrough.

use serde::Serialize;
use serde_ejson::{
    ejson, to_string, to_string_with_options, EjsonOptions, Error, RawJson, Value,
};

#[test]
fn relaxed_whole_doubles_keep_a_fraction() {
    // A double that happens to be whole must not collapse into an integer.
    assert_eq!(to_string(&1.0f64).unwrap(), "1.0");
    assert_eq!(to_string(&-3.0f64).unwrap(), "-3.0");
    assert_eq!(to_string(&vec![1.0f64, 2.5, 0.0]).unwrap(), "[1.0,2.5,0.0]");
}

#[test]
fn large_whole_doubles_keep_a_fraction() {
    // Whole doubles past 2^53 still carry the fraction marker; without it the
    // token reads back as an integer and the double wire type is lost.
    assert_eq!(to_string(&1.0e15).unwrap(), "1000000000000000.0");
    assert_eq!(to_string(&1.0e16).unwrap(), "10000000000000000.0");
    assert_eq!(to_string(&-1.0e16).unwrap(), "-10000000000000000.0");

    let reparsed: serde_json::Value = serde_json::from_str(&to_string(&1.0e15).unwrap()).unwrap();
    assert!(reparsed.is_f64());
}

#[test]
fn nonfinite_doubles_are_wrapped_even_in_relaxed_mode() {
    assert_eq!(
        to_string(&f64::NAN).unwrap(),
        r#"{"$numberDouble":"NaN"}"#
    );
    assert_eq!(
        to_string(&f64::INFINITY).unwrap(),
        r#"{"$numberDouble":"Infinity"}"#
    );
    assert_eq!(
        to_string(&f64::NEG_INFINITY).unwrap(),
        r#"{"$numberDouble":"-Infinity"}"#
    );
}

#[test]
fn canonical_numbers_carry_type_wrappers() {
    fn canonical<T: Serialize>(value: &T) -> String {
        to_string_with_options(value, EjsonOptions::canonical()).unwrap()
    }

    assert_eq!(canonical(&5i32), r#"{"$numberInt":"5"}"#);
    assert_eq!(canonical(&5i64), r#"{"$numberLong":"5"}"#);
    // u32 may exceed i32, so it widens to $numberLong.
    assert_eq!(canonical(&5u32), r#"{"$numberLong":"5"}"#);
    assert_eq!(canonical(&2.5f64), r#"{"$numberDouble":"2.5"}"#);
    assert_eq!(canonical(&1.0f64), r#"{"$numberDouble":"1.0"}"#);
}

#[test]
fn u64_beyond_i64_range_is_rejected() {
    assert_eq!(
        to_string(&(i64::MAX as u64)).unwrap(),
        i64::MAX.to_string()
    );

    let err = to_string(&u64::MAX).unwrap_err();
    assert!(matches!(err, Error::UnsupportedValue(_)));
    assert!(err.to_string().contains("i64 range"));
}

#[test]
fn datetime_value_uses_the_date_wrapper() {
    use chrono::{TimeZone, Utc};

    let dt = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(
        to_string(&Value::DateTime(dt)).unwrap(),
        r#"{"$date":"2023-01-02T03:04:05.000Z"}"#
    );
}

#[test]
fn binary_value_uses_the_binary_wrapper() {
    assert_eq!(
        to_string(&Value::Binary(vec![1, 2, 3])).unwrap(),
        r#"{"$binary":{"base64":"AQID","subType":"00"}}"#
    );
    assert_eq!(
        to_string(&Value::Binary(vec![])).unwrap(),
        r#"{"$binary":{"base64":"","subType":"00"}}"#
    );
}

#[test]
fn serialize_bytes_matches_the_binary_wrapper() {
    struct Blob(&'static [u8]);

    impl Serialize for Blob {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_bytes(self.0)
        }
    }

    assert_eq!(
        to_string(&Blob(b"hello")).unwrap(),
        r#"{"$binary":{"base64":"aGVsbG8=","subType":"00"}}"#
    );
}

#[test]
fn canonical_wrappers_stay_compact_in_pretty_mode() {
    #[derive(Serialize)]
    struct Reading {
        sensor: i32,
        value: f64,
    }

    let options = EjsonOptions::canonical().with_pretty(true);
    let reading = Reading {
        sensor: 7,
        value: 0.5,
    };
    assert_eq!(
        to_string_with_options(&reading, options).unwrap(),
        "{\n  \"sensor\": {\"$numberInt\":\"7\"},\n  \"value\": {\"$numberDouble\":\"0.5\"}\n}"
    );
}

#[test]
fn raw_fragment_passes_through_verbatim() {
    let fragment = r#"{"cached":true,"n":1.0}"#;
    assert_eq!(to_string(&RawJson::new(fragment)).unwrap(), fragment);

    #[derive(Serialize)]
    struct Envelope {
        id: u32,
        payload: RawJson,
    }

    let envelope = Envelope {
        id: 9,
        payload: RawJson::new(r#"[1,2,3]"#),
    };
    assert_eq!(
        to_string(&envelope).unwrap(),
        r#"{"id":9,"payload":[1,2,3]}"#
    );

    // Strings around the fragment still go through normal escaping.
    let pair = (RawJson::new("{}"), "a\"b");
    assert_eq!(to_string(&pair).unwrap(), r#"[{},"a\"b"]"#);
}

#[test]
fn dynamic_documents_encode_in_both_modes() {
    let doc = ejson!({
        "count": 3,
        "total": 1.5,
        "name": "x"
    });

    assert_eq!(
        to_string(&doc).unwrap(),
        r#"{"count":3,"total":1.5,"name":"x"}"#
    );
    assert_eq!(
        to_string_with_options(&doc, EjsonOptions::canonical()).unwrap(),
        r#"{"count":{"$numberInt":"3"},"total":{"$numberDouble":"1.5"},"name":"x"}"#
    );
}
