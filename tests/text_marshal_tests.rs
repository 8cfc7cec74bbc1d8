//! Behavior of the text-marshal encoding rule: registry dispatch, the
//! nil-pointer null rule, error propagation, and structural fallthrough.

use serde::Serialize;
use serde_ejson::{
    to_string, to_string_with_registry, BoxError, Error, MarshalText, Registry, Text,
};
use std::fmt;

#[derive(Clone, Serialize)]
struct Ref;

impl MarshalText for Ref {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Ok(b"ref".to_vec())
    }
}

#[derive(Debug)]
struct MarshalFailed;

impl fmt::Display for MarshalFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marshal deliberately failed")
    }
}

impl std::error::Error for MarshalFailed {}

#[derive(Serialize)]
struct Failing;

impl MarshalText for Failing {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Err(Box::new(MarshalFailed))
    }
}

/// Panics if the marshaler is ever invoked; used to prove the null path
/// never calls it.
#[derive(Serialize)]
struct Explosive;

impl MarshalText for Explosive {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        panic!("marshal_text invoked for an absent value");
    }
}

#[derive(Serialize, Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

fn ref_registry() -> Registry {
    Registry::builder().text_marshaler::<Ref>().build()
}

#[test]
fn registered_value_encodes_as_quoted_text() {
    let registry = ref_registry();
    assert_eq!(to_string_with_registry(&registry, &Ref).unwrap(), r#""ref""#);
}

#[test]
fn pointer_shells_encode_like_the_value() {
    let registry = ref_registry();
    assert_eq!(
        to_string_with_registry(&registry, &Box::new(Ref)).unwrap(),
        r#""ref""#
    );
    assert_eq!(
        to_string_with_registry(&registry, &Some(Ref)).unwrap(),
        r#""ref""#
    );
    assert_eq!(
        to_string_with_registry(&registry, &Some(Box::new(Ref))).unwrap(),
        r#""ref""#
    );
}

#[test]
fn produced_text_is_escaped_by_the_writer() {
    #[derive(Serialize)]
    struct Quoted;
    impl MarshalText for Quoted {
        fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
            Ok(b"say \"hi\"\n".to_vec())
        }
    }

    let registry = Registry::builder().text_marshaler::<Quoted>().build();
    assert_eq!(
        to_string_with_registry(&registry, &Quoted).unwrap(),
        r#""say \"hi\"\n""#
    );
}

#[test]
fn absent_value_encodes_as_null_without_invoking_the_marshaler() {
    let registry = Registry::builder().text_marshaler::<Explosive>().build();

    assert_eq!(
        to_string_with_registry(&registry, &None::<Explosive>).unwrap(),
        "null"
    );
    assert_eq!(
        to_string_with_registry(&registry, &None::<Box<Explosive>>).unwrap(),
        "null"
    );
}

#[test]
fn marshal_failure_propagates_as_the_encoding_error() {
    let registry = Registry::builder().text_marshaler::<Failing>().build();
    let err = to_string_with_registry(&registry, &Failing).unwrap_err();

    match &err {
        Error::TextMarshal(_) => {}
        other => panic!("expected TextMarshal, got {other:?}"),
    }
    // The original failure is preserved unchanged as the source.
    let source = std::error::Error::source(&err).expect("source");
    assert!(source.downcast_ref::<MarshalFailed>().is_some());
}

#[test]
fn unregistered_types_fall_through_to_structural_encoding() {
    let registry = ref_registry();
    let point = Point { x: 1, y: 2 };

    assert_eq!(
        to_string_with_registry(&registry, &point).unwrap(),
        to_string(&point).unwrap()
    );
    assert_eq!(
        to_string_with_registry(&registry, &vec![1, 2, 3]).unwrap(),
        "[1,2,3]"
    );
}

#[test]
fn double_registration_does_not_change_output() {
    let once = ref_registry();
    let twice = Registry::builder()
        .text_marshaler::<Ref>()
        .text_marshaler::<Ref>()
        .build();

    assert_eq!(
        to_string_with_registry(&once, &Ref).unwrap(),
        to_string_with_registry(&twice, &Ref).unwrap()
    );

    let point = Point { x: 3, y: 4 };
    assert_eq!(
        to_string_with_registry(&twice, &point).unwrap(),
        to_string(&point).unwrap()
    );
}

#[test]
fn ref_in_a_string_field_end_to_end() {
    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "serde_ejson::text::serialize")]
        reference: Ref,
        #[serde(serialize_with = "serde_ejson::text::serialize_opt")]
        missing: Option<Ref>,
    }

    let wrapper = Wrapper {
        reference: Ref,
        missing: None,
    };
    assert_eq!(
        to_string(&wrapper).unwrap(),
        r#"{"reference":"ref","missing":null}"#
    );
}

#[test]
fn text_wrapper_applies_the_rule_at_field_positions() {
    use std::net::Ipv4Addr;

    #[derive(Serialize)]
    struct Peer {
        name: String,
        addr: Text<Ipv4Addr>,
        backup: Option<Text<Ipv4Addr>>,
    }

    let peer = Peer {
        name: "a".to_string(),
        addr: Text(Ipv4Addr::new(10, 0, 0, 1)),
        backup: None,
    };
    assert_eq!(
        to_string(&peer).unwrap(),
        r#"{"name":"a","addr":"10.0.0.1","backup":null}"#
    );
}

#[test]
fn text_wrapper_failure_surfaces_to_the_caller() {
    let err = to_string(&Text(Failing)).unwrap_err();
    assert!(err.to_string().contains("marshal deliberately failed"));
}

#[test]
fn provided_marshalers_work_through_the_registry() {
    use chrono::{TimeZone, Utc};
    use std::net::IpAddr;

    let registry = Registry::builder()
        .text_marshaler::<IpAddr>()
        .text_marshaler::<chrono::DateTime<Utc>>()
        .build();

    let addr: IpAddr = "192.168.0.1".parse().unwrap();
    assert_eq!(
        to_string_with_registry(&registry, &addr).unwrap(),
        r#""192.168.0.1""#
    );

    let dt = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(
        to_string_with_registry(&registry, &dt).unwrap(),
        r#""2023-01-02T03:04:05.000Z""#
    );
}
