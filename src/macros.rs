//! The [`ejson!`] macro for building [`Value`](crate::Value) trees from
//! Extended JSON literals.

/// Builds a [`Value`](crate::Value) from an Extended JSON literal.
///
/// Scalars, arrays and documents follow JSON literal syntax. The wrapper
/// scalars Extended JSON adds on top of JSON are recognized as single-entry
/// documents: `{"$date": expr}` takes a `chrono::DateTime<Utc>` and produces
/// [`Value::DateTime`](crate::Value::DateTime), `{"$binary": expr}` takes
/// bytes and produces [`Value::Binary`](crate::Value::Binary).
///
/// ```rust
/// use serde_ejson::{ejson, to_string};
///
/// let doc = ejson!({
///     "name": "Alice",
///     "roles": ["admin", "ops"],
///     "avatar": {"$binary": vec![1u8, 2, 3]}
/// });
/// assert_eq!(
///     to_string(&doc).unwrap(),
///     r#"{"name":"Alice","roles":["admin","ops"],"avatar":{"$binary":{"base64":"AQID","subType":"00"}}}"#
/// );
/// ```
///
/// Any other expression position falls back to
/// [`to_value`](crate::to_value), so anything `Serialize` can appear inline.
#[macro_export]
macro_rules! ejson {
    (null) => {
        $crate::Value::Null
    };
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };

    // Wrapper scalars. These arms must precede the generic document arm so
    // the single-entry form keeps its BSON type instead of becoming a
    // document with a literal "$date"/"$binary" field.
    ({ "$date" : $value:expr }) => {
        $crate::Value::DateTime($value)
    };
    ({ "$binary" : $value:expr }) => {
        $crate::Value::Binary($value.into())
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::ejson!($elem)),*])
    };

    ({}) => {
        $crate::Value::Document($crate::Document::new())
    };
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut document = $crate::Document::new();
        $(
            document.insert($key.to_string(), $crate::ejson!($value));
        )*
        $crate::Value::Document(document)
    }};

    // Anything else is an expression serialized through the dynamic model.
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
