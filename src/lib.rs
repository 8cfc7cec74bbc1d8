//! # serde_ejson
//!
//! A Serde-compatible serialization library for MongoDB Extended JSON, the
//! textual rendering of BSON documents.
//!
//! ## What is Extended JSON?
//!
//! Extended JSON is a JSON-compatible text format for BSON documents. The
//! **relaxed** mode (the default here) writes plain JSON wherever plain JSON
//! can express the value and falls back to type wrappers only where it cannot
//! (`{"$numberDouble":"NaN"}`, `{"$binary":...}`). The **canonical** mode
//! wraps every number in its BSON type wrapper so the exact wire type
//! survives a round trip.
//!
//! ## Key Features
//!
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize)]`; field naming, visibility and flattening follow
//!   the usual `#[serde(...)]` attributes
//! - **Text-marshal encoding rule**: types implementing [`MarshalText`]
//!   encode as their text representation instead of field by field, either
//!   through a [`Registry`] hook or the [`Text`] field wrapper
//! - **Both output modes**: relaxed and canonical, plus optional
//!   pretty-printing and HTML-safe escaping
//! - **Dynamic values**: build documents at runtime with [`Value`],
//!   [`Document`] and the [`ejson!`] macro
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_ejson = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization
//!
//! ```rust
//! use serde::Serialize;
//! use serde_ejson::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let ejson = to_string(&user).unwrap();
//! assert_eq!(ejson, r#"{"id":123,"name":"Alice","active":true}"#);
//! ```
//!
//! ### The Text-Marshal Rule
//!
//! Any type implementing [`MarshalText`] ("produce a text representation, or
//! fail") can be encoded as a string scalar. Register it on a [`Registry`] to
//! intercept whole values, including their `Box`/`Option` shells; a `None`
//! encodes as `null` without the marshaler ever being invoked:
//!
//! ```rust
//! use serde_ejson::{to_string_with_registry, BoxError, MarshalText, Registry};
//!
//! #[derive(serde::Serialize)]
//! struct Ref;
//!
//! impl MarshalText for Ref {
//!     fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
//!         Ok(b"ref".to_vec())
//!     }
//! }
//!
//! let registry = Registry::builder().text_marshaler::<Ref>().build();
//! assert_eq!(to_string_with_registry(&registry, &Ref).unwrap(), r#""ref""#);
//! assert_eq!(to_string_with_registry(&registry, &None::<Ref>).unwrap(), "null");
//! ```
//!
//! At field positions, use the [`Text`] wrapper or
//! `#[serde(serialize_with = "serde_ejson::text::serialize")]`.
//!
//! ### Dynamic Values with the ejson! Macro
//!
//! ```rust
//! use serde_ejson::{ejson, to_string, Value};
//!
//! let data = ejson!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! assert_eq!(
//!     to_string(&data).unwrap(),
//!     r#"{"name":"Alice","age":30,"tags":["rust","serde"]}"#
//! );
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - No panics in public API (except for logic errors that indicate bugs)

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod raw;
pub mod registry;
pub mod ser;
pub mod text;
pub mod value;

pub use error::{BoxError, Error, Result};
pub use map::Document;
pub use options::EjsonOptions;
pub use raw::RawJson;
pub use registry::{AnyValue, Registry, RegistryBuilder};
pub use ser::{Serializer, ValueSerializer};
pub use text::{MarshalText, Text};
pub use value::Value;

use serde::Serialize;
use std::any::Any;
use std::io;
use std::sync::OnceLock;

/// Returns the process-wide default registry.
///
/// Built exactly once, on first use, and immutable afterwards; concurrent
/// encode calls share it read-only. It carries no type hooks of its own, so
/// encoding through it is pure structural encoding; build a custom
/// [`Registry`] to layer text-marshal hooks on top.
pub fn default_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| Registry::builder().build())
}

/// Serialize any `T: Serialize` to a relaxed Extended JSON string.
///
/// Uses the fixed defaults: relaxed mode, no indentation.
///
/// # Examples
///
/// ```rust
/// use serde_ejson::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g., unsupported
/// values or a failing text marshaler).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EjsonOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed relaxed Extended JSON
/// string.
///
/// # Examples
///
/// ```rust
/// use serde_ejson::to_string_pretty;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let ejson = to_string_pretty(&point).unwrap();
/// assert_eq!(ejson, "{\n  \"x\": 1,\n  \"y\": 2\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EjsonOptions::pretty())
}

/// Serialize any `T: Serialize` to an Extended JSON string with custom
/// options.
///
/// # Examples
///
/// ```rust
/// use serde_ejson::{to_string_with_options, EjsonOptions};
///
/// let ejson = to_string_with_options(&42i64, EjsonOptions::canonical()).unwrap();
/// assert_eq!(ejson, r#"{"$numberLong":"42"}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EjsonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to a relaxed Extended JSON byte vector.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    Ok(to_string(value)?.into_bytes())
}

/// Serialize any `T: Serialize` through a [`Registry`], consulting its hook
/// encoders before falling back to structural encoding.
///
/// Uses the fixed defaults: relaxed mode, no indentation. For custom output
/// modes use [`Registry::encode_to_string`] directly.
///
/// # Errors
///
/// Returns an error if a hook or the structural encoder fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_registry<T>(registry: &Registry, value: &T) -> Result<String>
where
    T: Serialize + Any,
{
    registry.encode_to_string(value, EjsonOptions::default())
}

/// Serialize any `T: Serialize` through a [`Registry`] to a byte vector.
///
/// # Errors
///
/// Returns an error if a hook or the structural encoder fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_registry<T>(registry: &Registry, value: &T) -> Result<Vec<u8>>
where
    T: Serialize + Any,
{
    Ok(to_string_with_registry(registry, value)?.into_bytes())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for working with documents dynamically when the structure isn't
/// known at compile time.
///
/// # Examples
///
/// ```rust
/// use serde_ejson::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_document());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as relaxed Extended JSON.
///
/// # Examples
///
/// ```rust
/// use serde_ejson::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &point).unwrap();
/// assert_eq!(buffer, br#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EjsonOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EjsonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let ejson_string = to_string_with_options(value, options)?;
    writer
        .write_all(ejson_string.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_point() {
        let point = Point { x: 1, y: 2 };
        assert_eq!(to_string(&point).unwrap(), r#"{"x":1,"y":2}"#);
    }

    #[test]
    fn test_serialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        assert_eq!(
            to_string(&user).unwrap(),
            r#"{"id":123,"name":"Alice","active":true,"tags":["admin","user"]}"#
        );
    }

    #[test]
    fn test_pretty_printing() {
        let point = Point { x: 1, y: 2 };
        let pretty = to_string_pretty(&point).unwrap();
        assert_eq!(pretty, "{\n  \"x\": 1,\n  \"y\": 2\n}");
    }

    #[test]
    fn test_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            Value::Document(doc) => {
                assert_eq!(doc.get("x"), Some(&Value::Int32(1)));
                assert_eq!(doc.get("y"), Some(&Value::Int32(2)));
            }
            _ => panic!("Expected document"),
        }
    }

    #[test]
    fn test_arrays() {
        let numbers = vec![1, 2, 3, 4, 5];
        assert_eq!(to_string(&numbers).unwrap(), "[1,2,3,4,5]");
        let empty: Vec<i32> = vec![];
        assert_eq!(to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn test_default_registry_is_shared_and_structural() {
        let first = default_registry() as *const Registry;
        let second = default_registry() as *const Registry;
        assert_eq!(first, second);

        let point = Point { x: 1, y: 2 };
        assert_eq!(
            to_string_with_registry(default_registry(), &point).unwrap(),
            to_string(&point).unwrap()
        );
    }

    #[test]
    fn test_to_writer() {
        let point = Point { x: 1, y: 2 };
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &point).unwrap();
        assert_eq!(buffer, br#"{"x":1,"y":2}"#.to_vec());
    }
}
