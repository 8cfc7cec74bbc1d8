//! Dynamic value representation for Extended JSON data.
//!
//! This module provides the [`Value`] enum which represents any BSON value the
//! textual encoding can express. It's useful for building documents when the
//! structure isn't known at compile time.
//!
//! ## Core Types
//!
//! - [`Value`]: an enum representing any value (null, bool, int32, int64,
//!   double, string, array, document, datetime, binary)
//! - [`Document`](crate::Document): the ordered string-keyed map used for the
//!   document variant
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_ejson::Value;
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the ejson! macro
//! use serde_ejson::ejson;
//! let doc = ejson!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use serde_ejson::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.as_i64(), Some(42));
//! assert!(!value.is_string());
//! ```
//!
//! ### Converting from Rust Types
//!
//! ```rust
//! use serde_ejson::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 10, y: 20 };
//! let value: Value = to_value(&point).unwrap();
//!
//! if let Value::Document(doc) = value {
//!     assert_eq!(doc.len(), 2);
//! }
//! ```

use crate::Document;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// A dynamically-typed representation of any Extended JSON value.
///
/// Numeric values keep their BSON type: `Int32`, `Int64` and `Double` are
/// distinct variants, so a round trip through canonical mode preserves the
/// wire type.
///
/// # Examples
///
/// ```rust
/// use serde_ejson::Value;
///
/// let null = Value::Null;
/// let num = Value::Int32(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Document(Document),
    DateTime(DateTime<Utc>),
    Binary(Vec<u8>),
}

impl Value {
    /// Returns `true` if this value is `Null`.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this value is any numeric variant
    /// (`Int32`, `Int64` or `Double`).
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Int32(_) | Value::Int64(_) | Value::Double(_))
    }

    /// Returns `true` if this value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if this value is a document.
    #[inline]
    #[must_use]
    pub const fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    /// Returns the boolean if this value is a `Bool`.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts this value to an `i64` if it is an integer variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::Value;
    ///
    /// assert_eq!(Value::Int32(42).as_i64(), Some(42));
    /// assert_eq!(Value::Int64(42).as_i64(), Some(42));
    /// assert_eq!(Value::Double(42.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(i) => Some(*i as i64),
            Value::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Converts this value to an `f64` if it is any numeric variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::Value;
    ///
    /// assert_eq!(Value::Int32(42).as_f64(), Some(42.0));
    /// assert_eq!(Value::Double(3.5).as_f64(), Some(3.5));
    /// assert_eq!(Value::Null.as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int32(i) => Some(*i as f64),
            Value::Int64(i) => Some(*i as f64),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a `String`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array slice if this value is an `Array`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the document if this value is a `Document`.
    #[inline]
    #[must_use]
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the datetime if this value is a `DateTime`.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns the byte slice if this value is a `Binary`.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }
}

#[derive(serde::Serialize)]
struct BinaryBody {
    base64: String,
    #[serde(rename = "subType")]
    sub_type: &'static str,
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int32(i) => serializer.serialize_i32(*i),
            Value::Int64(i) => serializer.serialize_i64(*i),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for elem in arr {
                    seq.serialize_element(elem)?;
                }
                seq.end()
            }
            Value::Document(doc) => doc.serialize(serializer),
            Value::DateTime(dt) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$date", &dt.to_rfc3339_opts(SecondsFormat::Millis, true))?;
                map.end()
            }
            Value::Binary(bytes) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(
                    "$binary",
                    &BinaryBody {
                        base64: STANDARD.encode(bytes),
                        sub_type: "00",
                    },
                )?;
                map.end()
            }
        }
    }
}

impl fmt::Display for Value {
    /// Formats the value as compact relaxed Extended JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i8> for Value {
    fn from(i: i8) -> Self {
        Value::Int32(i as i32)
    }
}

impl From<i16> for Value {
    fn from(i: i16) -> Self {
        Value::Int32(i as i32)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int32(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int64(i)
    }
}

impl From<u8> for Value {
    fn from(i: u8) -> Self {
        Value::Int32(i as i32)
    }
}

impl From<u16> for Value {
    fn from(i: u16) -> Self {
        Value::Int32(i as i32)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int64(i as i64)
    }
}

impl From<f32> for Value {
    fn from(d: f32) -> Self {
        Value::Double(d as f64)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Document(doc)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::from(7u16), Value::Int32(7));
        assert_eq!(Value::from(7u32), Value::Int64(7));
        assert_eq!(Value::Int32(7).as_i64(), Some(7));
        assert_eq!(Value::Double(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::Int64(3));
    }

    #[test]
    fn display_is_relaxed_ejson() {
        let value = Value::Array(vec![Value::Int32(1), Value::from("a")]);
        assert_eq!(value.to_string(), r#"[1,"a"]"#);
    }
}
