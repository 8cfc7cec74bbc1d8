//! The text-marshal capability and its serde bridges.
//!
//! A type implementing [`MarshalText`] can render itself as a sequence of
//! UTF-8 bytes, or fail. The encoder represents such values as plain string
//! scalars instead of walking their fields.
//!
//! The capability reaches the output two ways:
//!
//! - **Registry dispatch**: registering the type on a
//!   [`Registry`](crate::Registry) makes
//!   [`to_string_with_registry`](crate::to_string_with_registry) encode it
//!   (and its `Box`/`Option` shells) through the text-marshal rule, with
//!   `None` mapping to `null` without invoking the marshaler.
//! - **Field-level dispatch**: the [`Text`] wrapper and the
//!   [`serialize`]/[`serialize_opt`] helpers apply the same rule at any
//!   nesting depth through serde's own dispatch, e.g.
//!   `#[serde(serialize_with = "serde_ejson::text::serialize")]`.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ejson::{to_string, MarshalText, Text};
//!
//! struct Ref;
//!
//! impl MarshalText for Ref {
//!     fn marshal_text(&self) -> Result<Vec<u8>, serde_ejson::BoxError> {
//!         Ok(b"ref".to_vec())
//!     }
//! }
//!
//! assert_eq!(to_string(&Text(Ref)).unwrap(), r#""ref""#);
//! ```

use crate::BoxError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// Capability to render a value as a text representation, or fail.
///
/// The produced bytes must be valid UTF-8; the encoder validates them before
/// writing and performs all necessary escaping itself.
pub trait MarshalText {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError>;
}

impl<T: MarshalText + ?Sized> MarshalText for &T {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        (**self).marshal_text()
    }
}

impl<T: MarshalText + ?Sized> MarshalText for Box<T> {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        (**self).marshal_text()
    }
}

impl MarshalText for DateTime<Utc> {
    /// RFC 3339 with millisecond precision, e.g. `2023-01-01T00:00:00.000Z`.
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Ok(self
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .into_bytes())
    }
}

impl MarshalText for Ipv4Addr {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Ok(self.to_string().into_bytes())
    }
}

impl MarshalText for Ipv6Addr {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Ok(self.to_string().into_bytes())
    }
}

impl MarshalText for IpAddr {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Ok(self.to_string().into_bytes())
    }
}

impl MarshalText for SocketAddr {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Ok(self.to_string().into_bytes())
    }
}

/// Wrapper that serializes its contents through [`MarshalText`].
///
/// Useful at field positions where serde's static dispatch, not the registry,
/// selects the encoder:
///
/// ```rust
/// use serde::Serialize;
/// use serde_ejson::{to_string, Text};
/// use std::net::Ipv4Addr;
///
/// #[derive(Serialize)]
/// struct Peer {
///     addr: Text<Ipv4Addr>,
/// }
///
/// let peer = Peer { addr: Text(Ipv4Addr::new(10, 0, 0, 1)) };
/// assert_eq!(to_string(&peer).unwrap(), r#"{"addr":"10.0.0.1"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text<T>(pub T);

impl<T> Text<T> {
    /// Consumes the wrapper, returning the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: MarshalText> Serialize for Text<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(&self.0, serializer)
    }
}

/// Serializes a [`MarshalText`] value as a string scalar.
///
/// For use with `#[serde(serialize_with = "serde_ejson::text::serialize")]`.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: MarshalText + ?Sized,
    S: Serializer,
{
    let bytes = value.marshal_text().map_err(S::Error::custom)?;
    let text = std::str::from_utf8(&bytes).map_err(S::Error::custom)?;
    serializer.serialize_str(text)
}

/// Serializes an optional [`MarshalText`] value, mapping `None` to `null`
/// without invoking the marshaler.
///
/// For use with `#[serde(serialize_with = "serde_ejson::text::serialize_opt")]`.
pub fn serialize_opt<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: MarshalText,
    S: Serializer,
{
    match value {
        Some(inner) => serialize(inner, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_impls() {
        let addr: IpAddr = "192.168.0.1".parse().unwrap();
        assert_eq!(addr.marshal_text().unwrap(), b"192.168.0.1");

        let sock: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        assert_eq!(sock.marshal_text().unwrap(), b"127.0.0.1:8080");

        let boxed: Box<Ipv4Addr> = Box::new(Ipv4Addr::LOCALHOST);
        assert_eq!(boxed.marshal_text().unwrap(), b"127.0.0.1");
    }

    #[test]
    fn datetime_text_is_rfc3339() {
        use chrono::TimeZone;

        let dt = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        let text = String::from_utf8(dt.marshal_text().unwrap()).unwrap();
        assert_eq!(text, "2023-01-02T03:04:05.000Z");
    }
}
