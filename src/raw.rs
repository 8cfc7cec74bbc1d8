//! Pre-encoded JSON fragment passthrough.
//!
//! [`RawJson`] holds an already-encoded Extended JSON fragment and writes it
//! verbatim, letting callers splice pre-rendered output into a larger
//! document without a decode/re-encode round trip.
//!
//! The fragment is not validated; the caller is responsible for it being
//! well-formed.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use serde_ejson::{to_string, RawJson};
//!
//! #[derive(Serialize)]
//! struct Event {
//!     id: u32,
//!     payload: RawJson,
//! }
//!
//! let event = Event {
//!     id: 7,
//!     payload: RawJson::new(r#"{"cached":true}"#),
//! };
//! assert_eq!(to_string(&event).unwrap(), r#"{"id":7,"payload":{"cached":true}}"#);
//! ```

use serde::{Serialize, Serializer};

// Sentinel newtype-struct name the writer recognizes to switch off escaping
// for the wrapped string.
pub(crate) const TOKEN: &str = "$serde_ejson::private::RawJson";

/// An already-encoded Extended JSON fragment, written verbatim.
///
/// When serialized through a foreign serde serializer the fragment degrades
/// to a plain string; the verbatim passthrough applies to this crate's
/// writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawJson(String);

impl RawJson {
    /// Wraps a pre-encoded fragment.
    pub fn new(fragment: impl Into<String>) -> Self {
        RawJson(fragment.into())
    }

    /// Returns the fragment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the fragment.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for RawJson {
    fn from(fragment: String) -> Self {
        RawJson(fragment)
    }
}

impl From<&str> for RawJson {
    fn from(fragment: &str) -> Self {
        RawJson(fragment.to_string())
    }
}

impl Serialize for RawJson {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(TOKEN, &self.0)
    }
}
