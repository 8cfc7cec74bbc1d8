//! Error types for Extended JSON serialization.
//!
//! This module provides the crate-wide [`Error`] enum with contextual
//! information for every failure mode the encoder can hit.
//!
//! ## Error Categories
//!
//! - **No-encoder errors**: a registry hook was asked to encode a value whose
//!   type it does not support; carries the rule name, the candidate types the
//!   rule tried, and the type of the value it received
//! - **Text-marshal failures**: a [`MarshalText`](crate::MarshalText)
//!   implementation reported an error; the original error is preserved as the
//!   source and can be recovered via [`std::error::Error::source`]
//! - **Writer errors**: unsupported values, non-string document keys, invalid
//!   UTF-8 from a text marshaler
//! - **I/O errors**: failures while writing to an output stream
//!
//! ## Examples
//!
//! ```rust
//! use serde_ejson::{to_string, Error};
//!
//! let result: Result<String, Error> = to_string(&u64::MAX);
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Encode error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// A boxed error returned by [`MarshalText`](crate::MarshalText) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Represents all possible errors that can occur during Extended JSON encoding.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error while writing serialized output
    #[error("IO error: {0}")]
    Io(String),

    /// A registry hook encoder received a value of a type it cannot encode
    #[error("no encoder found: rule {rule} tried {tried:?}, received a value of type {received}")]
    NoEncoder {
        rule: &'static str,
        tried: Vec<&'static str>,
        received: &'static str,
    },

    /// A text marshaler reported a failure; the original error is the source
    #[error("text marshaling failed: {0}")]
    TextMarshal(#[source] BoxError),

    /// A text marshaler produced bytes that are not valid UTF-8
    #[error("text produced by {type_name} is not valid UTF-8")]
    InvalidUtf8 { type_name: &'static str },

    /// A document key serialized to something that cannot become a string
    #[error("document keys must be strings, chars, or integers, got {0}")]
    InvalidKey(String),

    /// Unsupported type or value for Extended JSON output
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// Custom error
    #[error("error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a no-encoder error identifying the rule, the candidate types it
    /// tried, and the type of the value it actually received.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::Error;
    ///
    /// let err = Error::no_encoder("encode_text_value", vec!["Ref"], "i32");
    /// assert!(err.to_string().contains("encode_text_value"));
    /// assert!(err.to_string().contains("i32"));
    /// ```
    pub fn no_encoder(
        rule: &'static str,
        tried: Vec<&'static str>,
        received: &'static str,
    ) -> Self {
        Error::NoEncoder {
            rule,
            tried,
            received,
        }
    }

    /// Wraps a failure reported by a [`MarshalText`](crate::MarshalText)
    /// implementation. The wrapped error is preserved unchanged as the source.
    pub fn text_marshal(source: BoxError) -> Self {
        Error::TextMarshal(source)
    }

    /// Creates an invalid-UTF-8 error naming the offending marshaler type.
    pub fn invalid_utf8(type_name: &'static str) -> Self {
        Error::InvalidUtf8 { type_name }
    }

    /// Creates an invalid-key error for a non-string document key.
    pub fn invalid_key(found: impl fmt::Display) -> Self {
        Error::InvalidKey(found.to_string())
    }

    /// Creates an unsupported-value error for values Extended JSON cannot express.
    pub fn unsupported_value(msg: impl fmt::Display) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for output writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
