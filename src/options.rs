//! Configuration options for Extended JSON serialization.
//!
//! This module provides [`EjsonOptions`], the configuration struct controlling
//! output mode and formatting:
//!
//! - **Canonical vs. relaxed**: canonical mode wraps every number in its BSON
//!   type wrapper (`{"$numberInt": "42"}`); relaxed mode writes plain JSON
//!   numbers wherever the value survives the round trip
//! - **Pretty-printing**: newlines and indentation for readability
//! - **HTML escaping**: escape `<`, `>` and `&` for safe embedding in HTML
//!
//! ## Examples
//!
//! ```rust
//! use serde_ejson::{EjsonOptions, to_string_with_options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! // Canonical Extended JSON
//! let options = EjsonOptions::canonical();
//! let ejson = to_string_with_options(&data, options).unwrap();
//! assert_eq!(ejson, r#"{"x":{"$numberInt":"1"},"y":{"$numberInt":"2"}}"#);
//!
//! // Pretty-printed relaxed output
//! let options = EjsonOptions::pretty();
//! let ejson = to_string_with_options(&data, options).unwrap();
//! ```

/// Configuration options for Extended JSON serialization.
///
/// The defaults match the plain [`to_string`](crate::to_string) entry point:
/// relaxed mode, compact output, no HTML escaping.
///
/// # Examples
///
/// ```rust
/// use serde_ejson::EjsonOptions;
///
/// // Default relaxed, compact output
/// let options = EjsonOptions::new();
///
/// // Pretty-printed with 2-space indentation
/// let options = EjsonOptions::pretty();
///
/// // Custom configuration
/// let options = EjsonOptions::new()
///     .with_canonical(true)
///     .with_escape_html(true)
///     .with_indent(4);
/// ```
#[derive(Clone, Debug)]
pub struct EjsonOptions {
    pub canonical: bool,
    pub pretty: bool,
    pub indent: usize,
    pub escape_html: bool,
}

impl Default for EjsonOptions {
    fn default() -> Self {
        EjsonOptions {
            canonical: false,
            pretty: false,
            indent: 2,
            escape_html: false,
        }
    }
}

impl EjsonOptions {
    /// Creates default options (relaxed mode, compact output, 2-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::EjsonOptions;
    ///
    /// let options = EjsonOptions::new();
    /// assert!(!options.canonical);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for canonical Extended JSON output.
    ///
    /// Canonical mode preserves BSON type information by wrapping numbers in
    /// their type wrappers (`$numberInt`, `$numberLong`, `$numberDouble`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::EjsonOptions;
    ///
    /// let options = EjsonOptions::canonical();
    /// assert!(options.canonical);
    /// ```
    #[must_use]
    pub fn canonical() -> Self {
        EjsonOptions {
            canonical: true,
            ..Default::default()
        }
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::EjsonOptions;
    ///
    /// let options = EjsonOptions::pretty();
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        EjsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Enables or disables canonical mode.
    #[must_use]
    pub fn with_canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    /// Enables or disables pretty-printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::EjsonOptions;
    ///
    /// let options = EjsonOptions::pretty().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables HTML-safe escaping of `<`, `>`, `&`, U+2028 and
    /// U+2029 inside strings.
    ///
    /// Off by default. The escaped output decodes to the same string.
    #[must_use]
    pub fn with_escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }
}
