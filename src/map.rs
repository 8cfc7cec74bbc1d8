//! Insertion-ordered map type backing [`Value::Document`](crate::Value).
//!
//! A BSON document is an ordered sequence of fields, not a hash table, so
//! the dynamic model cannot use `HashMap`: field order is part of the data
//! and must survive construction, iteration and writing. [`Document`] wraps
//! [`IndexMap`] to get exactly that — fields come back out in the order
//! they went in, and the writer emits them in that order.
//!
//! ```rust
//! use serde_ejson::{to_string, Document, Value};
//!
//! let mut doc = Document::new();
//! doc.insert("_id".to_string(), Value::from(7));
//! doc.insert("status".to_string(), Value::from("open"));
//!
//! assert_eq!(to_string(&doc).unwrap(), r#"{"_id":7,"status":"open"}"#);
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// An insertion-ordered map of string keys to [`Value`](crate::Value)s,
/// matching BSON's ordered-document semantics.
///
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position, so a document's field order is stable under updates.
///
/// # Examples
///
/// ```rust
/// use serde_ejson::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.insert("first".to_string(), Value::from(1));
/// doc.insert("second".to_string(), Value::from(2));
/// doc.insert("first".to_string(), Value::from(10));
///
/// let keys: Vec<_> = doc.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(doc.get("first").and_then(|v| v.as_i64()), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document(IndexMap<String, crate::Value>);

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    /// Creates an empty document with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field, returning the previous value if the key was present.
    ///
    /// An existing key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Removes a field, returning its value if the key was present.
    ///
    /// The relative order of the remaining fields is preserved.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns the value for `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ejson::{Document, Value};
    ///
    /// let mut doc = Document::new();
    /// doc.insert("n".to_string(), Value::from(42));
    /// assert_eq!(doc.get("n").and_then(|v| v.as_i64()), Some(42));
    /// assert!(doc.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the document has a field named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// Converting from a HashMap gives up any meaningful order; fields land in
// the hash map's iteration order.
impl From<HashMap<String, crate::Value>> for Document {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        Document(map.into_iter().collect())
    }
}

impl From<Document> for HashMap<String, crate::Value> {
    fn from(doc: Document) -> Self {
        doc.0.into_iter().collect()
    }
}

impl IntoIterator for Document {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Document(IndexMap::from_iter(iter))
    }
}
