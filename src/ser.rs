//! Extended JSON serialization.
//!
//! This module provides the [`Serializer`] implementation that converts Rust
//! data structures into textual BSON (MongoDB Extended JSON) strings.
//!
//! ## Overview
//!
//! The serializer supports both Extended JSON output modes:
//!
//! - **Relaxed** (default): plain JSON numbers for integers and finite
//!   doubles; type wrappers only where plain JSON cannot express the value
//!   (`{"$numberDouble":"NaN"}`, `{"$binary":...}`)
//! - **Canonical**: every number carries its BSON type wrapper, so the exact
//!   wire type survives a round trip
//!
//! Structs and maps are written field by field in declaration/iteration
//! order; serde attributes (`rename`, `skip_serializing_if`, `flatten`, ...)
//! drive field naming and visibility.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_ejson::{to_string, to_string_with_options, EjsonOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: f64 }
//!
//! let data = Data { x: 1, y: 2.5 };
//!
//! let relaxed = to_string(&data).unwrap();
//! assert_eq!(relaxed, r#"{"x":1,"y":2.5}"#);
//!
//! let canonical = to_string_with_options(&data, EjsonOptions::canonical()).unwrap();
//! assert_eq!(canonical, r#"{"x":{"$numberInt":"1"},"y":{"$numberDouble":"2.5"}}"#);
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_ejson::{EjsonOptions, Serializer};
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new(EjsonOptions::new());
//! vec![1, 2, 3].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "[1,2,3]");
//! ```

use crate::{Document, EjsonOptions, Error, Result, Value};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{ser, Serialize};

/// The Extended JSON serializer.
///
/// Converts Rust values implementing `Serialize` into Extended JSON strings.
/// Created via [`Serializer::new`] with customizable options.
pub struct Serializer {
    output: String,
    options: EjsonOptions,
    indent_level: usize,
    raw_next: bool,
}

impl Serializer {
    pub fn new(options: EjsonOptions) -> Self {
        // 256 bytes covers most small documents without reallocating
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
            raw_next: false,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes a `null` scalar.
    ///
    /// Part of the value-writer surface used by registry hook encoders.
    pub fn write_null(&mut self) {
        self.output.push_str("null");
    }

    /// Writes an escaped string scalar.
    ///
    /// Part of the value-writer surface used by registry hook encoders. The
    /// writer owns all escaping; callers pass unescaped text.
    pub fn write_string(&mut self, s: &str) {
        self.write_escaped(s);
    }

    fn write_escaped(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if (c as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04x}", c as u32));
                }
                '<' | '>' | '&' if self.options.escape_html => {
                    self.output.push_str(&format!("\\u{:04x}", ch as u32));
                }
                // Valid JSON but not valid JavaScript; escaped alongside HTML
                '\u{2028}' | '\u{2029}' if self.options.escape_html => {
                    self.output.push_str(&format!("\\u{:04x}", ch as u32));
                }
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent_level * self.options.indent {
            self.output.push(' ');
        }
    }

    fn open(&mut self, c: char) {
        self.output.push(c);
        self.indent_level += 1;
    }

    fn close(&mut self, c: char, nonempty: bool) {
        self.indent_level -= 1;
        if self.options.pretty && nonempty {
            self.output.push('\n');
            self.push_indent();
        }
        self.output.push(c);
    }

    fn entry_prefix(&mut self, first: &mut bool) {
        if !*first {
            self.output.push(',');
        }
        *first = false;
        if self.options.pretty {
            self.output.push('\n');
            self.push_indent();
        }
    }

    fn write_key(&mut self, key: &str) {
        self.write_escaped(key);
        self.output.push(':');
        if self.options.pretty {
            self.output.push(' ');
        }
    }

    // Type wrappers are atomic scalars; they stay compact even in pretty mode.
    fn write_wrapped(&mut self, key: &str, payload: &str) {
        self.output.push_str("{\"");
        self.output.push_str(key);
        self.output.push_str("\":\"");
        self.output.push_str(payload);
        self.output.push_str("\"}");
    }

    fn write_i64(&mut self, v: i64, wrapper: &str) -> Result<()> {
        if self.options.canonical {
            self.write_wrapped(wrapper, &v.to_string());
        } else {
            self.output.push_str(&v.to_string());
        }
        Ok(())
    }
}

/// Formats a double the way relaxed Extended JSON expects: finite values use
/// the shortest decimal form that round-trips, keeping a `.0` so whole numbers
/// stay doubles; non-finite values get their Extended JSON names.
pub(crate) fn format_double(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if v == v.trunc() {
        // Fixed-point formatting is exact for every whole f64, regardless of
        // magnitude.
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

fn key_string(value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Int32(i) => Ok(i.to_string()),
        Value::Int64(i) => Ok(i.to_string()),
        other => Err(Error::invalid_key(format!("{:?}", other))),
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = VariantSeqSerializer<'a>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = MapSerializer<'a>;
    type SerializeStructVariant = VariantMapSerializer<'a>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.output.push_str(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.write_i64(v as i64, "$numberInt")
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.write_i64(v as i64, "$numberInt")
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.write_i64(v as i64, "$numberInt")
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.write_i64(v, "$numberLong")
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.write_i64(v as i64, "$numberInt")
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.write_i64(v as i64, "$numberInt")
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.write_i64(v as i64, "$numberLong")
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        let v = i64::try_from(v)
            .map_err(|_| Error::unsupported_value(format!("u64 {} exceeds i64 range", v)))?;
        self.write_i64(v, "$numberLong")
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        let formatted = format_double(v);
        if self.options.canonical || !v.is_finite() {
            self.write_wrapped("$numberDouble", &formatted);
        } else {
            self.output.push_str(&formatted);
        }
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.serialize_str(&v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        if std::mem::take(&mut self.raw_next) {
            // Pre-encoded fragment from RawJson; pass through verbatim.
            self.output.push_str(v);
        } else {
            self.write_escaped(v);
        }
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        self.output.push_str("{\"$binary\":{\"base64\":\"");
        self.output.push_str(&STANDARD.encode(v));
        self.output.push_str("\",\"subType\":\"00\"}}");
        Ok(())
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        self.write_null();
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        if name == crate::raw::TOKEN {
            self.raw_next = true;
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.open('{');
        let mut first = true;
        self.entry_prefix(&mut first);
        self.write_key(variant);
        value.serialize(&mut *self)?;
        self.close('}', true);
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.open('[');
        Ok(SeqSerializer {
            ser: self,
            first: true,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.open('{');
        let mut first = true;
        self.entry_prefix(&mut first);
        self.write_key(variant);
        self.open('[');
        Ok(VariantSeqSerializer {
            ser: self,
            first: true,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.open('{');
        Ok(MapSerializer {
            ser: self,
            first: true,
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(None)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.open('{');
        let mut first = true;
        self.entry_prefix(&mut first);
        self.write_key(variant);
        self.open('{');
        Ok(VariantMapSerializer {
            ser: self,
            first: true,
        })
    }
}

pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
}

impl SeqSerializer<'_> {
    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.entry_prefix(&mut self.first);
        value.serialize(&mut *self.ser)
    }

    fn finish(self) -> Result<()> {
        self.ser.close(']', !self.first);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl ser::SerializeTuple for SeqSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SeqSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

pub struct VariantSeqSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
}

impl ser::SerializeTupleVariant for VariantSeqSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.entry_prefix(&mut self.first);
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.close(']', !self.first);
        self.ser.close('}', true);
        Ok(())
    }
}

pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
    pending_key: Option<String>,
}

impl MapSerializer<'_> {
    fn entry<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.entry_prefix(&mut self.first);
        self.ser.write_key(key);
        value.serialize(&mut *self.ser)
    }
}

impl ser::SerializeMap for MapSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key_value = crate::to_value(key)?;
        self.pending_key = Some(key_string(key_value)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.entry(&key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.close('}', !self.first);
        Ok(())
    }
}

impl ser::SerializeStruct for MapSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entry(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.close('}', !self.first);
        Ok(())
    }
}

pub struct VariantMapSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
}

impl ser::SerializeStructVariant for VariantMapSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.entry_prefix(&mut self.first);
        self.ser.write_key(key);
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.close('}', !self.first);
        self.ser.close('}', true);
        Ok(())
    }
}

/// Serializer producing a dynamic [`Value`] instead of text.
///
/// Used by [`to_value`](crate::to_value). Numeric types keep their BSON
/// identity: `i8`/`i16`/`i32`/`u8`/`u16` become `Int32`, `i64`/`u32` become
/// `Int64`, floats become `Double`.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeDoc {
    doc: Document,
    variant: Option<&'static str>,
    pending_key: Option<String>,
}

fn wrap_variant(variant: Option<&'static str>, value: Value) -> Value {
    match variant {
        Some(name) => {
            let mut doc = Document::with_capacity(1);
            doc.insert(name.to_string(), value);
            Value::Document(doc)
        }
        None => value,
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeDoc;
    type SerializeStruct = SerializeDoc;
    type SerializeStructVariant = SerializeDoc;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int32(v as i32))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int32(v as i32))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int32(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int64(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int32(v as i32))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int32(v as i32))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int64(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        let v = i64::try_from(v)
            .map_err(|_| Error::unsupported_value(format!("u64 {} exceeds i64 range", v)))?;
        Ok(Value::Int64(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Double(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Double(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Binary(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(wrap_variant(Some(variant), value.serialize(self)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
            variant: None,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len),
            variant: Some(variant),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeDoc> {
        Ok(SerializeDoc {
            doc: Document::new(),
            variant: None,
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeDoc> {
        Ok(SerializeDoc {
            doc: Document::with_capacity(len),
            variant: None,
            pending_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeDoc> {
        Ok(SerializeDoc {
            doc: Document::with_capacity(len),
            variant: Some(variant),
            pending_key: None,
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(crate::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Array(self.vec)))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(crate::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(crate::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(crate::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Array(self.vec)))
    }
}

impl ser::SerializeMap for SerializeDoc {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(key_string(crate::to_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.doc.insert(key, crate::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Document(self.doc)))
    }
}

impl ser::SerializeStruct for SerializeDoc {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.doc.insert(key.to_string(), crate::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Document(self.doc)))
    }
}

impl ser::SerializeStructVariant for SerializeDoc {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.doc.insert(key.to_string(), crate::to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Document(self.doc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_formatting() {
        assert_eq!(format_double(1.0), "1.0");
        assert_eq!(format_double(-0.0), "-0.0");
        assert_eq!(format_double(2.5), "2.5");
        assert_eq!(format_double(1.0e15), "1000000000000000.0");
        assert_eq!(format_double(f64::NAN), "NaN");
        assert_eq!(format_double(f64::INFINITY), "Infinity");
        assert_eq!(format_double(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn non_string_keys() {
        use std::collections::BTreeMap;

        let mut int_keys = BTreeMap::new();
        int_keys.insert(3i32, "x");
        assert_eq!(crate::to_string(&int_keys).unwrap(), r#"{"3":"x"}"#);

        let mut char_keys = BTreeMap::new();
        char_keys.insert('k', "x");
        assert_eq!(crate::to_string(&char_keys).unwrap(), r#"{"k":"x"}"#);

        let mut bool_keys = BTreeMap::new();
        bool_keys.insert(true, 1i32);
        let err = crate::to_string(&bool_keys).unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)));
        // The diagnostic names every accepted key form.
        assert!(err.to_string().contains("strings, chars, or integers"));
    }
}
