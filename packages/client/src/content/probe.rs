//! Shape detection for serializable payloads
//!
//! A payload counts as a string when it serializes through `serialize_str`,
//! and as a byte sequence when it serializes through `serialize_bytes` or as
//! a sequence/tuple made only of `u8` elements.

use std::fmt;

use serde::Serialize;
use serde::ser::{self, Impossible, Serializer};

enum Shape {
    Text(String),
    Bytes(Vec<u8>),
    /// single `u8`, only meaningful as a sequence element
    Byte(u8),
    Float(f64),
}

#[derive(Debug)]
struct Unshaped;

impl fmt::Display for Unshaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("payload is neither a string nor a byte sequence")
    }
}

impl std::error::Error for Unshaped {}

impl ser::Error for Unshaped {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        Unshaped
    }
}

/// The payload's string value, if it serializes as a plain string
pub(crate) fn as_text<T: Serialize + ?Sized>(payload: &T) -> Option<String> {
    match payload.serialize(ShapeProbe) {
        Ok(Shape::Text(text)) => Some(text),
        _ => None,
    }
}

/// The payload's bytes, if it serializes as a byte sequence
pub(crate) fn as_bytes<T: Serialize + ?Sized>(payload: &T) -> Option<Vec<u8>> {
    match payload.serialize(ShapeProbe) {
        Ok(Shape::Bytes(bytes)) => Some(bytes),
        _ => None,
    }
}

/// Human readable rendering used in diagnostics
///
/// Scalars print bare, non-finite floats as `NaN`/`+Inf`/`-Inf`, sequences as
/// `[a b c]`; maps and structs fall back to compact JSON.
pub(crate) fn render<T: Serialize + ?Sized>(payload: &T) -> String {
    if let Ok(Shape::Float(v)) = payload.serialize(ShapeProbe) {
        if v.is_nan() {
            return "NaN".to_string();
        }
        if v.is_infinite() {
            return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
        }
    }

    match serde_json::to_value(payload) {
        Ok(value) => render_value(&value),
        Err(_) => std::any::type_name::<T>().to_string(),
    }
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(" "))
        }
        other => other.to_string(),
    }
}

struct ShapeProbe;

struct ByteSeq {
    bytes: Vec<u8>,
}

impl ByteSeq {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Unshaped> {
        match value.serialize(ShapeProbe)? {
            Shape::Byte(byte) => {
                self.bytes.push(byte);
                Ok(())
            }
            Shape::Text(_) | Shape::Bytes(_) | Shape::Float(_) => Err(Unshaped),
        }
    }
}

impl ser::SerializeSeq for ByteSeq {
    type Ok = Shape;
    type Error = Unshaped;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Unshaped> {
        self.push(value)
    }

    fn end(self) -> Result<Shape, Unshaped> {
        Ok(Shape::Bytes(self.bytes))
    }
}

impl ser::SerializeTuple for ByteSeq {
    type Ok = Shape;
    type Error = Unshaped;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Unshaped> {
        self.push(value)
    }

    fn end(self) -> Result<Shape, Unshaped> {
        Ok(Shape::Bytes(self.bytes))
    }
}

impl Serializer for ShapeProbe {
    type Ok = Shape;
    type Error = Unshaped;

    type SerializeSeq = ByteSeq;
    type SerializeTuple = ByteSeq;
    type SerializeTupleStruct = Impossible<Shape, Unshaped>;
    type SerializeTupleVariant = Impossible<Shape, Unshaped>;
    type SerializeMap = Impossible<Shape, Unshaped>;
    type SerializeStruct = Impossible<Shape, Unshaped>;
    type SerializeStructVariant = Impossible<Shape, Unshaped>;

    fn serialize_str(self, v: &str) -> Result<Shape, Unshaped> {
        Ok(Shape::Text(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Shape, Unshaped> {
        Ok(Shape::Bytes(v.to_vec()))
    }

    fn serialize_u8(self, v: u8) -> Result<Shape, Unshaped> {
        Ok(Shape::Byte(v))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Shape, Unshaped> {
        value.serialize(self)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<ByteSeq, Unshaped> {
        Ok(ByteSeq {
            bytes: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<ByteSeq, Unshaped> {
        Ok(ByteSeq {
            bytes: Vec::with_capacity(len),
        })
    }

    fn serialize_bool(self, _v: bool) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_i8(self, _v: i8) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_i16(self, _v: i16) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_i32(self, _v: i32) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_i64(self, _v: i64) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_u16(self, _v: u16) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_u32(self, _v: u32) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_u64(self, _v: u64) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_f32(self, v: f32) -> Result<Shape, Unshaped> {
        Ok(Shape::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Shape, Unshaped> {
        Ok(Shape::Float(v))
    }

    fn serialize_char(self, _v: char) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_none(self) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _value: &T) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_unit(self) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Shape, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Unshaped> {
        Err(Unshaped)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Unshaped> {
        Err(Unshaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Token(String);

    #[test]
    fn strings_are_text() {
        assert_eq!(as_text("hello").as_deref(), Some("hello"));
        assert_eq!(as_text(&String::from("owned")).as_deref(), Some("owned"));
        assert_eq!(as_text(&Token("wrapped".into())).as_deref(), Some("wrapped"));
        assert_eq!(as_text(&42), None);
        assert_eq!(as_text(&Some("maybe")), None);
    }

    #[test]
    fn byte_sequences_are_bytes() {
        assert_eq!(as_bytes(&vec![1u8, 2, 3]), Some(vec![1, 2, 3]));
        assert_eq!(as_bytes(&[4u8, 5]), Some(vec![4, 5]));
        assert_eq!(as_bytes(&bytes::Bytes::from_static(b"ab")), Some(b"ab".to_vec()));
        assert_eq!(as_bytes(&vec![1u32, 2]), None);
        assert_eq!(as_bytes("text"), None);
        assert_eq!(as_bytes(&7u8), None);
    }

    #[test]
    fn render_prints_scalars_bare() {
        assert_eq!(render(&42), "42");
        assert_eq!(render(&true), "true");
        assert_eq!(render(&1.5), "1.5");
    }

    #[test]
    fn render_spells_out_non_finite_floats() {
        assert_eq!(render(&f64::NAN), "NaN");
        assert_eq!(render(&f64::INFINITY), "+Inf");
        assert_eq!(render(&f32::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn render_separates_sequence_items_with_spaces() {
        assert_eq!(render(&vec![1u8, 2]), "[1 2]");
        assert_eq!(render(&vec![vec!["a", "b"], vec!["c"]]), "[[a b] [c]]");
    }

    #[test]
    fn floats_are_neither_text_nor_bytes() {
        assert_eq!(as_text(&2.5), None);
        assert_eq!(as_bytes(&vec![1.0, 2.0]), None);
    }
}
