//! XML encoding
//!
//! Structs and other named types encode with their type name as the root
//! element. Top-level scalars and strings have no name of their own, so they
//! get the element names `int`, `float64`, `string`, ... and sequences encode
//! as the concatenation of their elements. Maps stay unsupported.

use std::fmt;

use serde::Serialize;
use serde::ser::{self, Impossible, Serializer};

/// Encode `payload` as XML, returning the failure text on error
pub(crate) fn to_xml<T: Serialize + ?Sized>(payload: &T) -> Result<String, String> {
    match quick_xml::se::to_string(payload) {
        Ok(xml) => Ok(xml),
        Err(root_error) => match payload.serialize(BareXml) {
            Ok(xml) => Ok(xml),
            Err(XmlFailure::Unsupported) => Err(root_error.to_string()),
            Err(XmlFailure::Element(message)) => Err(message),
        },
    }
}

#[derive(Debug)]
enum XmlFailure {
    /// no element name can be derived; report the named encoder's error
    Unsupported,
    Element(String),
}

impl fmt::Display for XmlFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlFailure::Unsupported => f.write_str("unsupported xml payload"),
            XmlFailure::Element(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for XmlFailure {}

impl ser::Error for XmlFailure {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        XmlFailure::Element(msg.to_string())
    }
}

fn rooted<T: Serialize + ?Sized>(root: &str, value: &T) -> Result<String, XmlFailure> {
    quick_xml::se::to_string_with_root(root, value)
        .map_err(|e| XmlFailure::Element(e.to_string()))
}

/// Serializer for payloads the named encoder rejected for lack of a root tag
struct BareXml;

struct Concat {
    xml: String,
}

impl Concat {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), XmlFailure> {
        let element = to_xml(value).map_err(XmlFailure::Element)?;
        self.xml.push_str(&element);
        Ok(())
    }
}

impl ser::SerializeSeq for Concat {
    type Ok = String;
    type Error = XmlFailure;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), XmlFailure> {
        self.push(value)
    }

    fn end(self) -> Result<String, XmlFailure> {
        Ok(self.xml)
    }
}

impl ser::SerializeTuple for Concat {
    type Ok = String;
    type Error = XmlFailure;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), XmlFailure> {
        self.push(value)
    }

    fn end(self) -> Result<String, XmlFailure> {
        Ok(self.xml)
    }
}

impl Serializer for BareXml {
    type Ok = String;
    type Error = XmlFailure;

    type SerializeSeq = Concat;
    type SerializeTuple = Concat;
    type SerializeTupleStruct = Impossible<String, XmlFailure>;
    type SerializeTupleVariant = Impossible<String, XmlFailure>;
    type SerializeMap = Impossible<String, XmlFailure>;
    type SerializeStruct = Impossible<String, XmlFailure>;
    type SerializeStructVariant = Impossible<String, XmlFailure>;

    fn serialize_bool(self, v: bool) -> Result<String, XmlFailure> {
        rooted("bool", &v)
    }

    fn serialize_i8(self, v: i8) -> Result<String, XmlFailure> {
        rooted("int8", &v)
    }

    fn serialize_i16(self, v: i16) -> Result<String, XmlFailure> {
        rooted("int16", &v)
    }

    fn serialize_i32(self, v: i32) -> Result<String, XmlFailure> {
        rooted("int", &v)
    }

    fn serialize_i64(self, v: i64) -> Result<String, XmlFailure> {
        rooted("int64", &v)
    }

    fn serialize_u8(self, v: u8) -> Result<String, XmlFailure> {
        rooted("uint8", &v)
    }

    fn serialize_u16(self, v: u16) -> Result<String, XmlFailure> {
        rooted("uint16", &v)
    }

    fn serialize_u32(self, v: u32) -> Result<String, XmlFailure> {
        rooted("uint32", &v)
    }

    fn serialize_u64(self, v: u64) -> Result<String, XmlFailure> {
        rooted("uint64", &v)
    }

    fn serialize_f32(self, v: f32) -> Result<String, XmlFailure> {
        rooted("float32", &v)
    }

    fn serialize_f64(self, v: f64) -> Result<String, XmlFailure> {
        rooted("float64", &v)
    }

    fn serialize_char(self, v: char) -> Result<String, XmlFailure> {
        rooted("string", &v)
    }

    fn serialize_str(self, v: &str) -> Result<String, XmlFailure> {
        rooted("string", v)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    /// absent values encode to nothing
    fn serialize_none(self) -> Result<String, XmlFailure> {
        Ok(String::new())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<String, XmlFailure> {
        to_xml(value).map_err(XmlFailure::Element)
    }

    fn serialize_unit(self) -> Result<String, XmlFailure> {
        Ok(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<String, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _value: &T,
    ) -> Result<String, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Concat, XmlFailure> {
        Ok(Concat { xml: String::new() })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Concat, XmlFailure> {
        Ok(Concat { xml: String::new() })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, XmlFailure> {
        Err(XmlFailure::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: u32,
    }

    #[test]
    fn scalars_use_builtin_element_names() {
        assert_eq!(to_xml(&42), Ok("<int>42</int>".to_string()));
        assert_eq!(to_xml(&true), Ok("<bool>true</bool>".to_string()));
        assert_eq!(to_xml("hello"), Ok("<string>hello</string>".to_string()));
    }

    #[test]
    fn sequences_concatenate_elements() {
        let items = vec![Item { id: 1 }, Item { id: 2 }];
        assert_eq!(
            to_xml(&items),
            Ok("<Item><id>1</id></Item><Item><id>2</id></Item>".to_string())
        );
        assert_eq!(to_xml(&[1, 2]), Ok("<int>1</int><int>2</int>".to_string()));
    }

    #[test]
    fn absent_values_encode_empty() {
        let nothing: Option<i32> = None;
        assert_eq!(to_xml(&nothing), Ok(String::new()));
        assert_eq!(to_xml(&Some("x")), Ok("<string>x</string>".to_string()));
    }

    #[test]
    fn maps_stay_unsupported() {
        let mut map = BTreeMap::new();
        map.insert("k", 1);
        let failure = to_xml(&map).unwrap_err();
        assert!(!failure.is_empty());
    }
}
