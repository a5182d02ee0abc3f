//! Content encoder tests
//!
//! Covers the tagged `encode` result and the degrading adapter.

use std::collections::BTreeMap;

use rat_client::config::{EncoderConfig, UnknownContentPolicy};
use rat_client::content::{ContentType, encode, encode_or_degrade};
use rat_client::EncodeError;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
struct Note {
    to: String,
    body: String,
}

fn note() -> Note {
    Note {
        to: "Tove".to_string(),
        body: "Don't forget me".to_string(),
    }
}

/// Payload whose serialization always fails
struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("cannot serialize a channel"))
    }
}

fn text(body: &[u8]) -> &str {
    std::str::from_utf8(body).expect("body should be utf-8")
}

#[test]
fn json_payload_is_serialized() {
    let config = EncoderConfig::default();
    let body = encode(&note(), "application/json", &config).expect("json encodes");
    assert_eq!(
        text(&body),
        r#"{"to":"Tove","body":"Don't forget me"}"#
    );
}

#[test]
fn json_matches_parameterized_type() {
    let config = EncoderConfig::default();
    let body = encode(&vec![1, 2, 3], "application/json; charset=utf-8", &config)
        .expect("json encodes");
    assert_eq!(text(&body), "[1,2,3]");
}

#[test]
fn json_failure_degrades_to_diagnostic() {
    let config = EncoderConfig::default();

    let failure = encode(&Unserializable, "application/json", &config).unwrap_err();
    assert_eq!(failure, EncodeError::Json("cannot serialize a channel".into()));

    let body = encode_or_degrade(&Unserializable, "application/json", &config);
    assert_eq!(text(&body), "json marshal failed:cannot serialize a channel");
}

#[test]
fn json_failure_from_non_string_keys() {
    let mut grid = BTreeMap::new();
    grid.insert((0, 1), "a");

    let body = encode_or_degrade(&grid, "application/json", &EncoderConfig::default());
    let body = text(&body);
    assert!(body.starts_with("json marshal failed:"), "got {body}");
    assert!(body.len() > "json marshal failed:".len());
}

#[test]
fn xml_payload_is_serialized() {
    let body = encode(&note(), "application/xml", &EncoderConfig::default())
        .expect("xml encodes");
    let body = text(&body);
    assert!(body.starts_with("<Note>"), "got {body}");
    assert!(body.contains("<to>Tove</to>"), "got {body}");
}

#[test]
fn xml_failure_degrades_to_diagnostic() {
    let body = encode_or_degrade(&Unserializable, "application/xml", &EncoderConfig::default());
    let body = text(&body);
    assert!(body.starts_with("xml marshal failed:"), "got {body}");
    assert!(body.len() > "xml marshal failed:".len());
}

#[test]
fn plain_text_requires_a_string() {
    let config = EncoderConfig::default();

    let body = encode_or_degrade("hello", "text/plain", &config);
    assert_eq!(text(&body), "hello");

    let body = encode_or_degrade(&String::from("owned"), ContentType::TextPlain.as_str(), &config);
    assert_eq!(text(&body), "owned");

    let body = encode_or_degrade(&42, "text/plain", &config);
    assert_eq!(text(&body), "content is not a string:42");
}

#[test]
fn unknown_type_discards_raw_bytes_by_default() {
    let body = encode_or_degrade(
        &vec![1u8, 2, 3],
        "application/octet-stream",
        &EncoderConfig::default(),
    );
    assert_eq!(
        text(&body),
        "cannot encode payload, unknown content type:application/octet-stream"
    );
}

#[test]
fn unknown_type_keeps_raw_bytes_when_configured() {
    let config = EncoderConfig::default().with_unknown_content(UnknownContentPolicy::RawBytes);

    let body = encode(&vec![1u8, 2, 3], "application/octet-stream", &config)
        .expect("raw bytes pass through");
    assert_eq!(&body[..], &[1u8, 2, 3]);

    let failure = encode("not bytes", "image/png", &config).unwrap_err();
    assert_eq!(failure, EncodeError::UnknownContentType("image/png".into()));
}

#[test]
fn case_folding_can_be_disabled() {
    let folded = encode(&1, "APPLICATION/JSON", &EncoderConfig::default());
    assert_eq!(folded.as_deref(), Ok(&b"1"[..]));

    let exact = EncoderConfig::default().with_case_insensitive(false);
    let body = encode_or_degrade(&1, "APPLICATION/JSON", &exact);
    assert_eq!(
        text(&body),
        "cannot encode payload, unknown content type:APPLICATION/JSON"
    );
}

#[test]
fn diagnostic_matches_display() {
    let failure = EncodeError::NotAString("[1,2]".into());
    assert_eq!(failure.diagnostic(), "content is not a string:[1,2]");
    assert_eq!(failure.diagnostic(), failure.to_string());
}

#[test]
fn xml_scalars_and_strings_get_builtin_roots() {
    let config = EncoderConfig::default();

    let body = encode(&42, "application/xml", &config).expect("scalar encodes");
    assert_eq!(text(&body), "<int>42</int>");

    let body = encode(&2.5f64, "application/xml", &config).expect("float encodes");
    assert_eq!(text(&body), "<float64>2.5</float64>");

    let body = encode("hello", "application/xml", &config).expect("string encodes");
    assert_eq!(text(&body), "<string>hello</string>");
}

#[test]
fn xml_sequences_concatenate_elements() {
    let body = encode(&vec![note(), note()], "application/xml", &EncoderConfig::default())
        .expect("sequence encodes");
    let body = text(&body);
    assert_eq!(body.matches("<Note>").count(), 2, "got {body}");
    assert!(body.ends_with("</Note>"), "got {body}");

    let body = encode(&[1, 2, 3], "application/xml", &EncoderConfig::default())
        .expect("array encodes");
    assert_eq!(text(&body), "<int>1</int><int>2</int><int>3</int>");
}

#[test]
fn xml_maps_still_degrade() {
    let mut map = BTreeMap::new();
    map.insert("k", "v");

    let body = encode_or_degrade(&map, "application/xml", &EncoderConfig::default());
    let body = text(&body);
    assert!(body.starts_with("xml marshal failed:"), "got {body}");
}

#[test]
fn text_diagnostic_spells_out_nan() {
    let body = encode_or_degrade(&f64::NAN, "text/plain", &EncoderConfig::default());
    assert_eq!(text(&body), "content is not a string:NaN");
}
