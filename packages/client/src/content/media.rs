//! Content type classification
//!
//! Matching is by substring so parameterized types such as
//! `application/json; charset=utf-8` select the same encoder as the bare type.

use std::borrow::Cow;

const JSON: &str = "application/json";
const XML: &str = "application/xml";
const TEXT: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

/// Well-known content types for the fluent API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// application/json content type
    ApplicationJson,
    /// application/xml content type
    ApplicationXml,
    /// text/plain content type
    TextPlain,
    /// application/octet-stream content type
    ApplicationOctetStream,
}

impl ContentType {
    /// Convert content type to string representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ApplicationJson => JSON,
            ContentType::ApplicationXml => XML,
            ContentType::TextPlain => TEXT,
            ContentType::ApplicationOctetStream => OCTET_STREAM,
        }
    }
}

impl AsRef<str> for ContentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Encoder selected for a declared content type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Json,
    Xml,
    Text,
    Unknown,
}

impl MediaKind {
    /// Pick the encoder for `content_type`; json wins over xml, xml over text
    #[must_use]
    pub fn classify(content_type: &str, case_insensitive: bool) -> Self {
        let normalized: Cow<'_, str> = if case_insensitive {
            Cow::Owned(content_type.to_ascii_lowercase())
        } else {
            Cow::Borrowed(content_type)
        };

        if normalized.contains(JSON) {
            MediaKind::Json
        } else if normalized.contains(XML) {
            MediaKind::Xml
        } else if normalized.contains(TEXT) {
            MediaKind::Text
        } else {
            MediaKind::Unknown
        }
    }
}
