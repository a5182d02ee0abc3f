//! Content encoder
//!
//! `encode` is the tagged form: encoded bytes or the reason they could not be
//! produced. `encode_or_degrade` is the compatible form that never fails and
//! substitutes the diagnostic text for the body instead.

use bytes::Bytes;
use serde::Serialize;

use super::media::MediaKind;
use super::{probe, xml};
use crate::config::{EncoderConfig, UnknownContentPolicy};
use crate::error::EncodeError;

/// Encode `payload` as `content_type`
///
/// # Errors
///
/// - `EncodeError::Json` / `EncodeError::Xml` when serialization fails
/// - `EncodeError::NotAString` for a `text/plain` payload that is not a string
/// - `EncodeError::UnknownContentType` when no encoder matches; under
///   `UnknownContentPolicy::RawBytes` only if the payload is not a byte sequence
///
/// # Examples
/// ```
/// use rat_client::config::EncoderConfig;
/// use rat_client::content::encode;
///
/// let body = encode(&vec![1, 2], "application/json", &EncoderConfig::default()).unwrap();
/// assert_eq!(&body[..], b"[1,2]");
/// ```
pub fn encode<T: Serialize + ?Sized>(
    payload: &T,
    content_type: &str,
    config: &EncoderConfig,
) -> Result<Bytes, EncodeError> {
    let kind = MediaKind::classify(content_type, config.case_insensitive);

    let encoded = match kind {
        MediaKind::Json => serde_json::to_vec(payload)
            .map(Bytes::from)
            .map_err(|e| EncodeError::Json(e.to_string())),
        MediaKind::Xml => xml::to_xml(payload)
            .map(Bytes::from)
            .map_err(EncodeError::Xml),
        MediaKind::Text => probe::as_text(payload)
            .map(Bytes::from)
            .ok_or_else(|| EncodeError::NotAString(probe::render(payload))),
        MediaKind::Unknown => match config.unknown_content {
            UnknownContentPolicy::RawBytes => probe::as_bytes(payload)
                .map(Bytes::from)
                .ok_or_else(|| EncodeError::UnknownContentType(content_type.to_owned())),
            UnknownContentPolicy::Diagnostic => {
                Err(EncodeError::UnknownContentType(content_type.to_owned()))
            }
        },
    };

    if let Ok(ref body) = encoded {
        tracing::debug!(content_type, ?kind, len = body.len(), "payload encoded");
    }

    encoded
}

/// Encode `payload`, falling back to the diagnostic text as the body
///
/// The result carries no marker distinguishing a diagnostic body from a real one.
pub fn encode_or_degrade<T: Serialize + ?Sized>(
    payload: &T,
    content_type: &str,
    config: &EncoderConfig,
) -> Bytes {
    encode(payload, content_type, config).unwrap_or_else(|error| {
        tracing::warn!(content_type, %error, "payload encoding degraded to diagnostic body");
        Bytes::from(error.diagnostic())
    })
}
