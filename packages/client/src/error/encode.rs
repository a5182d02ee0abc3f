//! Encoding failure taxonomy
//!
//! Every variant displays as the diagnostic text that the degraded fallback
//! writes into the request body.

/// Why a payload could not be encoded as its declared content type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("json marshal failed:{0}")]
    Json(String),

    #[error("xml marshal failed:{0}")]
    Xml(String),

    /// Rendered payload that was declared `text/plain` but is not a string
    #[error("content is not a string:{0}")]
    NotAString(String),

    /// Verbatim content type that matched no encoder
    #[error("cannot encode payload, unknown content type:{0}")]
    UnknownContentType(String),
}

impl EncodeError {
    /// The diagnostic text used as a degraded request body
    #[must_use]
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}
