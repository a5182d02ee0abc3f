//! Rat request builder
//!
//! Fluent builder that prepares the URI, query values, headers and body of an
//! outbound HTTP request. The resulting `RequestDescription` is handed to a
//! separate HTTP client for dispatch; nothing here performs I/O.
//!
//! ```
//! use rat::ContentType;
//!
//! let request = rat::new_config("/v1/notes")
//!     .query("page", 2)
//!     .header("X-Request-Id", "abc")
//!     .content("remember the milk", ContentType::TextPlain)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.query().encode(), "page=2");
//! assert_eq!(&request.body().unwrap()[..], b"remember the milk");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from client package
pub use rat_client::{
    ContentType, EncodeError, EncoderConfig, Error, FailureMode, Kind, PathError, QueryValues,
    RequestDescription, Result, UnknownContentPolicy,
};

/// Start building a request that targets `uri`
///
/// Shorthand for `RequestBuilder::new(uri)`
#[must_use]
pub fn new_config(uri: &str) -> RequestBuilder {
    RequestBuilder::new(uri)
}
