//! # Rat request description
//!
//! Request description and content encoding for outbound HTTP requests.
//! Nothing here performs I/O: a `RequestDescription` is filled in and then
//! handed to a separate transport.
//!
//! ## Features
//!
//! - **Content encoding** of any `serde::Serialize` payload keyed on the
//!   declared content type (JSON, XML, plain text)
//! - **Degraded fallback** that writes a diagnostic body instead of failing,
//!   or **strict** typed errors via `EncoderConfig`
//! - **Multi-valued** headers and query parameters
//! - **Path templates** with `{param}` placeholders

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod content;
pub mod error;
pub mod http;

pub use bytes::Bytes;
pub use url::Url;

pub use config::{EncoderConfig, FailureMode, UnknownContentPolicy};
pub use content::{ContentType, MediaKind};
pub use error::{EncodeError, Error, Kind, Result};
pub use crate::http::{PathError, QueryValues, RequestDescription};
