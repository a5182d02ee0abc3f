//! Header name/value parsing helpers

use std::borrow::Cow;
use std::str::FromStr;

use http::{HeaderName, HeaderValue};

use crate::error::{self, Result};

/// Header constants for common HTTP headers
pub mod header {
    pub use http::header::*;

    /// Custom X-API-Key header for API authentication
    pub const X_API_KEY: &str = "x-api-key";
}

/// Parse a header pair from plain strings
///
/// # Errors
///
/// Returns a `Kind::Header` error if `name` is not a valid token or `value`
/// contains bytes not allowed in a header value.
pub fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_str(name).map_err(error::header)?;
    let value = HeaderValue::from_str(value).map_err(error::header)?;
    Ok((name, value))
}

/// Every value of header `name`, oldest first
///
/// Values holding non-ASCII bytes are decoded as UTF-8, lossily.
pub fn values<'a>(headers: &'a http::HeaderMap, name: &str) -> Vec<Cow<'a, str>> {
    headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .collect()
}
