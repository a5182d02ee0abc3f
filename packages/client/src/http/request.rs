//! Request description handed to the HTTP execution layer
//!
//! A `RequestDescription` is built once per outbound request, mutated by the
//! builder and then consumed read-only by whatever transport sends it.

use std::borrow::Cow;

use bytes::buf::Reader;
use bytes::{Buf, Bytes};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

use super::path;
use super::query::QueryValues;
use crate::error::{self, Result};

/// URI, headers, query values and body of an outbound request
#[derive(Debug, Clone, Default)]
pub struct RequestDescription {
    uri: String,
    path_params: Vec<String>,
    headers: HeaderMap,
    query: QueryValues,
    body: Option<Bytes>,
}

impl RequestDescription {
    /// Create a description targeting `uri`
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Target path or template, exactly as given
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Replace the target with `template`, remembering `params` for expansion
    pub fn set_path(&mut self, template: impl Into<String>, params: Vec<String>) {
        self.uri = template.into();
        self.path_params = params;
    }

    #[must_use]
    pub fn path_params(&self) -> &[String] {
        &self.path_params
    }

    /// The uri with path params substituted into its placeholders
    ///
    /// Without params the uri is returned unchanged, braces included.
    ///
    /// # Errors
    ///
    /// Returns a `Kind::Path` error when the params do not fit the template.
    pub fn expanded_uri(&self) -> Result<String> {
        if self.path_params.is_empty() {
            return Ok(self.uri.clone());
        }
        path::expand(&self.uri, &self.path_params).map_err(error::path)
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Add a header value without replacing existing values of the same name
    pub fn append_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.append(name, value);
    }

    /// All values of header `name`, oldest first
    #[must_use]
    pub fn header_values(&self, name: &str) -> Vec<Cow<'_, str>> {
        super::headers::values(&self.headers, name)
    }

    #[must_use]
    pub fn query(&self) -> &QueryValues {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryValues {
        &mut self.query
    }

    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Replace any previous body
    pub fn set_body(&mut self, body: impl Into<Bytes>) {
        self.body = Some(body.into());
    }

    pub fn take_body(&mut self) -> Option<Bytes> {
        self.body.take()
    }

    /// Body as a reader; empty when no body was set
    #[must_use]
    pub fn body_reader(&self) -> Reader<Bytes> {
        self.body.clone().unwrap_or_default().reader()
    }

    /// Absolute URL: the expanded uri joined onto `base`, plus query values
    ///
    /// # Errors
    ///
    /// Returns a `Kind::Path` error if expansion fails and a `Kind::Url` error
    /// if the uri cannot be joined onto `base`.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let path = self.expanded_uri()?;
        let mut url = base.join(&path).map_err(error::url)?;

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.pairs());
        }

        Ok(url)
    }

    /// Convert into the request value an HTTP transport consumes
    ///
    /// # Errors
    ///
    /// Same as [`RequestDescription::url`], plus a `Kind::Url` error if the
    /// assembled URL is not a valid `http::Uri`.
    pub fn into_http(self, method: Method, base: &Url) -> Result<http::Request<Bytes>> {
        let url = self.url(base)?;
        let uri = url.as_str().parse::<http::Uri>().map_err(error::url)?;

        let mut request = http::Request::new(self.body.unwrap_or_default());
        *request.method_mut() = method;
        *request.uri_mut() = uri;
        *request.headers_mut() = self.headers;

        tracing::debug!(method = %request.method(), uri = %request.uri(), "request description converted");

        Ok(request)
    }
}
