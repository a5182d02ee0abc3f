//! Request body handling functionality
//!
//! Provides methods for setting request bodies, either verbatim or encoded
//! from a serializable payload according to a declared content type. Every
//! call replaces the previous body.

use bytes::Bytes;
use http::HeaderValue;
use rat_client::content::{encode, encode_or_degrade};
use rat_client::error;
use rat_client::Result;
use serde::Serialize;

use crate::builder::core::RequestBuilder;
use crate::builder::headers::header;

impl RequestBuilder {
    /// Set the payload as is. No content type is set.
    ///
    /// # Arguments
    /// * `body` - Text sent verbatim as the request body
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn body(self, body: &str) -> Self {
        self.raw_body(body.to_owned())
    }

    /// Set raw bytes as request body
    ///
    /// Sets the request body directly as raw bytes without any serialization.
    /// No content type is set.
    #[must_use]
    pub fn raw_body(mut self, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        if self.debug_enabled {
            log::debug!("Rat Builder: Set raw request body ({} bytes)", bytes.len());
        }
        self.request.set_body(bytes);
        self
    }

    /// Encode `payload` according to `content_type` and use it as the body
    ///
    /// `content_type` is first added verbatim as a `Content-Type` header, then
    /// matched by substring:
    /// - `application/json`: JSON serialization
    /// - `application/xml`: XML serialization
    /// - `text/plain`: the payload must serialize as a string
    /// - anything else: unknown content type
    ///
    /// When encoding fails the body becomes the diagnostic text of the
    /// failure (e.g. `content is not a string:42`) and the header keeps the
    /// declared type. In strict mode the body is left unchanged and the
    /// failure is returned by `build` instead.
    ///
    /// # Arguments
    /// * `payload` - The data to encode
    /// * `content_type` - Declared MIME type, optionally with parameters
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```
    /// use rat::RequestBuilder;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let request = RequestBuilder::new("/v1/users")
    ///     .content(&User { name: "ann".into() }, "application/json; charset=utf-8")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(&request.body().unwrap()[..], br#"{"name":"ann"}"#);
    /// ```
    #[must_use]
    pub fn content<T, C>(mut self, payload: &T, content_type: C) -> Self
    where
        T: Serialize + ?Sized,
        C: AsRef<str>,
    {
        let content_type = content_type.as_ref();
        self = self.header(header::CONTENT_TYPE.as_str(), content_type);

        let body = if self.config.is_strict() {
            match encode(payload, content_type, &self.config) {
                Ok(body) => body,
                Err(failure) => {
                    self.reject(error::encode(failure));
                    return self;
                }
            }
        } else {
            encode_or_degrade(payload, content_type, &self.config)
        };

        if self.debug_enabled {
            log::debug!(
                "Rat Builder: Set request body ({} bytes, content-type: {content_type})",
                body.len()
            );
        }

        self.request.set_body(body);
        self
    }

    /// Like [`RequestBuilder::content`], but report failures immediately
    ///
    /// Ignores the configured failure mode.
    ///
    /// # Errors
    ///
    /// Returns a `Kind::Header` error if `content_type` is not a valid header
    /// value and a `Kind::Encode` error carrying the `EncodeError` when the
    /// payload cannot be encoded.
    pub fn try_content<T, C>(mut self, payload: &T, content_type: C) -> Result<Self>
    where
        T: Serialize + ?Sized,
        C: AsRef<str>,
    {
        let content_type = content_type.as_ref();
        let value = HeaderValue::from_str(content_type).map_err(error::header)?;
        let body = encode(payload, content_type, &self.config).map_err(error::encode)?;

        self.request.append_header(header::CONTENT_TYPE, value);
        self.request.set_body(body);
        Ok(self)
    }
}
