//! Header management and manipulation functionality
//!
//! Headers accumulate: adding a name that is already present keeps the
//! earlier values and appends the new one.

use http::{HeaderName, HeaderValue};
use rat_client::http::parse_header;

pub use rat_client::http::header;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Add a header to the request
    ///
    /// Invalid names or values are skipped with a warning, or recorded as the
    /// build error in strict mode.
    ///
    /// # Arguments
    /// * `name` - The header name
    /// * `value` - The header value
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```
    /// use rat::RequestBuilder;
    ///
    /// let request = RequestBuilder::new("/")
    ///     .header("X-Trace", "v1")
    ///     .header("X-Trace", "v2")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.header_values("X-Trace"), ["v1", "v2"]);
    /// ```
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        match parse_header(name, value) {
            Ok((name, value)) => self.header_value(name, value),
            Err(error) => {
                self.reject(error);
                self
            }
        }
    }

    /// Add an already validated header to the request
    ///
    /// # Arguments
    /// * `key` - The header name
    /// * `value` - The header value
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn header_value(mut self, key: HeaderName, value: HeaderValue) -> Self {
        if self.debug_enabled {
            log::debug!("Rat Builder: header {key}: {value:?}");
        }
        self.request.append_header(key, value);
        self
    }

    /// Add multiple headers without overwriting existing ones
    ///
    /// # Arguments
    /// * `headers_config` - Headers configuration using [("key", "value")] syntax
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```
    /// use rat::RequestBuilder;
    ///
    /// let request = RequestBuilder::new("/")
    ///     .headers([("user-agent", "MyApp/1.0"), ("x-api-version", "v1")])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.headers().len(), 2);
    /// ```
    #[must_use]
    pub fn headers(
        self,
        headers_config: impl Into<hashbrown::HashMap<&'static str, &'static str>>,
    ) -> Self {
        headers_config
            .into()
            .into_iter()
            .fold(self, |builder, (name, value)| builder.header(name, value))
    }

    /// Set User-Agent header
    ///
    /// # Arguments
    /// * `user_agent` - The user agent string
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn user_agent(self, user_agent: &str) -> Self {
        self.header(header::USER_AGENT.as_str(), user_agent)
    }

    /// Set Accept header
    ///
    /// # Arguments
    /// * `accept` - Media range as text or a `ContentType`
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```
    /// use rat::{ContentType, RequestBuilder};
    ///
    /// let request = RequestBuilder::new("/")
    ///     .accept(ContentType::ApplicationXml)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.header_values("accept"), ["application/xml"]);
    /// ```
    #[must_use]
    pub fn accept(self, accept: impl AsRef<str>) -> Self {
        self.header(header::ACCEPT.as_str(), accept.as_ref())
    }
}
