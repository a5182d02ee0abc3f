//! Authentication methods for HTTP requests
//!
//! Provides convenient methods for setting authentication headers including
//! API keys, basic authentication, and bearer token authentication.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::builder::core::RequestBuilder;
use crate::builder::headers::header;

impl RequestBuilder {
    /// Set API key authentication header
    ///
    /// Adds an `X-API-Key` header with the provided API key value.
    ///
    /// # Arguments
    /// * `key` - The API key value
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn api_key(self, key: &str) -> Self {
        self.header(header::X_API_KEY, key)
    }

    /// Set basic authentication header
    ///
    /// The credentials are base64 encoded as `user:password`.
    ///
    /// # Examples
    /// ```
    /// use rat::RequestBuilder;
    ///
    /// let request = RequestBuilder::new("/")
    ///     .basic_auth("aladdin", "opensesame")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(
    ///     request.header_values("authorization"),
    ///     ["Basic YWxhZGRpbjpvcGVuc2VzYW1l"]
    /// );
    /// ```
    #[must_use]
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        self.header(header::AUTHORIZATION.as_str(), &format!("Basic {encoded}"))
    }

    /// Set bearer token authentication header
    #[must_use]
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header(header::AUTHORIZATION.as_str(), &format!("Bearer {token}"))
    }
}
