//! Core `RequestBuilder` structure and base functionality
//!
//! Contains the main `RequestBuilder` struct and the methods that configure
//! the builder itself rather than a particular request field.

use std::fmt;

use rat_client::config::{EncoderConfig, FailureMode, UnknownContentPolicy};
use rat_client::{Error, RequestDescription, Result};

/// Fluent builder that fills in a `RequestDescription`
///
/// Every method takes and returns the builder by value so calls chain. In the
/// default degrade mode nothing fails; in strict mode the first failure is
/// kept and returned by [`RequestBuilder::build`].
#[derive(Debug)]
pub struct RequestBuilder {
    /// Request being built
    pub(crate) request: RequestDescription,
    /// Encoding behavior for `content`
    pub(crate) config: EncoderConfig,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
    /// First failure recorded in strict mode
    pub(crate) error: Option<Error>,
}

impl RequestBuilder {
    /// Start building a request that targets `uri`
    ///
    /// # Examples
    /// ```
    /// use rat::RequestBuilder;
    ///
    /// let request = RequestBuilder::new("/v1/users").build().unwrap();
    /// assert_eq!(request.uri(), "/v1/users");
    /// ```
    #[must_use]
    pub fn new(uri: &str) -> Self {
        Self {
            request: RequestDescription::new(uri),
            config: EncoderConfig::default(),
            debug_enabled: false,
            error: None,
        }
    }

    /// Enable debug logging for this request
    ///
    /// When enabled, each configuration call is logged at debug level.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Replace the encoder configuration
    ///
    /// # Arguments
    /// * `config` - Encoding behavior used by subsequent `content` calls
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Report failures from `build` instead of writing diagnostic bodies
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.config = self.config.with_failure_mode(FailureMode::Strict);
        self
    }

    /// Keep raw byte payloads for content types no encoder recognizes
    #[must_use]
    pub fn prefer_raw_bytes(mut self) -> Self {
        self.config = self
            .config
            .with_unknown_content(UnknownContentPolicy::RawBytes);
        self
    }

    /// Set the target path
    ///
    /// The template is stored verbatim as the uri. `params` are kept alongside
    /// it and substituted into `{name}` placeholders by
    /// `RequestDescription::expanded_uri`.
    ///
    /// # Arguments
    /// * `template` - Path or path template, e.g. `/v1/{param}/`
    /// * `params` - Values for the placeholders, in order
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```
    /// use rat::RequestBuilder;
    ///
    /// let request = RequestBuilder::new("/")
    ///     .path("/v1/{user}/repos", ["ann"])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.uri(), "/v1/{user}/repos");
    /// assert_eq!(request.expanded_uri().unwrap(), "/v1/ann/repos");
    /// ```
    #[must_use]
    pub fn path<I>(mut self, template: &str, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let params: Vec<String> = params.into_iter().map(|p| p.to_string()).collect();

        if self.debug_enabled {
            log::debug!("Rat Builder: path {template} ({} params)", params.len());
        }

        self.request.set_path(template, params);
        self
    }

    /// The request as configured so far
    #[must_use]
    pub fn request(&self) -> &RequestDescription {
        &self.request
    }

    /// Active encoder configuration
    #[must_use]
    pub fn encoder_config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Finish building
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first header or encoding failure recorded
    /// while building. In degrade mode this never fails.
    pub fn build(self) -> Result<RequestDescription> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.request),
        }
    }

    /// Record `error` in strict mode, log and drop it otherwise
    pub(crate) fn reject(&mut self, error: Error) {
        if self.config.is_strict() {
            if self.error.is_none() {
                self.error = Some(error);
            }
        } else {
            log::warn!("Rat Builder: {error}. Skipping.");
        }
    }
}
