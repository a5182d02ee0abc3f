//! Encoder configuration
//!
//! Defaults reproduce the compatible behavior: diagnostic bodies instead of
//! errors, and unknown content types always degrade even for raw bytes.

/// What to do with a payload whose content type matched no encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownContentPolicy {
    /// Always produce the unknown-content-type diagnostic, raw bytes included
    #[default]
    Diagnostic,
    /// Use the payload as-is when it is a byte sequence
    RawBytes,
}

/// How encoding failures surface to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Write the diagnostic text as the body and carry on
    #[default]
    Degrade,
    /// Leave the body untouched and report a typed error
    Strict,
}

/// Settings consulted by `content::encode` and the request builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    pub unknown_content: UnknownContentPolicy,
    pub failure_mode: FailureMode,
    /// Lower-case the declared content type before matching
    pub case_insensitive: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            unknown_content: UnknownContentPolicy::Diagnostic,
            failure_mode: FailureMode::Degrade,
            case_insensitive: true,
        }
    }
}

impl EncoderConfig {
    /// Configuration that returns typed errors instead of diagnostic bodies
    ///
    /// # Examples
    /// ```
    /// use rat_client::config::{EncoderConfig, FailureMode};
    ///
    /// let config = EncoderConfig::strict();
    /// assert_eq!(config.failure_mode, FailureMode::Strict);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_failure_mode(FailureMode::Strict)
    }

    #[must_use]
    pub fn with_unknown_content(mut self, policy: UnknownContentPolicy) -> Self {
        self.unknown_content = policy;
        self
    }

    #[must_use]
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// Match content types exactly as written when `false`
    #[must_use]
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.failure_mode == FailureMode::Strict
    }
}
