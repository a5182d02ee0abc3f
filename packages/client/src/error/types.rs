use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `rat_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while preparing a request description.
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Header name or value rejected
    Header,
    /// Payload could not be encoded as the declared content type
    Encode,
    /// Path template could not be expanded
    Path,
    /// Target URL could not be assembled
    Url,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// The failure class of this error
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    #[must_use]
    pub fn is_encode(&self) -> bool {
        self.inner.kind == Kind::Encode
    }

    #[must_use]
    pub fn is_header(&self) -> bool {
        self.inner.kind == Kind::Header
    }

    #[must_use]
    pub fn is_path(&self) -> bool {
        self.inner.kind == Kind::Path
    }

    #[must_use]
    pub fn is_url(&self) -> bool {
        self.inner.kind == Kind::Url
    }

    /// Downcast the underlying source, e.g. to `EncodeError` or `PathError`
    #[must_use]
    pub fn source_as<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner
            .source
            .as_ref()
            .and_then(|source| source.downcast_ref::<E>())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("rat_client::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::Header => f.write_str("invalid header")?,
            Kind::Encode => f.write_str("payload encoding failed")?,
            Kind::Path => f.write_str("path template error")?,
            Kind::Url => f.write_str("invalid request url")?,
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}
