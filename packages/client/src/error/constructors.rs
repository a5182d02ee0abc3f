use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for a rejected header name or value.
pub fn header<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Header).with(e.into())
}

/// Creates an `Error` for a payload encoding failure.
pub fn encode<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Encode).with(e.into())
}

/// Creates an `Error` for a path template failure.
pub fn path<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Path).with(e.into())
}

/// Creates an `Error` for a url assembly failure.
pub fn url<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Url).with(e.into())
}
