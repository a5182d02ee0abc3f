//! Payload to body translation keyed on a declared content type

pub mod encoder;
pub mod media;
mod probe;
mod xml;

pub use encoder::{encode, encode_or_degrade};
pub use media::{ContentType, MediaKind};
