//! Request builder modules
//!
//! Provides the fluent API for filling in a `RequestDescription` with
//! method chaining.

pub mod auth;
pub mod body;
pub mod core;
pub mod headers;
pub mod query;

pub use self::core::*;
pub use headers::*;
