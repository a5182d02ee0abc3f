pub mod headers;
pub mod path;
pub mod query;
pub mod request;

pub use headers::{header, parse_header};
pub use path::PathError;
pub use query::QueryValues;
pub use request::RequestDescription;
