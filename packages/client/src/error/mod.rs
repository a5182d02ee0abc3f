pub mod constructors;
pub mod encode;
pub mod types;

pub use constructors::*;
pub use encode::EncodeError;
pub use types::{Error, Inner, Kind, Result};
