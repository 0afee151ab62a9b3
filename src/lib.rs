pub mod binary;
pub mod error;
pub mod logger;

pub use binary::{DEFAULT_SEPARATOR, decode, encode};
pub use error::DecodeError;
