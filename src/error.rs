use std::string::FromUtf8Error;

use thiserror::Error;

/// Reasons a binary string can be rejected by [`crate::binary::decode`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(
        "Binary string length must be multiple of 8 when no separators provided (got length {len})."
    )]
    InvalidLength { len: usize },
    #[error("Each byte must be exactly 8 bits (got length {len} for '{group}').")]
    InvalidGroupLength { group: String, len: usize },
    #[error("Binary input contains invalid characters: '{group}'")]
    InvalidDigit { group: String },
    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}
