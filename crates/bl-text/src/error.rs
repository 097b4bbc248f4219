//! Error types for field handling.

use thiserror::Error;

/// Result type for text operations.
pub type Result<T> = std::result::Result<T, TextError>;

/// Errors that can occur while decoding field content.
#[derive(Error, Debug)]
pub enum TextError {
    /// The candidate was not valid Base64.
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The decoded bytes were not UTF-8 text.
    #[error("decoded content is not UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
