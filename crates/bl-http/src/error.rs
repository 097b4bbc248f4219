//! Error types for HTTP rendering.

use thiserror::Error;

/// Result type for HTTP rendering.
pub type Result<T> = std::result::Result<T, HttpError>;

#[derive(Error, Debug)]
pub enum HttpError {
    /// The Boolog rejected the write.
    #[error(transparent)]
    Log(#[from] bl_core::BoologError),

    /// The transport failed to deliver the request.
    #[error("transport failed for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("request body is not serializable: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL '{0}'")]
    InvalidUrl(String),
}
