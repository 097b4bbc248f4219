//! Error types for Boolog.

use thiserror::Error;

/// Result type for Boolog operations.
pub type Result<T> = std::result::Result<T, BoologError>;

/// Errors that can occur while writing to or concluding a Boolog.
#[derive(Error, Debug)]
pub enum BoologError {
    /// Write attempted after the node was concluded or embedded elsewhere.
    ///
    /// Once a Boolog has been concluded it can no longer be written to.
    /// Passing a Boolog to `show_boolog()` concludes it automatically.
    #[error("cannot {operation} on boolog '{title}': it was already concluded")]
    Concluded {
        operation: &'static str,
        title: String,
    },

    /// IO error on one of the sinks.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BoologError {
    /// True for the write-after-conclude programming error.
    pub fn is_concluded(&self) -> bool {
        matches!(self, BoologError::Concluded { .. })
    }
}
