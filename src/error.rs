//! Error types for the VoiceIt API client.

use thiserror::Error;

/// Result type alias for VoiceIt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for VoiceIt API operations.
///
/// Operation calls themselves never return this type: expected failure
/// classes (unreadable media, transport faults, remote errors) are folded
/// into the [`Envelope`](crate::Envelope). `Error` surfaces only from
/// client construction and envelope decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
