//! Error types used by the crate.

use thiserror::Error;

/// Placemap error type.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (network or file).
    #[error("failed to load data")]
    Io,
    /// Error decoding data.
    #[error("failed to decode data: {0}")]
    Decoding(String),
    /// Item not found.
    #[error("item not found")]
    NotFound,
    /// Invalid configuration of the map or one of its layers.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// Error reading data from the FS.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(_value: reqwest::Error) -> Self {
        Self::Io
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Decoding(value.to_string())
    }
}

impl From<geojson::Error> for Error {
    fn from(value: geojson::Error) -> Self {
        Self::Decoding(value.to_string())
    }
}
