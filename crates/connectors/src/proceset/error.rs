use crate::file::csv::error::FileError;
use thiserror::Error;

/// A body arrived but could not be decoded in the expected format.
#[derive(Debug, Error)]
pub enum ResponseFormatError {
    #[error("body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("body is not valid CSV: {0}")]
    Csv(#[from] FileError),
}

#[derive(Debug, Error)]
pub enum ProcesetError {
    /// Network failure, or the request could not be built.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The discovery query returned no connection or an unexpected shape.
    #[error("Connection discovery failed: {0}")]
    ConnectionDiscovery(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] ResponseFormatError),

    /// An outgoing frame could not be rendered as CSV.
    #[error("Failed to serialize table: {0}")]
    Serialization(FileError),
}
