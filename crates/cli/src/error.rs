use connectors::{file::csv::error::FileError, proceset::ProcesetError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Proceset request failed: {0}")]
    Connector(#[from] ProcesetError),

    #[error("Failed to process CSV table: {0}")]
    Csv(#[from] FileError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
