use model::records::error::FrameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Invalid value in row {row}, column '{column}': {value:?} is not a valid {expected}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
        expected: String,
    },
    #[error("Error writing CSV: {0}")]
    WriteError(String),
    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),
}
