use crate::core::data_type::DataType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("row {row} has {found} values but the frame has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column '{column}' is {expected}, got a {found} value in row {row}")]
    TypeMismatch {
        row: usize,
        column: String,
        expected: DataType,
        found: DataType,
    },
}
