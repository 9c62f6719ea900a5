use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical column type of a tabular payload.
///
/// The set mirrors what the platform's CSV export can express without a
/// side-channel schema: integers, floats, booleans, dates, timestamps, UUIDs
/// and free text. `Null` marks a column in which every cell is empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Null,
    Int,
    Float,
    Boolean,
    Date,
    Timestamp,
    Uuid,
    String,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Null => "NULL",
            DataType::Int => "INT",
            DataType::Float => "FLOAT",
            DataType::Boolean => "BOOLEAN",
            DataType::Date => "DATE",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Uuid => "UUID",
            DataType::String => "STRING",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
