use crate::file::csv::error::FileError;
use model::core::value::Value;
use std::fmt::Write;

/// Turns values into the cell text of an outgoing CSV table. Quoting is left
/// to the CSV writer.
pub trait CsvValueEncoder {
    fn encode_value(&self, value: &Value) -> Result<String, FileError>;

    fn encode_null(&self) -> String;
}

/// Encoding understood by the platform's table upload: pandas-style booleans,
/// shortest round-trip floats and microsecond timestamps.
pub struct PlatformValueEncoder {
    timestamp_format: String,
}

impl PlatformValueEncoder {
    pub fn new(timestamp_format: &str) -> Self {
        Self {
            timestamp_format: timestamp_format.to_string(),
        }
    }
}

impl CsvValueEncoder for PlatformValueEncoder {
    fn encode_value(&self, value: &Value) -> Result<String, FileError> {
        let cell = match value {
            Value::Null => self.encode_null(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) if v.is_nan() => self.encode_null(),
            Value::Float(v) if v.is_infinite() => {
                (if v.is_sign_positive() { "inf" } else { "-inf" }).to_string()
            }
            Value::Float(v) => ryu::Buffer::new().format_finite(*v).to_string(),
            Value::Boolean(v) => (if *v { "True" } else { "False" }).to_string(),
            Value::String(s) => s.clone(),
            Value::Uuid(v) => v.hyphenated().to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::Timestamp(ts) => {
                // chrono reports bad layouts through fmt::Error
                let mut out = String::new();
                write!(out, "{}", ts.naive_utc().format(&self.timestamp_format)).map_err(|_| {
                    FileError::WriteError(format!(
                        "invalid timestamp format '{}'",
                        self.timestamp_format
                    ))
                })?;
                out
            }
        };
        Ok(cell)
    }

    fn encode_null(&self) -> String {
        String::new()
    }
}
