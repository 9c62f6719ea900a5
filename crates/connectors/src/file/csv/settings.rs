/// Timestamp layout the platform expects in uploaded tables.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone)]
pub struct CsvSettings {
    pub delimiter: u8,
    pub has_headers: bool,
    pub timestamp_format: String,
}

impl CsvSettings {
    pub fn new(delimiter: u8, has_headers: bool) -> Self {
        CsvSettings {
            delimiter,
            has_headers,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = format.to_string();
        self
    }
}

impl Default for CsvSettings {
    fn default() -> Self {
        CsvSettings::new(b';', true)
    }
}
