use crate::file::csv::{
    encoder::{CsvValueEncoder, PlatformValueEncoder},
    error::FileError,
    settings::CsvSettings,
};
use model::records::frame::DataFrame;

/// Renders a frame as delimited text: a header row (when enabled) followed by
/// one record per row. Fields are quoted only when they need it.
pub fn write_frame(frame: &DataFrame, settings: &CsvSettings) -> Result<String, FileError> {
    let encoder = PlatformValueEncoder::new(&settings.timestamp_format);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(settings.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    if settings.has_headers {
        writer.write_record(frame.column_names())?;
    }

    for row in frame.rows() {
        let cells = row
            .iter()
            .map(|v| encoder.encode_value(v))
            .collect::<Result<Vec<_>, _>>()?;
        writer.write_record(&cells)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FileError::WriteError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FileError::WriteError(e.to_string()))
}
