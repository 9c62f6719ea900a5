use crate::file::csv::{
    error::FileError,
    metadata::{CsvMetadata, positional_headers},
    settings::CsvSettings,
    types::CsvType,
};
use model::records::frame::DataFrame;
use tracing::debug;

/// Parses delimited text into a frame, inferring one type per column.
pub fn read_frame(text: &str, settings: &CsvSettings) -> Result<DataFrame, FileError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(settings.delimiter)
        .has_headers(settings.has_headers)
        .from_reader(text.as_bytes());

    let records = reader
        .records()
        .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;

    let headers: Vec<String> = if settings.has_headers {
        reader.headers()?.iter().map(String::from).collect()
    } else {
        positional_headers(records.first().map_or(0, |r| r.len()))
    };

    if headers.is_empty() {
        return Err(FileError::InvalidFormat(
            "no columns found in CSV text".to_string(),
        ));
    }

    let meta = CsvMetadata::infer(&headers, &records);
    debug!(
        "Inferred CSV schema: {:?}",
        meta.columns
            .iter()
            .map(|c| (c.name.as_str(), c.data_type, c.is_nullable))
            .collect::<Vec<_>>()
    );

    let mut frame = DataFrame::new(meta.frame_columns());
    for (idx, record) in records.iter().enumerate() {
        let mut row = Vec::with_capacity(meta.columns.len());
        for col_meta in &meta.columns {
            let cell = record.get(col_meta.ordinal).unwrap_or("");
            let value =
                col_meta
                    .data_type
                    .get_value(cell)
                    .ok_or_else(|| FileError::InvalidValue {
                        row: idx,
                        column: col_meta.name.clone(),
                        value: cell.to_string(),
                        expected: col_meta.data_type.to_string(),
                    })?;
            row.push(value);
        }
        frame.push_row(row)?;
    }

    Ok(frame)
}
