use crate::file::csv::types::{infer_type, is_missing};
use model::{core::data_type::DataType, records::frame::Column};

#[derive(Debug, Clone)]
pub struct CsvColumnMetadata {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    pub ordinal: usize,
}

#[derive(Debug, Clone)]
pub struct CsvMetadata {
    pub columns: Vec<CsvColumnMetadata>,
}

impl CsvMetadata {
    /// Scans every record once to settle the type and nullability of each
    /// column.
    pub fn infer(headers: &[String], records: &[csv::StringRecord]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(ordinal, name)| {
                let cells = records.iter().map(|r| r.get(ordinal).unwrap_or(""));
                CsvColumnMetadata {
                    name: name.clone(),
                    data_type: infer_type(cells.clone()),
                    is_nullable: cells.clone().any(is_missing),
                    ordinal,
                }
            })
            .collect();

        CsvMetadata { columns }
    }

    pub fn frame_columns(&self) -> Vec<Column> {
        self.columns
            .iter()
            .map(|c| Column::new(&c.name, c.data_type))
            .collect()
    }
}

/// Column names used when the text carries no header row; mirrors positional
/// labels (`0`, `1`, ...).
pub fn positional_headers(width: usize) -> Vec<String> {
    (0..width).map(|i| i.to_string()).collect()
}
