use crate::{
    core::{data_type::DataType, value::Value},
    records::error::FrameError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Column {
            name: name.to_string(),
            data_type,
        }
    }
}

/// In-memory table exchanged with the platform: ordered, typed columns and
/// ordered rows.
///
/// Every row holds exactly one value per column, and each non-null value
/// matches its column's type. Both are checked on insertion so the CSV
/// writer never has to guess.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    pub fn new(columns: Vec<Column>) -> Self {
        DataFrame {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Result<Self, FrameError> {
        let mut frame = DataFrame::new(columns);
        frame.rows.reserve(rows.len());
        for row in rows {
            frame.push_row(row)?;
        }
        Ok(frame)
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), FrameError> {
        let index = self.rows.len();
        if row.len() != self.columns.len() {
            return Err(FrameError::RowWidth {
                row: index,
                expected: self.columns.len(),
                found: row.len(),
            });
        }

        for (column, value) in self.columns.iter().zip(row.iter()) {
            if !value.is_null() && value.data_type() != column.data_type {
                return Err(FrameError::TypeMismatch {
                    row: index,
                    column: column.name.clone(),
                    expected: column.data_type,
                    found: value.data_type(),
                });
            }
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|idx| &self.columns[idx])
    }

    /// Values of a single column, top to bottom.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
