use crate::error::CliError;
use connectors::file::csv::{destination::write_frame, settings::CsvSettings};
use model::records::frame::DataFrame;
use std::path::Path;

pub async fn write_table(frame: &DataFrame, path: Option<&Path>) -> Result<(), CliError> {
    let text = write_frame(frame, &CsvSettings::default())?;
    match path {
        Some(path) => tokio::fs::write(path, text).await?,
        None => print!("{text}"),
    }
    Ok(())
}

pub fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{
        core::{data_type::DataType, value::Value},
        records::frame::Column,
    };

    #[tokio::test]
    async fn test_write_table_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let frame = DataFrame::with_rows(
            vec![
                Column::new("a", DataType::Int),
                Column::new("b", DataType::String),
            ],
            vec![vec![Value::Int(1), Value::from("x")]],
        )
        .unwrap();

        write_table(&frame, Some(&path)).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "a;b\n1;x\n");
    }
}
