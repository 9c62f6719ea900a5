use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use model::core::{data_type::DataType, value::Value};
use uuid::Uuid;

/// The promotion sequence: a column gets the first type that can hold every
/// non-empty cell, falling back to `String`.
const CHAIN: &[DataType] = &[
    DataType::Int,
    DataType::Float,
    DataType::Boolean,
    DataType::Date,
    DataType::Timestamp,
    DataType::Uuid,
    DataType::String,
];

const TIMESTAMP_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Cell texts read as missing values: the common NA markers plus
/// ClickHouse's `\N`.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "\\N",
];

pub fn is_missing(value: &str) -> bool {
    MISSING_TOKENS.contains(&value)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

// Also takes `inf`, `-inf` and `infinity` in any case.
fn parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    for layout in TIMESTAMP_LAYOUTS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, layout) {
            return Some(ts.and_utc());
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    // A bare date widens to midnight so mixed date/timestamp columns still fit.
    parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|ts| ts.and_utc())
}

pub trait CsvType {
    /// Converts a non-empty cell into a value of this type.
    fn parse_cell(&self, value: &str) -> Option<Value>;

    /// Converts a cell, mapping missing markers to `Value::Null`.
    fn get_value(&self, value: &str) -> Option<Value> {
        if is_missing(value) {
            return Some(Value::Null);
        }
        self.parse_cell(value)
    }

    fn can_parse(&self, value: &str) -> bool {
        is_missing(value) || self.parse_cell(value).is_some()
    }
}

impl CsvType for DataType {
    fn parse_cell(&self, value: &str) -> Option<Value> {
        match self {
            DataType::Null => None,
            DataType::Int => value.parse::<i64>().ok().map(Value::Int),
            DataType::Float => parse_float(value).map(Value::Float),
            DataType::Boolean => parse_bool(value).map(Value::Boolean),
            DataType::Date => parse_date(value).map(Value::Date),
            DataType::Timestamp => parse_timestamp(value).map(Value::Timestamp),
            DataType::Uuid => Uuid::parse_str(value).ok().map(Value::Uuid),
            DataType::String => Some(Value::String(value.to_string())),
        }
    }
}

/// Picks the narrowest type able to represent every cell of a column.
pub fn infer_type<'a, I>(cells: I) -> DataType
where
    I: IntoIterator<Item = &'a str>,
{
    let cells: Vec<&str> = cells.into_iter().filter(|c| !is_missing(c)).collect();
    if cells.is_empty() {
        return DataType::Null;
    }

    CHAIN
        .iter()
        .find(|t| cells.iter().all(|c| t.can_parse(c)))
        .copied()
        .unwrap_or(DataType::String)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_integers_and_floats() {
        assert_eq!(infer_type(["1", "2", "-3"]), DataType::Int);
        assert_eq!(infer_type(["1", "2.5"]), DataType::Float);
        assert_eq!(infer_type(["1e3", "2"]), DataType::Float);
    }

    #[test]
    fn test_empty_cells_do_not_promote() {
        assert_eq!(infer_type(["", "4", ""]), DataType::Int);
        assert_eq!(infer_type(["", ""]), DataType::Null);
    }

    #[test]
    fn test_infer_booleans_case_insensitive() {
        assert_eq!(infer_type(["True", "false", "TRUE"]), DataType::Boolean);
        // integers win over booleans for 0/1 columns
        assert_eq!(infer_type(["0", "1"]), DataType::Int);
    }

    #[test]
    fn test_infer_temporal_columns() {
        assert_eq!(infer_type(["2024-01-02", "2024-02-03"]), DataType::Date);
        assert_eq!(
            infer_type(["2024-01-02 10:00:00.000001", "2024-01-03 11:00:00"]),
            DataType::Timestamp
        );
        assert_eq!(
            infer_type(["2024-01-02", "2024-01-03 11:00:00"]),
            DataType::Timestamp
        );
    }

    #[test]
    fn test_mixed_text_falls_back_to_string() {
        assert_eq!(infer_type(["1", "true"]), DataType::String);
        assert_eq!(infer_type(["alpha"]), DataType::String);
    }

    #[test]
    fn test_non_finite_floats_stay_numeric() {
        assert_eq!(infer_type(["1.5", "nan", "inf"]), DataType::Float);
        assert_eq!(infer_type(["1", "-inf"]), DataType::Float);
        assert_eq!(infer_type(["nan", "inf"]), DataType::Float);
        assert_eq!(
            DataType::Float.get_value("-Infinity"),
            Some(Value::Float(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_missing_markers_are_null() {
        for token in ["nan", "NaN", "NULL", "null", "NA", "N/A", "None", "\\N"] {
            assert_eq!(DataType::Int.get_value(token), Some(Value::Null), "{token}");
        }
        assert_eq!(infer_type(["3", "NULL", "\\N"]), DataType::Int);
        assert_eq!(infer_type(["None", "NaN"]), DataType::Null);
        assert_eq!(infer_type(["alpha", "null"]), DataType::String);
    }

    #[test]
    fn test_infer_uuid() {
        assert_eq!(
            infer_type(["67e55044-10b1-426f-9247-bb680e5fe0c8"]),
            DataType::Uuid
        );
    }

    #[test]
    fn test_parse_timestamp_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_micro_opt(12, 30, 45, 123_456)
            .unwrap()
            .and_utc();

        for text in [
            "2024-03-01 12:30:45.123456",
            "2024-03-01T12:30:45.123456",
            "2024-03-01T14:30:45.123456+02:00",
        ] {
            assert_eq!(
                DataType::Timestamp.get_value(text),
                Some(Value::Timestamp(expected)),
                "{text}"
            );
        }
    }

    #[test]
    fn test_empty_cell_is_null_for_every_type() {
        assert_eq!(DataType::Int.get_value(""), Some(Value::Null));
        assert_eq!(DataType::String.get_value(""), Some(Value::Null));
        assert_eq!(DataType::Int.get_value("x"), None);
    }
}
