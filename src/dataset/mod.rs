//! Dataset ingestion
//!
//! Builds the engine's `Vec<Record>` from external row sources. Two formats
//! are supported: a JSON array of flat objects (the shape the view-model was
//! designed around) and CSV with a header row. Ingestion is the one place
//! where malformed input is rejected; once a dataset exists, every value is
//! a valid `CellValue` and the engine has no fatal conditions left.

mod error;

pub use error::{DatasetError, Result};

use crate::{CellValue, Record};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Build a dataset from a JSON string
///
/// The input must be an array of flat objects. Strings become text cells,
/// numbers numeric cells, `null` missing cells, booleans their text form.
/// Nested arrays or objects are rejected.
///
/// # Errors
/// Returns `DatasetError` if the input is not valid JSON, not an array, or
/// contains non-object rows or nested values.
pub fn from_json_str(input: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(input)?;
    from_json_value(value)
}

/// Build a dataset from an already-parsed JSON value
///
/// # Errors
/// Returns `DatasetError` if the value is not an array of flat objects.
pub fn from_json_value(value: Value) -> Result<Vec<Record>> {
    let Value::Array(rows) = value else {
        return Err(DatasetError::NotAnArray(json_type_name(&value).to_string()));
    };

    rows.into_iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let Value::Object(fields) = row else {
                return Err(DatasetError::RowNotAnObject(row_idx));
            };

            // serde_json::Map preserves insertion order only with the
            // preserve_order feature; column order for rendering comes from
            // the ColumnSet, so map order here is not load-bearing.
            fields
                .into_iter()
                .map(|(key, field)| {
                    let cell = cell_from_json(field, row_idx, &key)?;
                    Ok((key, cell))
                })
                .collect::<Result<Record>>()
        })
        .collect()
}

/// Build a dataset from a JSON file
///
/// # Errors
/// Returns `DatasetError` if the file cannot be read or its contents are not
/// an array of flat objects.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path)?;
    from_json_str(&contents)
}

/// Build a dataset from CSV input with a header row
///
/// Every field loads as text (the sort stage still compares numeric strings
/// numerically); empty fields load as missing cells.
///
/// # Errors
/// Returns `DatasetError` if the CSV cannot be parsed.
pub fn from_csv_reader(reader: impl Read) -> Result<Vec<Record>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let record = headers
            .iter()
            .zip(row.iter())
            .map(|(key, field)| {
                let cell = if field.is_empty() {
                    CellValue::Missing
                } else {
                    CellValue::Text(field.to_string())
                };
                (key.to_string(), cell)
            })
            .collect();
        records.push(record);
    }

    Ok(records)
}

/// Build a dataset from a CSV file with a header row
///
/// # Errors
/// Returns `DatasetError` if the file cannot be read or parsed.
pub fn from_csv_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let file = fs::File::open(path)?;
    from_csv_reader(file)
}

/// Ordered union of column keys across all records
///
/// Useful for building a default `ColumnSet` when no explicit declarations
/// exist: keys appear in first-seen order.
#[must_use]
pub fn infer_columns(records: &[Record]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}

fn cell_from_json(value: Value, row: usize, column: &str) -> Result<CellValue> {
    match value {
        Value::String(s) => Ok(CellValue::Text(s)),
        Value::Number(n) => Ok(CellValue::Number(n.as_f64().unwrap_or(f64::MAX))),
        Value::Null => Ok(CellValue::Missing),
        Value::Bool(b) => Ok(CellValue::Text(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(DatasetError::NestedValue {
            row,
            column: column.to_string(),
        }),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
