// ABOUTME: Dataset loading and writing for CSV files and JSON record arrays
// ABOUTME: Validates that a loaded dataset is non-empty and carries the athlete column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dataset I/O
//!
//! CSV files carry a header row. JSON files hold an array of flat objects, one
//! per session; columns follow first-seen key order across records.

use coach_core::errors::{AppError, AppResult};
use coach_core::models::{CellValue, Dataset};
use coach_intelligence::config::intelligence::DatasetSchema;
use csv::{ReaderBuilder, Trim, Writer};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Supported dataset file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of flat objects
    Json,
}

impl DataFormat {
    /// Infer the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a missing or unsupported extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Cannot infer data format of '{}': no file extension",
                    path.display()
                ))
            })?
            .parse()
    }
}

impl FromStr for DataFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unsupported data format '{other}' (expected csv or json)"
            ))),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Reads datasets and checks them against a schema
#[derive(Debug, Clone, Copy)]
pub struct DatasetLoader<'a> {
    schema: &'a DatasetSchema,
}

impl<'a> DatasetLoader<'a> {
    /// Create a loader validating against the given schema
    #[must_use]
    pub const fn new(schema: &'a DatasetSchema) -> Self {
        Self { schema }
    }

    /// Load a dataset, inferring the format from the file extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, is empty, or
    /// lacks the athlete column
    pub fn load_path(&self, path: &Path) -> AppResult<Dataset> {
        self.load_with_format(path, DataFormat::from_path(path)?)
    }

    /// Load a dataset in an explicit format
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, is empty, or
    /// lacks the athlete column
    pub fn load_with_format(&self, path: &Path, format: DataFormat) -> AppResult<Dataset> {
        let file = File::open(path).map_err(|e| {
            AppError::storage(format!("Failed to open '{}'", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        let reader = BufReader::new(file);
        let dataset = match format {
            DataFormat::Csv => self.read_csv(reader),
            DataFormat::Json => self.read_json(reader),
        }?;
        info!(
            path = %path.display(),
            format = %format,
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV with a header row
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed CSV, `InvalidInput` for an empty
    /// dataset or one without the athlete column
    pub fn read_csv<R: Read>(&self, reader: R) -> AppResult<Dataset> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| AppError::invalid_format("Failed to read CSV header").with_source(e))?
            .iter()
            .map(str::to_owned)
            .collect();
        let mut dataset = Dataset::new(headers)?;

        for (index, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| {
                AppError::invalid_format(format!("Malformed CSV record {}", index + 1))
                    .with_source(e)
            })?;
            dataset.push_row(record.iter().map(CellValue::parse).collect())?;
        }

        self.validate(dataset)
    }

    /// Parse a JSON array of flat objects
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for invalid JSON, `InvalidFormat` when the
    /// document is not an array of objects, `InvalidInput` for an empty
    /// dataset or one without the athlete column
    pub fn read_json<R: Read>(&self, reader: R) -> AppResult<Dataset> {
        let document: Value = serde_json::from_reader(reader)?;
        let Value::Array(records) = document else {
            return Err(AppError::invalid_format(
                "JSON dataset must be an array of objects",
            ));
        };

        let mut objects: Vec<Map<String, Value>> = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let Value::Object(object) = record else {
                return Err(AppError::invalid_format(format!(
                    "JSON record {} is not an object",
                    index + 1
                )));
            };
            objects.push(object);
        }

        let mut columns: Vec<String> = Vec::new();
        for object in &objects {
            for key in object.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut dataset = Dataset::new(columns.clone())?;
        for object in &objects {
            let row = columns
                .iter()
                .map(|column| object.get(column).map_or(CellValue::Missing, json_cell))
                .collect();
            dataset.push_row(row)?;
        }

        self.validate(dataset)
    }

    fn validate(&self, dataset: Dataset) -> AppResult<Dataset> {
        if dataset.is_empty() {
            return Err(AppError::invalid_input("Dataset is empty"));
        }
        if !dataset.has_column(&self.schema.athlete_column) {
            return Err(AppError::invalid_input(format!(
                "Dataset is missing the '{}' column",
                self.schema.athlete_column
            ))
            .with_resource_id(self.schema.athlete_column.clone()));
        }
        debug!(rows = dataset.len(), "Validated dataset");
        Ok(dataset)
    }
}

fn json_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Missing,
        Value::Number(number) => number
            .as_f64()
            .map_or(CellValue::Missing, CellValue::from_f64),
        Value::String(text) => CellValue::parse(text),
        Value::Bool(flag) => CellValue::Text(flag.to_string()),
        Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
    }
}

/// Write a dataset as CSV with a header row; missing cells are empty
///
/// # Errors
///
/// Returns `StorageError` if writing fails
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> AppResult<()> {
    let mut csv_writer = Writer::from_writer(writer);
    let write_error = |e: csv::Error| AppError::storage("Failed to write CSV").with_source(e);

    csv_writer.write_record(dataset.columns()).map_err(write_error)?;
    for row in dataset.rows() {
        csv_writer
            .write_record(row.iter().map(ToString::to_string))
            .map_err(write_error)?;
    }
    csv_writer
        .flush()
        .map_err(|e| AppError::storage("Failed to flush CSV output").with_source(e))
}

/// Write a dataset as a pretty-printed JSON array of records
///
/// # Errors
///
/// Returns `SerializationError` or `StorageError` if writing fails
pub fn write_json<W: Write>(dataset: &Dataset, mut writer: W) -> AppResult<()> {
    let records: Vec<Value> = dataset
        .rows()
        .iter()
        .map(|row| {
            let object: Map<String, Value> = dataset
                .columns()
                .iter()
                .zip(row)
                .map(|(column, cell)| (column.clone(), cell_json(cell)))
                .collect();
            Value::Object(object)
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;
    Ok(())
}

fn cell_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Number(value) => Number::from_f64(*value).map_or(Value::Null, Value::Number),
        CellValue::Text(text) => Value::String(text.clone()),
        CellValue::Missing => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DataFormat::from_path(Path::new("data/athletes.CSV")).ok(),
            Some(DataFormat::Csv)
        );
        assert_eq!(
            DataFormat::from_path(Path::new("athletes.json")).ok(),
            Some(DataFormat::Json)
        );
        assert!(DataFormat::from_path(Path::new("athletes.xlsx")).is_err());
        assert!(DataFormat::from_path(Path::new("athletes")).is_err());
    }

    #[test]
    fn test_json_cells() {
        assert_eq!(json_cell(&Value::Null), CellValue::Missing);
        assert_eq!(json_cell(&Value::from(82.5)), CellValue::Number(82.5));
        assert_eq!(json_cell(&Value::from("91")), CellValue::Number(91.0));
        assert_eq!(
            json_cell(&Value::from("Alice")),
            CellValue::Text("Alice".into())
        );
    }
}
