// ABOUTME: Tabular dataset model with typed cells for uploaded athlete metrics
// ABOUTME: Provides column lookup, athlete listing, and row filtering without a dataframe library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::MISSING_MARKERS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Finite numeric value
    Number(f64),
    /// Free text (names, dates, labels)
    Text(String),
    /// Empty or explicitly missing value
    Missing,
}

impl CellValue {
    /// Parse a raw text field, recognising numbers and missing markers
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if MISSING_MARKERS.contains(&trimmed.to_lowercase().as_str()) {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            Ok(_) => Self::Missing,
            Err(_) => Self::Text(trimmed.to_owned()),
        }
    }

    /// Build a cell from a number, mapping non-finite values to `Missing`
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Missing
        }
    }

    /// Numeric value, if this cell holds one
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Missing => None,
        }
    }

    /// Textual view of the cell (`None` when missing)
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Number(value) => Some(value.to_string()),
            Self::Text(text) => Some(text.clone()),
            Self::Missing => None,
        }
    }

    /// Whether this cell is missing
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Whether this cell identifies the given value (used for athlete matching)
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Text(text) => text == value,
            Self::Number(number) => number.to_string() == value,
            Self::Missing => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Missing => Ok(()),
        }
    }
}

/// In-memory table of observations: one row per session, one column per field
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Create an empty dataset with the given column headers
    ///
    /// # Errors
    ///
    /// Returns an error if a column name is duplicated
    pub fn new(columns: Vec<String>) -> AppResult<Self> {
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].contains(column) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate column name: {column}"
                ))
                .with_resource_id(column.clone()));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Append a row
    ///
    /// # Errors
    ///
    /// Returns an error if the row width does not match the column count
    pub fn push_row(&mut self, row: Vec<CellValue>) -> AppResult<()> {
        if row.len() != self.columns.len() {
            return Err(AppError::invalid_input(format!(
                "Row {} has {} cells, expected {}",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column headers in file order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in file order
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Whether a column exists
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of a column that must exist
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the column is absent
    pub fn require_column(&self, name: &str) -> AppResult<usize> {
        self.column_index(name)
            .ok_or_else(|| AppError::missing_field(name))
    }

    /// Rows whose `column` cell matches `value`, in file order
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the column is absent
    pub fn rows_matching(&self, column: &str, value: &str) -> AppResult<Vec<&[CellValue]>> {
        let index = self.require_column(column)?;
        Ok(self
            .rows
            .iter()
            .filter(|row| row[index].matches(value))
            .map(Vec::as_slice)
            .collect())
    }

    /// Distinct non-missing values of a column in first-seen order
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the column is absent
    pub fn distinct_values(&self, column: &str) -> AppResult<Vec<String>> {
        let index = self.require_column(column)?;
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            if let Some(text) = row[index].as_text() {
                if !seen.contains(&text) {
                    seen.push(text);
                }
            }
        }
        Ok(seen)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells() {
        assert_eq!(CellValue::parse(" 82.5 "), CellValue::Number(82.5));
        assert_eq!(CellValue::parse("NaN"), CellValue::Missing);
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("N/A"), CellValue::Missing);
        assert_eq!(
            CellValue::parse("2023-01-01"),
            CellValue::Text("2023-01-01".into())
        );
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let result = Dataset::new(vec!["Athlete".into(), "Athlete".into()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_row_width_checked() {
        let mut dataset = Dataset::new(vec!["Athlete".into(), "Speed".into()]).unwrap();
        assert!(dataset
            .push_row(vec![CellValue::Text("A".into())])
            .is_err());
        assert!(dataset
            .push_row(vec![CellValue::Text("A".into()), CellValue::Number(1.0)])
            .is_ok());
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_distinct_values_keep_first_seen_order() {
        let mut dataset = Dataset::new(vec!["Athlete".into()]).unwrap();
        for name in ["Bea", "Ari", "Bea", "Cal"] {
            dataset.push_row(vec![CellValue::Text(name.into())]).unwrap();
        }
        dataset.push_row(vec![CellValue::Missing]).unwrap();

        assert_eq!(
            dataset.distinct_values("Athlete").unwrap(),
            vec!["Bea", "Ari", "Cal"]
        );
    }
}
