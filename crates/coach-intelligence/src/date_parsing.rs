// ABOUTME: Date coercion for dataset cells and chronological row ordering
// ABOUTME: Unparseable dates become missing and sort after every dated row in file order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, NaiveDateTime};
use coach_core::constants::dates::{DATETIME_FORMATS, DATE_FORMATS};
use coach_core::models::CellValue;

/// Parse a date string in any accepted day or timestamp format
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Coerce a dataset cell to a date; numbers are read as `YYYYMMDD`
#[must_use]
pub fn cell_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Text(text) => parse_date(text),
        CellValue::Number(_) => cell.as_text().as_deref().and_then(parse_date),
        CellValue::Missing => None,
    }
}

/// Stable chronological order of `rows` by the date in column `date_index`.
///
/// Rows whose date is missing or unparseable keep their relative order and
/// follow every dated row. Returns the rows paired with their coerced date.
#[must_use]
pub fn sort_by_date<'a>(
    rows: Vec<&'a [CellValue]>,
    date_index: usize,
) -> Vec<(Option<NaiveDate>, &'a [CellValue])> {
    let mut dated: Vec<(Option<NaiveDate>, &[CellValue])> = rows
        .into_iter()
        .map(|row| (row.get(date_index).and_then(cell_date), row))
        .collect();
    // Option orders None first; flip it so undated rows trail
    dated.sort_by_key(|(date, _)| (date.is_none(), *date));
    dated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 15);
        assert_eq!(parse_date("2023-01-15"), expected);
        assert_eq!(parse_date("2023/01/15"), expected);
        assert_eq!(parse_date("01/15/2023"), expected);
        assert_eq!(parse_date("2023-01-15 08:30:00"), expected);
        assert_eq!(parse_date("2023-01-15T08:30:00"), expected);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_undated_rows_trail_in_file_order() {
        let rows = [
            vec![CellValue::Text("2023-03-01".into()), CellValue::Number(3.0)],
            vec![CellValue::Text("garbage".into()), CellValue::Number(9.0)],
            vec![CellValue::Text("2023-01-01".into()), CellValue::Number(1.0)],
            vec![CellValue::Missing, CellValue::Number(10.0)],
        ];
        let sorted = sort_by_date(rows.iter().map(Vec::as_slice).collect(), 0);
        let order: Vec<f64> = sorted
            .iter()
            .filter_map(|(_, row)| row[1].as_number())
            .collect();
        assert_eq!(order, vec![1.0, 3.0, 9.0, 10.0]);
    }
}
