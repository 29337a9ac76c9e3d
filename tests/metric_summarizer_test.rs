// ABOUTME: Integration tests for per-athlete summaries, key metrics, comparisons, and series
// ABOUTME: Validates chronological ordering, empty-athlete policy, and malformed dataset errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{dataset, loud_context, soft_context, training_dataset};
use pierre_coach::coach_core::errors::ErrorCode;
use pierre_coach::coach_core::models::{CellValue, Trend};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn test_recent_is_chronologically_last() {
    let context = soft_context();
    let data = dataset(
        &["Athlete", "Date", "Strength"],
        &[
            &["Alice", "2024-01-03", "85"],
            &["Alice", "2024-01-01", "80"],
            &["Alice", "2024-01-02", "82"],
        ],
    );

    let analysis = context.summarizer().summarize(&data, "Alice").unwrap();
    let strength = analysis.metric("Strength").unwrap();

    assert_eq!(strength.recent, 85.0);
    assert_eq!(strength.trend, Trend::Increasing);
    assert_eq!(strength.count, 3);
}

#[test]
fn test_recent_is_not_the_maximum() {
    let context = soft_context();
    let data = dataset(
        &["Athlete", "Date", "Strength"],
        &[
            &["Alice", "2024-01-02", "90"],
            &["Alice", "2024-01-03", "85"],
            &["Alice", "2024-01-01", "80"],
        ],
    );

    let strength = context
        .summarizer()
        .summarize(&data, "Alice")
        .unwrap()
        .metric("Strength")
        .cloned()
        .unwrap();

    assert_eq!(strength.recent, 85.0);
    assert_eq!(strength.max, 90.0);
    assert_eq!(strength.min, 80.0);
    assert_eq!(strength.median, 85.0);
    assert!((strength.mean - 85.0).abs() < 1e-9);
    assert!((strength.std.unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn test_snapshot_statistics_and_scores() {
    let context = soft_context();
    let analysis = context
        .summarizer()
        .summarize(&training_dataset(), "Alice")
        .unwrap();

    assert_eq!(analysis.athlete, "Alice");
    assert_eq!(analysis.data_points, 3);
    let names: Vec<&str> = analysis.metrics.iter().map(|m| m.metric.as_str()).collect();
    assert_eq!(names, ["Strength", "Speed", "Recovery Time"]);

    assert_eq!(analysis.metric("Speed").unwrap().trend, Trend::Decreasing);
    assert_eq!(
        analysis.metric("Recovery Time").unwrap().trend,
        Trend::Increasing
    );

    assert_eq!(analysis.strengths, vec!["Strength".to_owned()]);
    assert_eq!(analysis.weaknesses, vec!["Recovery Time".to_owned()]);

    let range = analysis.date_range.unwrap();
    assert_eq!(range.start, date(1));
    assert_eq!(range.end, date(3));
}

#[test]
fn test_unparseable_dates_sort_last_but_count() {
    let context = soft_context();
    let data = dataset(
        &["Athlete", "Date", "Speed"],
        &[
            &["Alice", "2024-01-02", "2"],
            &["Alice", "sometime", "100"],
            &["Alice", "2024-01-01", "1"],
        ],
    );

    let series = context
        .summarizer()
        .metric_series(&data, "Alice", "Speed")
        .unwrap();
    let values: Vec<Option<f64>> = series.series.points.iter().map(|p| p.value).collect();
    assert_eq!(values, [Some(1.0), Some(2.0), Some(100.0)]);
    assert_eq!(series.series.points[2].date, None);

    let analysis = context.summarizer().summarize(&data, "Alice").unwrap();
    assert_eq!(analysis.metric("Speed").unwrap().count, 3);
    assert_eq!(analysis.metric("Speed").unwrap().recent, 100.0);
    let range = analysis.date_range.unwrap();
    assert_eq!((range.start, range.end), (date(1), date(2)));
}

#[test]
fn test_without_date_column_keeps_file_order() {
    let context = soft_context();
    let data = dataset(
        &["Athlete", "Speed"],
        &[&["Alice", "9"], &["Alice", "7"], &["Alice", "5"]],
    );

    let analysis = context.summarizer().summarize(&data, "Alice").unwrap();
    assert_eq!(analysis.metric("Speed").unwrap().recent, 5.0);
    assert_eq!(analysis.metric("Speed").unwrap().trend, Trend::Decreasing);
    assert!(analysis.date_range.is_none());
}

#[test]
fn test_missing_values_are_dropped_and_empty_metrics_skipped() {
    let context = soft_context();
    let data = dataset(
        &["Athlete", "Date", "Speed", "Agility"],
        &[
            &["Alice", "2024-01-01", "10", ""],
            &["Alice", "2024-01-02", "NaN", "NA"],
            &["Alice", "2024-01-03", "14", "null"],
        ],
    );

    let analysis = context.summarizer().summarize(&data, "Alice").unwrap();
    assert_eq!(analysis.metric("Speed").unwrap().count, 2);
    assert_eq!(analysis.metric("Speed").unwrap().recent, 14.0);
    assert!(analysis.metric("Agility").is_none());
    assert!(!analysis.strengths.contains(&"Agility".to_owned()));
    assert!(!analysis.weaknesses.contains(&"Agility".to_owned()));
}

#[test]
fn test_unknown_athlete_fail_soft_is_empty() {
    let context = soft_context();
    let analysis = context
        .summarizer()
        .summarize(&training_dataset(), "Nobody")
        .unwrap();
    assert!(analysis.is_empty());
    assert!(analysis.metrics.is_empty());
    assert!(analysis.date_range.is_none());
}

#[test]
fn test_unknown_athlete_fail_loud_is_not_found() {
    let context = loud_context();
    let error = context
        .summarizer()
        .summarize(&training_dataset(), "Nobody")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_missing_athlete_column_is_an_error_under_both_policies() {
    let data = dataset(&["Name", "Speed"], &[&["Alice", "9"]]);

    for context in [soft_context(), loud_context()] {
        let summarizer = context.summarizer();
        assert_eq!(
            summarizer.summarize(&data, "Alice").unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            summarizer.key_metrics(&data, "Alice").unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            summarizer.compare(&data, "Alice", "Bob").unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            summarizer.athletes(&data).unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
    }
}

#[test]
fn test_key_metrics_use_latest_date() {
    let context = soft_context();
    let metrics = context
        .summarizer()
        .key_metrics(&training_dataset(), "Alice")
        .unwrap();

    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics["Strength"], CellValue::Number(85.0));
    assert_eq!(metrics["Speed"], CellValue::Number(70.0));
    assert_eq!(metrics["Recovery Time"], CellValue::Number(30.0));
    assert!(!metrics.contains_key("Session"));
}

#[test]
fn test_key_metrics_omit_missing_and_fall_back_to_last_row() {
    let context = soft_context();
    let data = dataset(
        &["Athlete", "Speed", "Agility"],
        &[&["Alice", "9", "4"], &["Alice", "7", ""]],
    );

    let metrics = context.summarizer().key_metrics(&data, "Alice").unwrap();
    assert_eq!(metrics.get("Speed"), Some(&CellValue::Number(7.0)));
    assert!(!metrics.contains_key("Agility"));

    assert!(context
        .summarizer()
        .key_metrics(&data, "Nobody")
        .unwrap()
        .is_empty());
}

#[test]
fn test_compare_means_and_difference() {
    let context = soft_context();
    let comparison = context
        .summarizer()
        .compare(&training_dataset(), "Alice", "Bob")
        .unwrap();

    let strength = comparison.iter().find(|c| c.metric == "Strength").unwrap();
    assert!((strength.first_mean.unwrap() - 82.333_333).abs() < 1e-4);
    assert!((strength.second_mean.unwrap() - 57.666_667).abs() < 1e-4);
    assert!((strength.difference.unwrap() - 24.666_667).abs() < 1e-4);

    let against_nobody = context
        .summarizer()
        .compare(&training_dataset(), "Alice", "Nobody")
        .unwrap();
    assert!(against_nobody.iter().all(|c| c.second_mean.is_none()));
    assert!(against_nobody.iter().all(|c| c.difference.is_none()));
}

#[test]
fn test_metric_series_with_trendline() {
    let context = soft_context();
    let result = context
        .summarizer()
        .metric_series(&training_dataset(), "Bob", "Strength")
        .unwrap();

    let dates: Vec<Option<NaiveDate>> = result.series.points.iter().map(|p| p.date).collect();
    assert_eq!(dates, [Some(date(1)), Some(date(2)), Some(date(3))]);
    assert_eq!(result.series.values(), vec![60.0, 58.0, 55.0]);
    assert_eq!(result.trend, Trend::Decreasing);
    assert!((result.regression.unwrap().slope + 2.5).abs() < 1e-9);
}

#[test]
fn test_metric_series_rejects_bad_columns() {
    let context = soft_context();
    let summarizer = context.summarizer();
    let data = training_dataset();

    assert_eq!(
        summarizer
            .metric_series(&data, "Alice", "Heart Rate")
            .unwrap_err()
            .code,
        ErrorCode::MissingRequiredField
    );
    assert_eq!(
        summarizer
            .metric_series(&data, "Alice", "Session")
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );
}

#[test]
fn test_athletes_in_first_seen_order() {
    let context = soft_context();
    assert_eq!(
        context.summarizer().athletes(&training_dataset()).unwrap(),
        vec!["Alice".to_owned(), "Bob".to_owned()]
    );
}

#[test]
fn test_summaries_are_idempotent() {
    let context = soft_context();
    let data = training_dataset();
    let first = context.summarizer().summarize(&data, "Bob").unwrap();
    let second = context.summarizer().summarize(&data, "Bob").unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
