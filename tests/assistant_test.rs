// ABOUTME: End-to-end tests for the athlete assistant facade
// ABOUTME: Generates data to disk, loads it back, and runs every analysis operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::init_test_logging;
use pierre_coach::coach_core::constants::form::POSTURE;
use pierre_coach::coach_core::constants::metrics::SYNTHETIC_METRICS;
use pierre_coach::coach_core::errors::ErrorCode;
use pierre_coach::coach_core::models::{FrameSize, RecommendationCategory};
use pierre_coach::coach_intelligence::{AnalysisConfig, FailurePolicy};
use pierre_coach::dataset_loader::{write_csv, write_json};
use pierre_coach::{AthleteAssistant, SyntheticConfig, SyntheticDataGenerator};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_synthetic(dir: &Path, file_name: &str) -> PathBuf {
    let reference = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let dataset = SyntheticDataGenerator::new(SyntheticConfig::new(42, reference))
        .generate()
        .unwrap();
    let path = dir.join(file_name);
    let file = File::create(&path).unwrap();
    if file_name.ends_with(".json") {
        write_json(&dataset, file).unwrap();
    } else {
        write_csv(&dataset, file).unwrap();
    }
    path
}

#[test]
fn test_full_workflow_over_generated_csv() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write_synthetic(dir.path(), "synthetic.csv");

    let assistant = AthleteAssistant::default();
    let dataset = assistant.load_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 50);

    let athletes = assistant.athletes(&dataset).unwrap();
    assert_eq!(athletes.len(), 10);
    let first = &athletes[0];
    let second = &athletes[1];

    let analysis = assistant.analyze(&dataset, first).unwrap();
    assert_eq!(analysis.data_points, 5);
    assert_eq!(analysis.metrics.len(), SYNTHETIC_METRICS.len());
    for name in &analysis.strengths {
        assert!(!analysis.weaknesses.contains(name));
    }

    let key_metrics = assistant.key_metrics(&dataset, first).unwrap();
    for metric in SYNTHETIC_METRICS {
        assert!(key_metrics.contains_key(metric), "missing {metric}");
    }

    let comparison = assistant.compare(&dataset, first, second).unwrap();
    for metric in SYNTHETIC_METRICS {
        let row = comparison.iter().find(|c| c.metric == metric).unwrap();
        assert!(row.difference.is_some(), "{metric} has no difference");
    }

    let series = assistant
        .metric_series(&dataset, first, "Speed")
        .unwrap();
    assert_eq!(series.series.points.len(), 5);

    let report = assistant.recommend(&dataset, first, None).unwrap();
    assert_eq!(report.athlete, *first);
    assert_eq!(report.weekly_plan.len(), 7);
    for category in RecommendationCategory::ALL {
        assert!(!report.recommendations.is_category_empty(category));
    }
}

#[test]
fn test_json_and_csv_exports_analyze_identically() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let csv_path = write_synthetic(dir.path(), "synthetic.csv");
    let json_path = write_synthetic(dir.path(), "synthetic.json");

    let assistant = AthleteAssistant::default();
    let from_csv = assistant.load_dataset(&csv_path).unwrap();
    let from_json = assistant.load_dataset(&json_path).unwrap();
    assert_eq!(from_csv, from_json);

    let athlete = &assistant.athletes(&from_csv).unwrap()[0];
    assert_eq!(
        assistant.analyze(&from_csv, athlete).unwrap(),
        assistant.analyze(&from_json, athlete).unwrap()
    );
}

#[test]
fn test_recommend_with_form_file() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let data_path = write_synthetic(dir.path(), "synthetic.csv");
    let form_path = dir.path().join("form.json");
    fs::write(
        &form_path,
        r#"{"Posture": ["Rounded lower back at the bottom of the squat"]}"#,
    )
    .unwrap();

    let assistant = AthleteAssistant::default();
    let dataset = assistant.load_dataset(&data_path).unwrap();
    let athlete = &assistant.athletes(&dataset).unwrap()[0];
    let form = AthleteAssistant::load_form_analysis(&form_path).unwrap();

    let report = assistant.recommend(&dataset, athlete, Some(&form)).unwrap();
    assert!(report
        .recommendations
        .get(RecommendationCategory::TechniqueImprovements)
        .iter()
        .any(|line| line == "Focus on maintaining neutral spine throughout exercise"));
}

#[test]
fn test_export_writes_recommendations_and_plan() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let data_path = write_synthetic(dir.path(), "synthetic.csv");
    let export_path = dir.path().join("recommendations.txt");

    let assistant = AthleteAssistant::default();
    let dataset = assistant.load_dataset(&data_path).unwrap();
    let athlete = &assistant.athletes(&dataset).unwrap()[0];
    let report = assistant.recommend(&dataset, athlete, None).unwrap();
    AthleteAssistant::export_recommendations(&report, &export_path).unwrap();

    let text = fs::read_to_string(&export_path).unwrap();
    assert_eq!(text, report.to_text());
    let heading = format!("# Training Recommendations for {athlete}\n\n## Strength Training\n- ");
    assert!(text.starts_with(&heading));
    let plan = text.split("## Weekly Training Plan\n").nth(1).unwrap();
    assert_eq!(plan.lines().count(), 7);
    assert_eq!(
        plan.lines().next(),
        Some("**Monday**: Strength Focus: Compound movements with progressive overload")
    );
    assert_eq!(
        plan.lines().last(),
        Some("**Sunday**: Rest Day: Complete recovery with light stretching")
    );

    let unwritable = dir.path().join("missing").join("out.txt");
    let error = AthleteAssistant::export_recommendations(&report, &unwritable).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_form_file_errors() {
    let dir = TempDir::new().unwrap();
    let missing = AthleteAssistant::load_form_analysis(&dir.path().join("absent.json"));
    assert_eq!(missing.unwrap_err().code, ErrorCode::StorageError);

    let path = dir.path().join("form.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    let malformed = AthleteAssistant::load_form_analysis(&path);
    assert_eq!(malformed.unwrap_err().code, ErrorCode::SerializationError);
}

#[test]
fn test_simulated_form_through_assistant() {
    let assistant = AthleteAssistant::default();
    let form = assistant
        .analyze_simulated_form(FrameSize::new(640, 480))
        .unwrap();
    assert_eq!(form.insights(POSTURE)[0], "Good vertical spine alignment");
}

#[test]
fn test_fail_loud_assistant_rejects_unknown_athlete() {
    let dir = TempDir::new().unwrap();
    let path = write_synthetic(dir.path(), "synthetic.csv");

    let assistant = AthleteAssistant::from_config(AnalysisConfig {
        failure_policy: FailurePolicy::FailLoud,
        ..AnalysisConfig::default()
    })
    .unwrap();
    let dataset = assistant.load_dataset(&path).unwrap();

    assert_eq!(
        assistant.analyze(&dataset, "Nobody").unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = AnalysisConfig::default();
    config.scoring.strength_threshold = -2.0;
    let error = AthleteAssistant::from_config(config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
