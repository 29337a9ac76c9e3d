// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides dataset builders, analysis contexts, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_coach`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use pierre_coach::coach_core::models::{CellValue, Dataset};
use pierre_coach::coach_intelligence::{AnalysisConfig, AnalysisContext, FailurePolicy};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Build a dataset from string cells, parsing numbers and missing markers
pub fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
    let mut dataset = Dataset::new(columns.iter().map(|&c| c.to_owned()).collect()).unwrap();
    for row in rows {
        dataset
            .push_row(row.iter().map(|cell| CellValue::parse(cell)).collect())
            .unwrap();
    }
    dataset
}

/// Two athletes with dated Strength / Speed / Recovery Time sessions, rows out of date order
pub fn training_dataset() -> Dataset {
    dataset(
        &["Athlete", "Date", "Session", "Strength", "Speed", "Recovery Time"],
        &[
            &["Alice", "2024-01-03", "Session 3", "85", "70", "30"],
            &["Bob", "2024-01-01", "Session 1", "60", "90", "20"],
            &["Alice", "2024-01-01", "Session 1", "80", "74", "20"],
            &["Bob", "2024-01-02", "Session 2", "58", "92", "18"],
            &["Alice", "2024-01-02", "Session 2", "82", "72", "25"],
            &["Bob", "2024-01-03", "Session 3", "55", "95", "15"],
        ],
    )
}

/// Default context (fail-soft, pooled normalization)
pub fn soft_context() -> AnalysisContext {
    init_test_logging();
    AnalysisContext::default()
}

/// Context that surfaces failures as errors
pub fn loud_context() -> AnalysisContext {
    init_test_logging();
    AnalysisContext::new(AnalysisConfig {
        failure_policy: FailurePolicy::FailLoud,
        ..AnalysisConfig::default()
    })
    .unwrap()
}
